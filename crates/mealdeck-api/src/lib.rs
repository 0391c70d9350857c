//! # mealdeck-api - Recipe Catalog Client
//!
//! Talks to the TheMealDB-style recipe catalog: four read-only GET endpoints,
//! each returning one JSON document.
//!
//! Depends on [`mealdeck_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Source Abstraction
//! - [`RecipeSource`] - Send-able async trait the application layer depends on
//! - [`LocalRecipeSource`] - Non-Send variant generated alongside it
//!
//! ### HTTP Client
//! - [`HttpRecipeSource`] - reqwest-backed implementation
//!
//! ### Protocol Parsing
//! - [`parse_categories()`], [`parse_meal_summaries()`], [`parse_meal_detail()`]
//! - [`Endpoint`] - Endpoint paths and query keys

pub mod client;
pub mod protocol;
pub mod source;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{HttpRecipeSource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use protocol::{parse_categories, parse_meal_detail, parse_meal_summaries, Endpoint};
pub use source::{LocalRecipeSource, RecipeSource};
