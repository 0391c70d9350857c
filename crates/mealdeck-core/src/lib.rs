//! # mealdeck-core - Core Domain Types
//!
//! Foundation crate for mealdeck. Provides recipe domain types, the category
//! catalog, meal detail shaping, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Category`] - A named grouping of meals with thumbnail and description
//! - [`MealSummary`] - Minimal meal record used in card grids
//! - [`MealDetail`] - Full meal record with twenty [`IngredientSlot`]s
//!
//! ### Catalog (`catalog`)
//! - [`CategoryCatalog`] - Ordered category list mirrored into a name lookup
//!
//! ### Detail Shaping (`detail`)
//! - [`DetailView`] - Display-ready contents of the detail panel
//! - [`SourceLink`] - Host-name link or placeholder
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum organised by layer, with status-bar notices
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mealdeck_core::prelude::*;
//! ```

pub mod catalog;
pub mod detail;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use catalog::CategoryCatalog;
pub use detail::{
    ingredient_columns, split_instructions, split_tags, DetailView, SourceLink,
    CATEGORY_PLACEHOLDER, SOURCE_PLACEHOLDER,
};
pub use error::{Error, Result, ResultExt};
pub use types::{Category, IngredientSlot, MealDetail, MealSummary, INGREDIENT_SLOT_COUNT};
