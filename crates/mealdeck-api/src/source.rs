//! Recipe source abstraction
//!
//! The application layer only talks to the catalog through this trait, so the
//! TUI runs against [`crate::HttpRecipeSource`] while tests use a canned
//! source.

use mealdeck_core::prelude::*;
use mealdeck_core::{Category, MealDetail, MealSummary};

/// Read-only access to a recipe catalog
///
/// Each method performs exactly one request. Empty results are `Ok` with an
/// empty list; a meal that does not exist is `Ok(None)`.
#[trait_variant::make(RecipeSource: Send)]
pub trait LocalRecipeSource {
    /// Fetch the full category list
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Free-text search by meal name
    async fn search(&self, query: &str) -> Result<Vec<MealSummary>>;

    /// List the meals of one category
    async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>>;

    /// Fetch one meal by identifier
    async fn lookup(&self, id: &str) -> Result<Option<MealDetail>>;
}
