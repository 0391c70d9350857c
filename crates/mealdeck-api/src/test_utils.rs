//! Test utilities for recipe sources
//!
//! Provides [`FakeRecipeSource`], a canned in-memory catalog that records
//! every request it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mealdeck_core::prelude::*;
use mealdeck_core::{Category, MealDetail, MealSummary};

use crate::source::RecipeSource;

/// A request observed by [`FakeRecipeSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    Categories,
    Search(String),
    Filter(String),
    Lookup(String),
}

/// In-memory recipe source for tests
///
/// Unknown search queries and categories answer with an empty list, unknown
/// meal ids with `None`, mirroring the real catalog's `"meals": null`.
#[derive(Debug, Clone, Default)]
pub struct FakeRecipeSource {
    categories: Vec<Category>,
    searches: HashMap<String, Vec<MealSummary>>,
    filters: HashMap<String, Vec<MealSummary>>,
    meals: HashMap<String, MealDetail>,
    offline: bool,
    delays: HashMap<String, Duration>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeRecipeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_search(mut self, query: &str, meals: Vec<MealSummary>) -> Self {
        self.searches.insert(query.to_string(), meals);
        self
    }

    pub fn with_filter(mut self, category: &str, meals: Vec<MealSummary>) -> Self {
        self.filters.insert(category.to_string(), meals);
        self
    }

    pub fn with_meal(mut self, meal: MealDetail) -> Self {
        self.meals.insert(meal.id.clone(), meal);
        self
    }

    /// Every request fails with a network error
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Delay answers for one search query, category or meal id
    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn log_request(&self, request: RecordedRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }

    async fn record(&self, request: RecordedRequest, key: &str) -> Result<()> {
        self.log_request(request);
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
        if self.offline {
            return Err(Error::network("fake source is offline"));
        }
        Ok(())
    }
}

impl RecipeSource for FakeRecipeSource {
    async fn categories(&self) -> Result<Vec<Category>> {
        self.record(RecordedRequest::Categories, "").await?;
        Ok(self.categories.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<MealSummary>> {
        self.record(RecordedRequest::Search(query.to_string()), query)
            .await?;
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>> {
        self.record(RecordedRequest::Filter(category.to_string()), category)
            .await?;
        Ok(self.filters.get(category).cloned().unwrap_or_default())
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealDetail>> {
        self.record(RecordedRequest::Lookup(id.to_string()), id)
            .await?;
        Ok(self.meals.get(id).cloned())
    }
}

/// Creates a category with a generated thumbnail and the given description
pub fn test_category(name: &str, description: &str) -> Category {
    Category::new(
        name,
        format!("https://example.com/{}.png", name.to_lowercase()),
        description,
    )
}

/// Creates a meal summary with a generated thumbnail
pub fn test_meal(id: &str, name: &str) -> MealSummary {
    MealSummary::new(id, name, format!("https://example.com/{id}.jpg"))
}
