//! Recipe catalog JSON envelopes
//!
//! Every endpoint answers with a single JSON object wrapping a list:
//! `{"categories": [...]}` for the category list and `{"meals": [...]}` for
//! everything else, where `"meals"` is `null` when nothing matched.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use mealdeck_core::prelude::*;
use mealdeck_core::{Category, IngredientSlot, MealDetail, MealSummary, INGREDIENT_SLOT_COUNT};

/// The four read-only endpoints of the recipe catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Categories,
    Search,
    FilterByCategory,
    Lookup,
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Categories => "categories.php",
            Endpoint::Search => "search.php",
            Endpoint::FilterByCategory => "filter.php",
            Endpoint::Lookup => "lookup.php",
        }
    }

    /// Name of the single query parameter, if the endpoint takes one
    pub fn query_key(&self) -> Option<&'static str> {
        match self {
            Endpoint::Categories => None,
            Endpoint::Search => Some("s"),
            Endpoint::FilterByCategory => Some("c"),
            Endpoint::Lookup => Some("i"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    categories: Option<Vec<Category>>,
}

#[derive(Debug, Deserialize)]
struct MealsEnvelope<T> {
    meals: Option<Vec<T>>,
}

/// Raw lookup record; the positional ingredient fields land in `rest`
#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl MealRecord {
    fn field(&self, name: &str) -> Option<&str> {
        self.rest.get(name).and_then(Value::as_str)
    }

    fn into_detail(self) -> MealDetail {
        let mut ingredients: [IngredientSlot; INGREDIENT_SLOT_COUNT] = Default::default();
        for (idx, slot) in ingredients.iter_mut().enumerate() {
            let n = idx + 1;
            *slot = IngredientSlot::new(
                self.field(&format!("strIngredient{n}")),
                self.field(&format!("strMeasure{n}")),
            );
        }

        MealDetail {
            id: self.id,
            name: self.name.unwrap_or_default(),
            thumbnail: self.thumbnail.unwrap_or_default(),
            category: self.category,
            source: self.source,
            tags: self.tags,
            ingredients,
            instructions: self.instructions,
        }
    }
}

fn decode<'a, T: Deserialize<'a>>(endpoint: Endpoint, body: &'a str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::decode(endpoint.path(), e.to_string()))
}

/// Parse the category list; an absent list is treated as empty
pub fn parse_categories(body: &str) -> Result<Vec<Category>> {
    let envelope: CategoriesEnvelope = decode(Endpoint::Categories, body)?;
    Ok(envelope.categories.unwrap_or_default())
}

/// Parse a search or filter response; `"meals": null` becomes an empty list
pub fn parse_meal_summaries(endpoint: Endpoint, body: &str) -> Result<Vec<MealSummary>> {
    let envelope: MealsEnvelope<MealSummary> = decode(endpoint, body)?;
    Ok(envelope.meals.unwrap_or_default())
}

/// Parse a lookup response; `None` when the catalog has no such meal
pub fn parse_meal_detail(body: &str) -> Result<Option<MealDetail>> {
    let envelope: MealsEnvelope<MealRecord> = decode(Endpoint::Lookup, body)?;
    Ok(envelope
        .meals
        .and_then(|meals| meals.into_iter().next())
        .map(MealRecord::into_detail))
}
