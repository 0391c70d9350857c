//! Recipe catalog domain types
//!
//! Field names follow the recipe catalog's JSON contract through serde
//! renames, so the same types are used on the wire and in application state.

use serde::{Deserialize, Deserializer, Serialize};

/// Read a text field that the catalog may send as `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Number of positional ingredient/measure slots a meal record carries
pub const INGREDIENT_SLOT_COUNT: usize = 20;

/// A named grouping of meals
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    /// Unique category name, also the lookup key
    #[serde(rename = "strCategory")]
    pub name: String,

    #[serde(rename = "strCategoryThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,

    #[serde(
        rename = "strCategoryDescription",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub description: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        thumbnail: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            thumbnail: thumbnail.into(),
            description: description.into(),
        }
    }
}

/// Minimal meal record used in card grids
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,

    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
}

impl MealSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

/// One positional (ingredient, measure) pair of a meal record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

impl IngredientSlot {
    pub fn new(ingredient: Option<&str>, measure: Option<&str>) -> Self {
        Self {
            ingredient: ingredient.map(str::to_string),
            measure: measure.map(str::to_string),
        }
    }

    /// A slot is used when its ingredient is non-empty after trimming
    pub fn is_filled(&self) -> bool {
        self.ingredient
            .as_deref()
            .is_some_and(|ing| !ing.trim().is_empty())
    }
}

/// Full meal record as returned by the lookup endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub source: Option<String>,
    /// Comma-separated tag string
    pub tags: Option<String>,
    /// Slots 1..=20 in order; index 0 holds slot 1
    pub ingredients: [IngredientSlot; INGREDIENT_SLOT_COUNT],
    /// Newline-delimited instructions text
    pub instructions: Option<String>,
}

impl MealDetail {
    /// Create a detail record with every optional field empty
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: String::new(),
            category: None,
            source: None,
            tags: None,
            ingredients: Default::default(),
            instructions: None,
        }
    }

    /// Set slot `position` (1-based, as in the catalog's field suffixes)
    ///
    /// Positions outside 1..=20 are ignored.
    pub fn with_slot(mut self, position: usize, ingredient: &str, measure: &str) -> Self {
        if let Some(slot) = position
            .checked_sub(1)
            .and_then(|idx| self.ingredients.get_mut(idx))
        {
            *slot = IngredientSlot::new(Some(ingredient), Some(measure));
        }
        self
    }

    /// Iterate over the slots that carry an ingredient, in slot order
    pub fn filled_slots(&self) -> impl Iterator<Item = &IngredientSlot> {
        self.ingredients.iter().filter(|slot| slot.is_filled())
    }
}
