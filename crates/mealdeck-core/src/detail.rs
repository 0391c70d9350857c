//! Meal detail shaping
//!
//! Turns a [`MealDetail`] record into the display-ready pieces of the detail
//! panel: source link, tag chips, ingredient/measure columns and numbered
//! instruction steps. Pure functions, no I/O.

use url::Url;

use crate::types::MealDetail;

/// Shown when a meal has no category
pub const CATEGORY_PLACEHOLDER: &str = "-";

/// Shown instead of a source link when the meal has no usable source
pub const SOURCE_PLACEHOLDER: &str = "—";

/// Source link of the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLink {
    /// Active link: host name as text, full URL as target
    Link { text: String, href: String },
    /// No usable source; rendered as [`SOURCE_PLACEHOLDER`] with no target
    Placeholder,
}

impl SourceLink {
    /// Build the link from an optional source field
    ///
    /// Only values starting with an http scheme that parse as a URL with a
    /// host become links.
    pub fn from_source(source: Option<&str>) -> Self {
        let Some(source) = source.map(str::trim) else {
            return SourceLink::Placeholder;
        };
        if !source.starts_with("http") {
            return SourceLink::Placeholder;
        }
        match Url::parse(source) {
            Ok(url) => match url.host_str() {
                Some(host) => SourceLink::Link {
                    text: host.to_string(),
                    href: source.to_string(),
                },
                None => SourceLink::Placeholder,
            },
            Err(e) => {
                tracing::debug!("Ignoring unparsable source {:?}: {}", source, e);
                SourceLink::Placeholder
            }
        }
    }

    /// Visible text of the link element
    pub fn text(&self) -> &str {
        match self {
            SourceLink::Link { text, .. } => text,
            SourceLink::Placeholder => SOURCE_PLACEHOLDER,
        }
    }

    /// Link target, if the link is active
    pub fn href(&self) -> Option<&str> {
        match self {
            SourceLink::Link { href, .. } => Some(href),
            SourceLink::Placeholder => None,
        }
    }
}

/// Display-ready contents of the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub breadcrumb: String,
    pub image: String,
    pub category: String,
    pub source: SourceLink,
    pub tags: Vec<String>,
    /// Ingredient names; `measures[i]` belongs to `ingredients[i]`
    pub ingredients: Vec<String>,
    pub measures: Vec<String>,
    pub instructions: Vec<String>,
}

impl DetailView {
    pub fn from_meal(meal: &MealDetail) -> Self {
        let (ingredients, measures) = ingredient_columns(meal);
        Self {
            id: meal.id.clone(),
            breadcrumb: meal.name.clone(),
            image: meal.thumbnail.clone(),
            category: meal
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(CATEGORY_PLACEHOLDER)
                .to_string(),
            source: SourceLink::from_source(meal.source.as_deref()),
            tags: split_tags(meal.tags.as_deref()),
            ingredients,
            measures,
            instructions: split_instructions(meal.instructions.as_deref().unwrap_or_default()),
        }
    }
}

/// Split a comma-separated tag string into trimmed tags
///
/// Empty pieces (`"Meat,,Pie,"`) are dropped so no blank chip renders.
pub fn split_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Scan all twenty slots and collect ingredient and measure columns
///
/// Empty slots are skipped without stopping the scan, so sparse records
/// keep every filled slot. Blankness is judged on the trimmed name, but the
/// name is kept as sent; only the measure is trimmed. Missing measures
/// become empty strings.
pub fn ingredient_columns(meal: &MealDetail) -> (Vec<String>, Vec<String>) {
    meal.filled_slots()
        .map(|slot| {
            (
                slot.ingredient.as_deref().unwrap_or_default().to_string(),
                slot.measure.as_deref().unwrap_or_default().trim().to_string(),
            )
        })
        .unzip()
}

/// Split instructions on runs of newlines, dropping empty segments
///
/// Segment text is kept as sent apart from a trailing `\r`.
pub fn split_instructions(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
