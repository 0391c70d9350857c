//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `categories`: Category list load results
//! - `meals`: Search and category filter
//! - `details`: Meal lookup and the detail panel
//! - `navigation`: Drawer, grid selection and view switching

pub(crate) mod categories;
pub(crate) mod details;
pub(crate) mod keys;
pub(crate) mod meals;
pub(crate) mod navigation;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the category list
    FetchCategories,

    /// Free-text meal search; `query` is already trimmed and non-empty
    SearchMeals { query: String },

    /// List the meals of one category
    FilterMeals { category: String },

    /// Fetch one meal by id
    FetchMealDetails { id: String },

    /// Open a URL in the configured or system browser
    OpenUrl { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
