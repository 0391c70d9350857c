//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::view::ViewMode;
use mealdeck_core::{Category, MealDetail, MealSummary};

/// The query a meal grid was produced by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealQuery {
    /// Free-text search by meal name (already trimmed)
    Search { query: String },
    /// All meals of one category
    Category { name: String },
}

/// Grid / drawer selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Detail panel scroll step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Category Loader
    // ─────────────────────────────────────────────────────────
    /// Fetch the category list
    LoadCategories,

    CategoriesLoaded { categories: Vec<Category> },

    CategoriesFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Search box
    // ─────────────────────────────────────────────────────────
    /// Focus the search input
    StartSearch,

    /// Replace the search input text
    SearchInput { text: String },

    /// Run a search for the (untrimmed) query
    SubmitSearch { query: String },

    /// Leave the search input, keeping its text
    CancelSearch,

    // ─────────────────────────────────────────────────────────
    // Drawer
    // ─────────────────────────────────────────────────────────
    OpenDrawer,
    CloseDrawer,
    DrawerMove(Direction),
    /// Filter by the highlighted drawer entry
    DrawerSelect,

    // ─────────────────────────────────────────────────────────
    // Meal Query Service
    // ─────────────────────────────────────────────────────────
    /// Filter meals by category name
    SelectCategory { name: String },

    MealsLoaded {
        request: MealQuery,
        meals: Vec<MealSummary>,
    },

    MealsFailed { request: MealQuery, error: String },

    // ─────────────────────────────────────────────────────────
    // Meal Detail Renderer
    // ─────────────────────────────────────────────────────────
    ShowDetails { id: String },

    DetailsLoaded { meal: Box<MealDetail> },

    /// The lookup answered with no meal
    DetailsNotFound { id: String },

    DetailsFailed { id: String, error: String },

    ScrollDetails(ScrollStep),

    /// Open the detail panel's source link in a browser
    OpenSourceLink,

    OpenUrlFailed { url: String, error: String },

    // ─────────────────────────────────────────────────────────
    // View Controller / grid navigation
    // ─────────────────────────────────────────────────────────
    SetView(ViewMode),

    MoveSelection(Direction),

    /// Enter on the focused card
    ActivateSelection,

    /// Switch focus between the category grid and the meal grid
    FocusNext,
}
