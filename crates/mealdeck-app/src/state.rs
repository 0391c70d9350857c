//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::message::Direction;
use crate::view::{Panels, ViewMode};
use mealdeck_core::{Category, CategoryCatalog, DetailView, MealSummary};

/// Heading shown above every meal grid
pub const MEALS_HEADING: &str = "Meals";

/// Placeholder rendered instead of an empty meal grid
pub const NO_MEALS_PLACEHOLDER: &str = "No meals found.";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Waiting for the first category list
    #[default]
    Starting,
    Running,
    Quitting,
}

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Grids and detail panel
    #[default]
    Normal,

    /// Typing into the search box
    SearchInput,

    /// Category drawer is open
    Drawer,
}

/// Which card grid has the selection cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridFocus {
    #[default]
    Categories,
    Meals,
}

/// Selection within a card grid laid out in rows of `columns`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridState {
    pub selected: usize,
    /// Cards per row, as of the last render
    pub columns: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: 0,
            columns: 1,
        }
    }
}

impl GridState {
    /// Move the cursor within a grid of `len` cards, staying in bounds
    pub fn move_by(&mut self, direction: Direction, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let columns = self.columns.max(1);
        let selected = self.selected.min(len - 1);
        self.selected = match direction {
            Direction::Left => selected.saturating_sub(1),
            Direction::Right => (selected + 1).min(len - 1),
            Direction::Up if selected >= columns => selected - columns,
            Direction::Down if selected + columns < len => selected + columns,
            Direction::Up | Direction::Down => selected,
        };
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Card in the category grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub name: String,
    /// Upper-cased category name
    pub badge: String,
    pub thumbnail: String,
}

impl CategoryCard {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            badge: category.name.to_uppercase(),
            thumbnail: category.thumbnail.clone(),
        }
    }
}

/// Card in the meal grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCard {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    /// Category name for category listings, none for search results
    pub badge: Option<String>,
}

impl MealCard {
    pub fn from_summary(meal: &MealSummary, badge: Option<&str>) -> Self {
        Self {
            id: meal.id.clone(),
            title: meal.name.clone(),
            thumbnail: meal.thumbnail.clone(),
            badge: badge.map(str::to_string),
        }
    }
}

/// Contents of the meal grid region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MealGrid {
    /// Nothing queried yet
    #[default]
    Empty,
    Cards(Vec<MealCard>),
    /// The last query returned no meals
    NoResults,
}

impl MealGrid {
    pub fn cards(&self) -> &[MealCard] {
        match self {
            MealGrid::Cards(cards) => cards,
            MealGrid::Empty | MealGrid::NoResults => &[],
        }
    }
}

/// Contents of the about panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AboutContent {
    Category { title: String, description: String },
    SearchResults { query: String },
}

/// Category drawer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub open: bool,
    /// One entry per category name, in catalog order
    pub items: Vec<String>,
    pub selected: usize,
}

impl DrawerState {
    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line status bar message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    pub at: DateTime<Local>,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
            at: Local::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Info,
            at: Local::now(),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    // View Controller
    pub view_mode: ViewMode,
    pub panels: Panels,
    pub ui_mode: UiMode,

    // Category Loader
    pub catalog: CategoryCatalog,
    pub drawer: DrawerState,
    pub category_cards: Vec<CategoryCard>,
    pub category_grid: GridState,

    // Meal Query Service
    pub search_query: String,
    pub meals_heading: String,
    pub meal_grid: MealGrid,
    pub meal_grid_state: GridState,
    pub about: Option<AboutContent>,
    pub grid_focus: GridFocus,

    // Meal Detail Renderer
    pub details: Option<DetailView>,
    /// Rows scrolled from the top of the detail panel
    pub detail_scroll: u16,
    /// Largest useful `detail_scroll`, as of the last render
    pub detail_max_scroll: u16,

    pub notice: Option<Notice>,
    /// Requests issued and not yet answered
    pub pending: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let view_mode = settings.ui.start_view_mode();
        let mut state = Self {
            phase: AppPhase::Starting,
            settings,
            view_mode,
            panels: Panels::hidden(),
            ui_mode: UiMode::Normal,
            catalog: CategoryCatalog::default(),
            drawer: DrawerState::default(),
            category_cards: Vec::new(),
            category_grid: GridState::default(),
            search_query: String::new(),
            meals_heading: MEALS_HEADING.to_string(),
            meal_grid: MealGrid::Empty,
            meal_grid_state: GridState::default(),
            about: None,
            grid_focus: GridFocus::Categories,
            details: None,
            detail_scroll: 0,
            detail_max_scroll: u16::MAX,
            notice: None,
            pending: 0,
        };
        state.set_view(view_mode);
        state
    }

    /// Hide every panel, then reveal exactly the set for `mode`
    pub fn set_view(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.panels = Panels::for_mode(mode);
        if mode == ViewMode::Details {
            self.detail_scroll = 0;
        }
        if mode == ViewMode::Home {
            self.grid_focus = GridFocus::Categories;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Count a request about to be issued
    pub fn begin_request(&mut self) {
        self.pending += 1;
    }

    /// Count an answered request
    pub fn finish_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    pub fn set_error_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::error(message));
    }

    /// Drop any error notice after a successful response
    pub fn clear_error_notice(&mut self) {
        if matches!(&self.notice, Some(n) if n.level == NoticeLevel::Error) {
            self.notice = None;
        }
    }

    /// Whether the meal grid is part of the visible panel set and can take focus
    pub fn meal_grid_focusable(&self) -> bool {
        self.panels.meals && !self.meal_grid.cards().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_home() {
        let state = AppState::new();
        assert_eq!(state.phase, AppPhase::Starting);
        assert_eq!(state.view_mode, ViewMode::Home);
        assert_eq!(state.panels, Panels::for_mode(ViewMode::Home));
        assert_eq!(state.meals_heading, MEALS_HEADING);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_start_view_from_settings() {
        let mut settings = Settings::default();
        settings.ui.start_view = "category".to_string();
        let state = AppState::with_settings(settings);
        assert_eq!(state.view_mode, ViewMode::Category);
        assert!(state.panels.meals);
    }

    #[test]
    fn test_unknown_start_view_is_home() {
        let mut settings = Settings::default();
        settings.ui.start_view = "bogus".to_string();
        let state = AppState::with_settings(settings);
        assert_eq!(state.view_mode, ViewMode::Home);
        assert_eq!(state.panels, Panels::for_mode(ViewMode::Home));
    }

    #[test]
    fn test_set_view_exact_panel_sets() {
        let mut state = AppState::new();
        for mode in [ViewMode::Category, ViewMode::Details, ViewMode::Home] {
            state.set_view(mode);
            assert_eq!(state.view_mode, mode);
            assert_eq!(state.panels, Panels::for_mode(mode));
        }
    }

    #[test]
    fn test_set_view_is_idempotent() {
        let mut state = AppState::new();
        state.set_view(ViewMode::Category);
        let first = state.panels;
        state.set_view(ViewMode::Category);
        assert_eq!(state.panels, first);
        assert_eq!(state.view_mode, ViewMode::Category);
    }

    #[test]
    fn test_set_view_details_scrolls_to_top() {
        let mut state = AppState::new();
        state.detail_scroll = 12;
        state.set_view(ViewMode::Details);
        assert_eq!(state.detail_scroll, 0);
    }

    #[test]
    fn test_grid_move_within_rows() {
        let mut grid = GridState {
            selected: 0,
            columns: 3,
        };
        grid.move_by(Direction::Down, 7);
        assert_eq!(grid.selected, 3);
        grid.move_by(Direction::Down, 7);
        assert_eq!(grid.selected, 6);
        // no full row below
        grid.move_by(Direction::Down, 7);
        assert_eq!(grid.selected, 6);
        grid.move_by(Direction::Right, 7);
        assert_eq!(grid.selected, 6);
        grid.move_by(Direction::Up, 7);
        assert_eq!(grid.selected, 3);
        grid.move_by(Direction::Left, 7);
        assert_eq!(grid.selected, 2);
    }

    #[test]
    fn test_grid_move_empty() {
        let mut grid = GridState {
            selected: 4,
            columns: 2,
        };
        grid.move_by(Direction::Right, 0);
        assert_eq!(grid.selected, 0);
    }

    #[test]
    fn test_grid_clamp() {
        let mut grid = GridState {
            selected: 9,
            columns: 2,
        };
        grid.clamp(3);
        assert_eq!(grid.selected, 2);
        grid.clamp(0);
        assert_eq!(grid.selected, 0);
    }

    #[test]
    fn test_category_card_badge_is_uppercase() {
        let card = CategoryCard::from_category(&Category::new("Seafood", "t.png", "D"));
        assert_eq!(card.badge, "SEAFOOD");
        assert_eq!(card.name, "Seafood");
    }

    #[test]
    fn test_clear_error_notice_keeps_info() {
        let mut state = AppState::new();
        state.notice = Some(Notice::info("Config written"));
        state.clear_error_notice();
        assert!(state.notice.is_some());

        state.set_error_notice("Network error: down");
        state.clear_error_notice();
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_pending_never_underflows() {
        let mut state = AppState::new();
        state.finish_request();
        assert_eq!(state.pending, 0);
        state.begin_request();
        assert!(state.is_loading());
    }
}
