//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{categories, details, keys::handle_key, meals, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Category Loader
        // ─────────────────────────────────────────────────────────
        Message::LoadCategories => categories::handle_load(state),
        Message::CategoriesLoaded { categories } => categories::handle_loaded(state, categories),
        Message::CategoriesFailed { error } => categories::handle_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Search box
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }
        Message::SearchInput { text } => {
            state.search_query = text;
            UpdateResult::none()
        }
        Message::CancelSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::SubmitSearch { query } => meals::handle_search(state, &query),

        // ─────────────────────────────────────────────────────────
        // Meal Query Service
        // ─────────────────────────────────────────────────────────
        Message::SelectCategory { name } => meals::handle_filter(state, &name),
        Message::MealsLoaded { request, meals } => meals::handle_loaded(state, request, meals),
        Message::MealsFailed { request, error } => meals::handle_failed(state, request, error),

        // ─────────────────────────────────────────────────────────
        // Meal Detail Renderer
        // ─────────────────────────────────────────────────────────
        Message::ShowDetails { id } => details::handle_show(state, id),
        Message::DetailsLoaded { meal } => details::handle_loaded(state, &meal),
        Message::DetailsNotFound { id } => details::handle_not_found(state, id),
        Message::DetailsFailed { id, error } => details::handle_failed(state, id, error),
        Message::ScrollDetails(step) => details::handle_scroll(state, step),
        Message::OpenSourceLink => details::handle_open_source(state),
        Message::OpenUrlFailed { url, error } => details::handle_open_failed(state, url, error),

        // ─────────────────────────────────────────────────────────
        // Drawer / navigation
        // ─────────────────────────────────────────────────────────
        Message::OpenDrawer => navigation::handle_open_drawer(state),
        Message::CloseDrawer => navigation::handle_close_drawer(state),
        Message::DrawerMove(direction) => navigation::handle_drawer_move(state, direction),
        Message::DrawerSelect => navigation::handle_drawer_select(state),
        Message::SetView(mode) => {
            state.set_view(mode);
            UpdateResult::none()
        }
        Message::MoveSelection(direction) => navigation::handle_move_selection(state, direction),
        Message::ActivateSelection => navigation::handle_activate(state),
        Message::FocusNext => navigation::handle_focus_next(state),
    }
}
