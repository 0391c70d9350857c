//! Category list loading

use mealdeck_core::prelude::*;
use mealdeck_core::{Category, CategoryCatalog};

use crate::state::{AppPhase, AppState, CategoryCard};

use super::{UpdateAction, UpdateResult};

pub fn handle_load(state: &mut AppState) -> UpdateResult {
    state.begin_request();
    UpdateResult::action(UpdateAction::FetchCategories)
}

/// Rebuild the catalog, the drawer list and the category cards wholesale
pub fn handle_loaded(state: &mut AppState, categories: Vec<Category>) -> UpdateResult {
    state.finish_request();
    state.phase = match state.phase {
        AppPhase::Starting => AppPhase::Running,
        phase => phase,
    };
    info!("Loaded {} categories", categories.len());

    state.catalog = CategoryCatalog::new(categories);
    state.drawer.items = state
        .catalog
        .categories()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    state.drawer.selected = state
        .drawer
        .selected
        .min(state.drawer.items.len().saturating_sub(1));
    state.category_cards = state
        .catalog
        .categories()
        .iter()
        .map(CategoryCard::from_category)
        .collect();
    state.category_grid.clamp(state.category_cards.len());
    state.clear_error_notice();

    UpdateResult::none()
}

/// The panel set is left untouched
pub fn handle_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.finish_request();
    if state.phase == AppPhase::Starting {
        state.phase = AppPhase::Running;
    }
    warn!("Category list failed: {}", error);
    state.set_error_notice(error);
    UpdateResult::none()
}
