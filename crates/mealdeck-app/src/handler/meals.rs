//! Meal search and category filter

use mealdeck_core::prelude::*;
use mealdeck_core::MealSummary;

use crate::message::MealQuery;
use crate::state::{
    AboutContent, AppState, GridFocus, GridState, MealCard, MealGrid, UiMode, MEALS_HEADING,
};
use crate::view::ViewMode;

use super::{UpdateAction, UpdateResult};

/// Search by name; an empty query returns home without a request
pub fn handle_search(state: &mut AppState, query: &str) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    let query = query.trim();
    if query.is_empty() {
        state.set_view(ViewMode::Home);
        return UpdateResult::none();
    }

    debug!("Searching meals for {:?}", query);
    state.begin_request();
    UpdateResult::action(UpdateAction::SearchMeals {
        query: query.to_string(),
    })
}

/// Fill the about panel from the catalog, then list the category's meals
pub fn handle_filter(state: &mut AppState, name: &str) -> UpdateResult {
    let Some(category) = state.catalog.get(name) else {
        warn!("{}, not filtering", Error::unknown_category(name));
        return UpdateResult::none();
    };

    state.about = Some(AboutContent::Category {
        title: category.name.clone(),
        description: category.description.clone(),
    });
    let category = category.name.clone();

    debug!("Filtering meals by {:?}", category);
    state.begin_request();
    UpdateResult::action(UpdateAction::FilterMeals { category })
}

/// Replace the meal grid with a query's results and show the category layout
///
/// Results are applied in arrival order, so a response that completes later
/// overwrites whatever an earlier one rendered.
pub fn handle_loaded(
    state: &mut AppState,
    request: MealQuery,
    meals: Vec<MealSummary>,
) -> UpdateResult {
    state.finish_request();
    state.clear_error_notice();

    let badge = match &request {
        MealQuery::Search { .. } => None,
        MealQuery::Category { name } => Some(name.as_str()),
    };
    state.meal_grid = if meals.is_empty() {
        MealGrid::NoResults
    } else {
        MealGrid::Cards(
            meals
                .iter()
                .map(|meal| MealCard::from_summary(meal, badge))
                .collect(),
        )
    };
    state.meal_grid_state = GridState {
        selected: 0,
        ..state.meal_grid_state
    };
    state.meals_heading = MEALS_HEADING.to_string();

    state.about = match request {
        MealQuery::Search { query } => Some(AboutContent::SearchResults { query }),
        MealQuery::Category { name } => match state.catalog.get(&name) {
            Some(category) => Some(AboutContent::Category {
                title: category.name.clone(),
                description: category.description.clone(),
            }),
            None => Some(AboutContent::Category {
                title: name,
                description: String::new(),
            }),
        },
    };

    state.set_view(ViewMode::Category);
    state.grid_focus = if state.meal_grid.cards().is_empty() {
        GridFocus::Categories
    } else {
        GridFocus::Meals
    };

    UpdateResult::none()
}

/// The panel set is left untouched
pub fn handle_failed(state: &mut AppState, request: MealQuery, error: String) -> UpdateResult {
    state.finish_request();
    warn!("Meal query {:?} failed: {}", request, error);
    state.set_error_notice(error);
    UpdateResult::none()
}
