//! Drawer, grid selection and focus

use crate::message::{Direction, Message};
use crate::state::{AppState, GridFocus, UiMode};
use crate::view::ViewMode;

use super::UpdateResult;

pub fn handle_open_drawer(state: &mut AppState) -> UpdateResult {
    state.drawer.open = true;
    state.ui_mode = UiMode::Drawer;
    UpdateResult::none()
}

pub fn handle_close_drawer(state: &mut AppState) -> UpdateResult {
    state.drawer.open = false;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_drawer_move(state: &mut AppState, direction: Direction) -> UpdateResult {
    let len = state.drawer.items.len();
    if len == 0 {
        return UpdateResult::none();
    }
    state.drawer.selected = match direction {
        Direction::Up | Direction::Left => state.drawer.selected.saturating_sub(1),
        Direction::Down | Direction::Right => (state.drawer.selected + 1).min(len - 1),
    };
    UpdateResult::none()
}

/// Close the drawer, then filter by the highlighted category
pub fn handle_drawer_select(state: &mut AppState) -> UpdateResult {
    let name = state.drawer.selected_item().map(str::to_string);
    handle_close_drawer(state);
    match name {
        Some(name) => UpdateResult::message(Message::SelectCategory { name }),
        None => UpdateResult::none(),
    }
}

pub fn handle_move_selection(state: &mut AppState, direction: Direction) -> UpdateResult {
    match focused_grid(state) {
        GridFocus::Categories => {
            let len = state.category_cards.len();
            state.category_grid.move_by(direction, len);
        }
        GridFocus::Meals => {
            let len = state.meal_grid.cards().len();
            state.meal_grid_state.move_by(direction, len);
        }
    }
    UpdateResult::none()
}

/// Category card filters, meal card shows details
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    if state.view_mode == ViewMode::Details {
        return UpdateResult::none();
    }
    match focused_grid(state) {
        GridFocus::Categories => match state.category_cards.get(state.category_grid.selected) {
            Some(card) => UpdateResult::message(Message::SelectCategory {
                name: card.name.clone(),
            }),
            None => UpdateResult::none(),
        },
        GridFocus::Meals => match state.meal_grid.cards().get(state.meal_grid_state.selected) {
            Some(card) => UpdateResult::message(Message::ShowDetails {
                id: card.id.clone(),
            }),
            None => UpdateResult::none(),
        },
    }
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.grid_focus = match state.grid_focus {
        GridFocus::Categories if state.meal_grid_focusable() => GridFocus::Meals,
        _ => GridFocus::Categories,
    };
    UpdateResult::none()
}

/// The meal grid only keeps focus while it is visible and has cards
fn focused_grid(state: &AppState) -> GridFocus {
    match state.grid_focus {
        GridFocus::Meals if state.meal_grid_focusable() => GridFocus::Meals,
        _ => GridFocus::Categories,
    }
}
