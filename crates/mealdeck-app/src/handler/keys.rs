//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::{Direction, Message, ScrollStep};
use crate::state::{AppState, UiMode};
use crate::view::ViewMode;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }
    match state.ui_mode {
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Drawer => handle_key_drawer(key),
        UiMode::Normal if state.view_mode == ViewMode::Details => handle_key_details(key),
        UiMode::Normal => handle_key_grids(key),
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave the input, keeping the text
        InputKey::Esc => Some(Message::CancelSearch),

        InputKey::Enter => Some(Message::SubmitSearch {
            query: state.search_query.clone(),
        }),

        InputKey::Backspace => {
            let mut query = state.search_query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut query = state.search_query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

fn handle_key_drawer(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('m' | 'q') => Some(Message::CloseDrawer),
        InputKey::Up | InputKey::Char('k') => Some(Message::DrawerMove(Direction::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::DrawerMove(Direction::Down)),
        InputKey::Enter => Some(Message::DrawerSelect),
        _ => None,
    }
}

/// Home and category layouts
fn handle_key_grids(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('/' | 's') => Some(Message::StartSearch),
        InputKey::Char('m') => Some(Message::OpenDrawer),
        InputKey::Char('r') => Some(Message::LoadCategories),

        InputKey::Up | InputKey::Char('k') => Some(Message::MoveSelection(Direction::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveSelection(Direction::Down)),
        InputKey::Left | InputKey::Char('h') => Some(Message::MoveSelection(Direction::Left)),
        InputKey::Right | InputKey::Char('l') => Some(Message::MoveSelection(Direction::Right)),

        InputKey::Enter => Some(Message::ActivateSelection),
        InputKey::Tab | InputKey::BackTab => Some(Message::FocusNext),
        InputKey::Esc => Some(Message::SetView(ViewMode::Home)),
        _ => None,
    }
}

fn handle_key_details(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('/' | 's') => Some(Message::StartSearch),
        InputKey::Char('m') => Some(Message::OpenDrawer),
        InputKey::Char('o') => Some(Message::OpenSourceLink),

        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollDetails(ScrollStep::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDetails(ScrollStep::Down)),
        InputKey::PageUp => Some(Message::ScrollDetails(ScrollStep::PageUp)),
        InputKey::PageDown | InputKey::Char(' ') => {
            Some(Message::ScrollDetails(ScrollStep::PageDown))
        }
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollDetails(ScrollStep::Top)),

        // A view switch, not a history pop
        InputKey::Esc | InputKey::Backspace => Some(Message::SetView(ViewMode::Home)),
        _ => None,
    }
}
