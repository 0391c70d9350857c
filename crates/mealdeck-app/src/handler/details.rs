//! Meal lookup and the detail panel

use mealdeck_core::prelude::*;
use mealdeck_core::{DetailView, MealDetail};

use crate::message::ScrollStep;
use crate::state::{AppState, Notice};
use crate::view::ViewMode;

use super::{UpdateAction, UpdateResult};

/// Lines moved by PageUp / PageDown
const PAGE_LINES: u16 = 10;

pub fn handle_show(state: &mut AppState, id: String) -> UpdateResult {
    debug!("Looking up meal {}", id);
    state.begin_request();
    UpdateResult::action(UpdateAction::FetchMealDetails { id })
}

pub fn handle_loaded(state: &mut AppState, meal: &MealDetail) -> UpdateResult {
    state.finish_request();
    state.clear_error_notice();
    state.details = Some(DetailView::from_meal(meal));
    state.set_view(ViewMode::Details);
    UpdateResult::none()
}

/// No meal with that id; nothing changes but the notice
pub fn handle_not_found(state: &mut AppState, id: String) -> UpdateResult {
    state.finish_request();
    let error = Error::meal_not_found(id);
    warn!("{}", error);
    state.set_error_notice(error.notice());
    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, id: String, error: String) -> UpdateResult {
    state.finish_request();
    warn!("Lookup of meal {} failed: {}", id, error);
    state.set_error_notice(error);
    UpdateResult::none()
}

pub fn handle_scroll(state: &mut AppState, step: ScrollStep) -> UpdateResult {
    if state.view_mode != ViewMode::Details {
        return UpdateResult::none();
    }
    state.detail_scroll = match step {
        ScrollStep::Up => state.detail_scroll.saturating_sub(1),
        ScrollStep::Down => state.detail_scroll.saturating_add(1),
        ScrollStep::PageUp => state.detail_scroll.saturating_sub(PAGE_LINES),
        ScrollStep::PageDown => state.detail_scroll.saturating_add(PAGE_LINES),
        ScrollStep::Top => 0,
    }
    .min(state.detail_max_scroll);
    UpdateResult::none()
}

/// Only a source that rendered as a link can be opened
pub fn handle_open_source(state: &mut AppState) -> UpdateResult {
    let link = state
        .details
        .as_ref()
        .filter(|_| state.view_mode == ViewMode::Details)
        .and_then(|details| {
            let href = details.source.href()?;
            Some((href.to_string(), details.source.text().to_string()))
        });

    let Some((url, host)) = link else {
        return UpdateResult::none();
    };
    state.notice = Some(Notice::info(format!("Opening {host}")));
    UpdateResult::action(UpdateAction::OpenUrl {
        url,
        browser: state.settings.ui.browser.clone(),
    })
}

pub fn handle_open_failed(state: &mut AppState, url: String, error: String) -> UpdateResult {
    warn!("Failed to open {}: {}", url, error);
    state.set_error_notice(format!("Could not open browser: {error}"));
    UpdateResult::none()
}
