//! Main render/view function (View in TEA pattern)


use mealdeck_app::state::{AppPhase, AppState, GridFocus, MealGrid, UiMode, NO_MEALS_PLACEHOLDER};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets::{self, Card, CardGrid};

/// Render the complete UI (View function in TEA)
///
/// Only mutates the grids' column counts, which key navigation needs and
/// only the renderer knows.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let normal = state.ui_mode == UiMode::Normal;

    frame.render_widget(
        widgets::Header::new(&state.search_query).editing(state.ui_mode == UiMode::SearchInput),
        areas.header,
    );

    let panels = layout::panels(areas.body, &state.panels);
    let meals_focused = state.grid_focus == GridFocus::Meals && state.meal_grid_focusable();

    if let Some(rect) = panels.categories {
        state.category_grid.columns = widgets::columns_for(rect);
        let cards = state
            .category_cards
            .iter()
            .map(|c| Card {
                title: c.name.as_str(),
                badge: Some(c.badge.as_str()),
            })
            .collect();
        let placeholder = if state.phase == AppPhase::Starting {
            "Loading categories…"
        } else {
            "No categories. Press r to reload."
        };
        frame.render_widget(
            CardGrid::new("Categories", cards)
                .selected(state.category_grid.selected)
                .focused(normal && !meals_focused)
                .placeholder(placeholder),
            rect,
        );
    }

    if let Some(rect) = panels.about {
        frame.render_widget(widgets::AboutPanel::new(state.about.as_ref()), rect);
    }

    if let Some(rect) = panels.meals {
        state.meal_grid_state.columns = widgets::columns_for(rect);
        let cards = state
            .meal_grid
            .cards()
            .iter()
            .map(|m| Card {
                title: m.title.as_str(),
                badge: m.badge.as_deref(),
            })
            .collect();
        let placeholder = match state.meal_grid {
            MealGrid::NoResults => NO_MEALS_PLACEHOLDER,
            MealGrid::Empty | MealGrid::Cards(_) => "",
        };
        frame.render_widget(
            CardGrid::new(&state.meals_heading, cards)
                .selected(state.meal_grid_state.selected)
                .focused(normal && meals_focused)
                .placeholder(placeholder),
            rect,
        );
    }

    if let Some(rect) = panels.details {
        match &state.details {
            Some(view) => {
                state.detail_max_scroll = widgets::max_scroll(view, rect);
                state.detail_scroll = state.detail_scroll.min(state.detail_max_scroll);
                frame.render_widget(
                    widgets::DetailPanel::new(view).scroll(state.detail_scroll),
                    rect,
                );
            }
            None => frame.render_widget(
                Paragraph::new("No meal selected.")
                    .style(styles::text_muted())
                    .alignment(Alignment::Center)
                    .block(styles::glass_block(false)),
                rect,
            ),
        }
    }

    if state.drawer.open {
        frame.render_widget(
            widgets::Drawer::new(&state.drawer),
            layout::drawer(areas.body, state.settings.ui.drawer_width),
        );
    }

    frame.render_widget(
        widgets::StatusBar::new(state.view_mode, state.ui_mode)
            .notice(state.notice.as_ref())
            .loading(state.is_loading()),
        areas.status,
    );
}
