//! Screen layout definitions for the TUI

use mealdeck_app::Panels;
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the about panel in the category layout
const ABOUT_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and search box
    pub header: Rect,

    /// Everything between header and status bar
    pub body: Rect,

    /// One-line status bar
    pub status: Rect,
}

/// Split the screen into header, body and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered search box)
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Where each visible panel goes; hidden panels get no area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelAreas {
    pub categories: Option<Rect>,
    pub about: Option<Rect>,
    pub meals: Option<Rect>,
    pub details: Option<Rect>,
}

/// Stack the visible panels vertically inside `body`
pub fn panels(body: Rect, panels: &Panels) -> PanelAreas {
    let mut constraints = Vec::new();
    if panels.categories {
        constraints.push(if panels.meals {
            Constraint::Percentage(35)
        } else {
            Constraint::Min(3)
        });
    }
    if panels.about {
        constraints.push(Constraint::Length(ABOUT_HEIGHT));
    }
    if panels.meals {
        constraints.push(Constraint::Min(3));
    }
    if panels.details {
        constraints.push(Constraint::Min(3));
    }

    let chunks = Layout::vertical(constraints).split(body);
    let mut next = chunks.iter().copied();
    let mut take = |visible: bool| if visible { next.next() } else { None };

    PanelAreas {
        categories: take(panels.categories),
        about: take(panels.about),
        meals: take(panels.meals),
        details: take(panels.details),
    }
}

/// Drawer overlay anchored to the left edge of `body`
pub fn drawer(body: Rect, width: u16) -> Rect {
    Rect {
        width: width.max(10).min(body.width),
        ..body
    }
}
