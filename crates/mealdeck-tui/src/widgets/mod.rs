//! Widget components for the TUI

mod about;
mod card_grid;
mod detail;
mod drawer;
mod header;
mod status_bar;

pub use about::AboutPanel;
pub use card_grid::{columns_for, Card, CardGrid, CARD_HEIGHT, CARD_WIDTH};
pub use detail::{detail_lines, max_scroll, DetailPanel};
pub use drawer::Drawer;
pub use header::Header;
pub use status_bar::StatusBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max` display columns, marking the cut with `…`
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
