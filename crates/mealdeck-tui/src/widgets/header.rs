//! Header with the search box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Header<'a> {
    query: &'a str,
    editing: bool,
}

impl<'a> Header<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            editing: false,
        }
    }

    /// Search box has keyboard focus
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.editing).title(Line::from(Span::styled(
            " mealdeck ",
            styles::accent_bold(),
        )));

        let mut spans = vec![Span::styled("/ ", styles::keybinding())];
        if self.query.is_empty() && !self.editing {
            spans.push(Span::styled("Search meals...", styles::text_muted()));
        } else {
            spans.push(Span::styled(self.query, styles::text_primary()));
        }
        if self.editing {
            spans.push(Span::styled("_", styles::keybinding()));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
