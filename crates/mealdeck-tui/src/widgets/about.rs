//! About panel above the meal grid

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mealdeck_app::state::AboutContent;

use crate::theme::styles;

pub struct AboutPanel<'a> {
    content: Option<&'a AboutContent>,
}

impl<'a> AboutPanel<'a> {
    pub fn new(content: Option<&'a AboutContent>) -> Self {
        Self { content }
    }
}

impl Widget for AboutPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self.content {
            Some(AboutContent::Category { title, description }) => vec![
                Line::from(Span::styled(title.as_str(), styles::accent_bold())),
                Line::from(Span::styled(description.as_str(), styles::text_secondary())),
            ],
            Some(AboutContent::SearchResults { query }) => vec![
                Line::from(Span::styled("Search results", styles::accent_bold())),
                Line::from(vec![
                    Span::styled("for ", styles::text_muted()),
                    Span::styled(format!("\"{query}\""), styles::text_primary()),
                ]),
            ],
            None => vec![Line::from(Span::styled(
                "Pick a category or search for a meal.",
                styles::text_muted(),
            ))],
        };

        let block = styles::glass_block(false).title(" About ");
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
