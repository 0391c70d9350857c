//! Grid of cards used for both categories and meals

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::truncate;
use crate::theme::styles;

/// Display columns per card, including its border
pub const CARD_WIDTH: u16 = 24;

/// Rows per card: border, title, badge, border
pub const CARD_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub title: &'a str,
    pub badge: Option<&'a str>,
}

/// Cards per row for a grid drawn into `area`
pub fn columns_for(area: Rect) -> usize {
    let inner_width = area.width.saturating_sub(2);
    (inner_width / CARD_WIDTH).max(1) as usize
}

/// Bordered grid of cards that scrolls to keep the selection visible
pub struct CardGrid<'a> {
    title: &'a str,
    cards: Vec<Card<'a>>,
    selected: usize,
    focused: bool,
    placeholder: &'a str,
}

impl<'a> CardGrid<'a> {
    pub fn new(title: &'a str, cards: Vec<Card<'a>>) -> Self {
        Self {
            title,
            cards,
            selected: 0,
            focused: false,
            placeholder: "",
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Highlight the selected card
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Text shown instead of an empty grid
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Line::from(Span::styled(format!(" {} ", self.title), styles::heading())));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.cards.is_empty() {
            Paragraph::new(self.placeholder)
                .style(styles::text_muted())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let columns = columns_for(area);
        let card_width = inner.width / columns as u16;
        let visible_rows = ((inner.height / CARD_HEIGHT) as usize).max(1);
        let selected = self.selected.min(self.cards.len() - 1);
        let first_row = (selected / columns).saturating_sub(visible_rows - 1);

        for (index, card) in self.cards.iter().enumerate().skip(first_row * columns) {
            let row = index / columns - first_row;
            if row >= visible_rows {
                break;
            }
            let col = index % columns;
            let card_area = Rect::new(
                inner.x + col as u16 * card_width,
                inner.y + row as u16 * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            )
            .intersection(inner);

            render_card(card, index == selected && self.focused, card_area, buf);
        }
    }
}

fn render_card(card: &Card<'_>, highlighted: bool, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if highlighted {
            styles::border_active()
        } else {
            styles::border_inactive()
        });
    let inner = block.inner(area);
    block.render(area, buf);

    let width = inner.width as usize;
    let title_style = if highlighted {
        styles::focused_selected()
    } else {
        styles::text_primary()
    };
    let mut lines = vec![Line::from(Span::styled(
        truncate(card.title, width),
        title_style,
    ))];
    if let Some(badge) = card.badge {
        lines.push(Line::from(Span::styled(truncate(badge, width), styles::badge())));
    }
    Paragraph::new(lines).render(inner, buf);
}
