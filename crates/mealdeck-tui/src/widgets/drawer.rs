//! Category drawer overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use mealdeck_app::state::DrawerState;

use super::truncate;
use crate::theme::styles;

pub struct Drawer<'a> {
    drawer: &'a DrawerState,
}

impl<'a> Drawer<'a> {
    pub fn new(drawer: &'a DrawerState) -> Self {
        Self { drawer }
    }
}

impl Widget for Drawer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popup_block(" Categories ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.drawer.items.is_empty() {
            Paragraph::new("No categories loaded")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let height = (inner.height as usize).max(1);
        let first = self.drawer.selected.saturating_sub(height - 1);
        let width = inner.width as usize;

        let lines: Vec<Line> = self
            .drawer
            .items
            .iter()
            .enumerate()
            .skip(first)
            .take(height)
            .map(|(i, name)| {
                let style = if i == self.drawer.selected {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::from(Span::styled(
                    format!("{:<width$}", truncate(name, width), width = width),
                    style,
                ))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn drawer(selected: usize) -> DrawerState {
        DrawerState {
            open: true,
            items: ["Beef", "Chicken", "Dessert", "Lamb", "Pasta"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            selected,
        }
    }

    #[test]
    fn test_lists_category_names() {
        let state = drawer(0);
        let mut term = TestTerminal::with_size(28, 10);
        term.render_widget(Drawer::new(&state), term.area());

        assert!(term.buffer_contains("Categories"));
        assert!(term.line_contains(1, "Beef"));
        assert!(term.line_contains(5, "Pasta"));
    }

    #[test]
    fn test_keeps_selection_visible() {
        let state = drawer(4);
        // two visible rows
        let mut term = TestTerminal::with_size(28, 4);
        term.render_widget(Drawer::new(&state), term.area());

        assert!(term.buffer_contains("Pasta"));
        assert!(term.buffer_contains("Lamb"));
        assert!(!term.buffer_contains("Beef"));
    }

    #[test]
    fn test_empty_drawer() {
        let state = DrawerState::default();
        let mut term = TestTerminal::with_size(28, 6);
        term.render_widget(Drawer::new(&state), term.area());

        assert!(term.buffer_contains("No categories loaded"));
    }
}
