//! One-line status bar: notices, loading state and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mealdeck_app::state::{Notice, NoticeLevel};
use mealdeck_app::{UiMode, ViewMode};

use crate::theme::styles;

pub struct StatusBar<'a> {
    notice: Option<&'a Notice>,
    loading: bool,
    view_mode: ViewMode,
    ui_mode: UiMode,
}

impl<'a> StatusBar<'a> {
    pub fn new(view_mode: ViewMode, ui_mode: UiMode) -> Self {
        Self {
            notice: None,
            loading: false,
            view_mode,
            ui_mode,
        }
    }

    pub fn notice(mut self, notice: Option<&'a Notice>) -> Self {
        self.notice = notice;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match (self.ui_mode, self.view_mode) {
            (UiMode::SearchInput, _) => &[("Enter", "search"), ("Esc", "cancel")],
            (UiMode::Drawer, _) => &[("↑↓", "move"), ("Enter", "filter"), ("Esc", "close")],
            (UiMode::Normal, ViewMode::Details) => &[
                ("↑↓", "scroll"),
                ("o", "open source"),
                ("Esc", "home"),
                ("q", "quit"),
            ],
            (UiMode::Normal, _) => &[
                ("/", "search"),
                ("m", "categories"),
                ("Enter", "open"),
                ("Tab", "focus"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if let Some(notice) = self.notice {
            let style = match notice.level {
                NoticeLevel::Error => styles::status_red(),
                NoticeLevel::Info => styles::status_green(),
            };
            spans.push(Span::styled(
                format!("{} ", notice.at.format("%H:%M:%S")),
                styles::text_muted(),
            ));
            spans.push(Span::styled(notice.message.as_str(), style));
            spans.push(Span::raw("  "));
        } else if self.loading {
            spans.push(Span::styled("Loading…  ", styles::keybinding()));
        }

        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_hints_follow_view() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            StatusBar::new(ViewMode::Details, UiMode::Normal),
            term.area(),
        );
        assert!(term.buffer_contains("o open source"));

        term.render_widget(StatusBar::new(ViewMode::Home, UiMode::Normal), term.area());
        assert!(term.buffer_contains("/ search"));
        assert!(!term.buffer_contains("open source"));
    }

    #[test]
    fn test_error_notice_shown_first() {
        let notice = Notice::error("Meal not found");
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            StatusBar::new(ViewMode::Home, UiMode::Normal).notice(Some(&notice)),
            term.area(),
        );
        assert!(term.buffer_contains("Meal not found"));
        assert!(term.buffer_contains(&notice.at.format("%H:%M:%S").to_string()));
    }

    #[test]
    fn test_loading_indicator() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            StatusBar::new(ViewMode::Home, UiMode::SearchInput).loading(true),
            term.area(),
        );
        assert!(term.buffer_contains("Loading…"));
        assert!(term.buffer_contains("Esc cancel"));
    }
}
