//! Meal detail panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mealdeck_core::{DetailView, SourceLink};

use crate::theme::styles;

/// Width of the field label column ("Category  ")
const LABEL_WIDTH: usize = 10;

/// Scrollable detail panel
pub struct DetailPanel<'a> {
    view: &'a DetailView,
    scroll: u16,
}

impl<'a> DetailPanel<'a> {
    pub fn new(view: &'a DetailView) -> Self {
        Self { view, scroll: 0 }
    }

    /// Lines scrolled from the top
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scroll = self.scroll.min(max_scroll(self.view, area));

        let block = styles::glass_block(true).title(Line::from(Span::styled(
            format!(" {} ", self.view.breadcrumb),
            styles::heading(),
        )));

        Paragraph::new(detail_lines(self.view))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

/// Largest scroll offset that still fills the panel at `area`
///
/// Counts wrapped rows, so the last instruction is reachable however long
/// the steps are.
pub fn max_scroll(view: &DetailView, area: Rect) -> u16 {
    let inner = styles::glass_block(true).inner(area);
    let rows = Paragraph::new(detail_lines(view))
        .wrap(Wrap { trim: false })
        .line_count(inner.width);
    let max = rows.saturating_sub(usize::from(inner.height));
    u16::try_from(max).unwrap_or(u16::MAX)
}

fn field<'a>(label: &str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), styles::text_muted()),
        value,
    ])
}

/// Every line of the detail panel, top to bottom
pub fn detail_lines(view: &DetailView) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Home › ", styles::text_muted()),
            Span::styled(view.breadcrumb.as_str(), styles::accent_bold()),
        ]),
        Line::default(),
        field(
            "Category",
            Span::styled(view.category.as_str(), styles::text_primary()),
        ),
    ];

    let source = match &view.source {
        SourceLink::Link { text, .. } => Span::styled(text.as_str(), styles::link()),
        SourceLink::Placeholder => Span::styled(view.source.text(), styles::text_muted()),
    };
    lines.push(field("Source", source));

    if !view.image.is_empty() {
        lines.push(field(
            "Image",
            Span::styled(view.image.as_str(), styles::text_secondary()),
        ));
    }

    if !view.tags.is_empty() {
        let mut spans = vec![Span::styled(
            format!("{:<width$}", "Tags", width = LABEL_WIDTH),
            styles::text_muted(),
        )];
        for (i, tag) in view.tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!("[{tag}]"), styles::tag_chip()));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Ingredients", styles::heading())));
    let name_width = view
        .ingredients
        .iter()
        .map(|i| i.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    for (ingredient, measure) in view.ingredients.iter().zip(&view.measures) {
        if measure.is_empty() {
            lines.push(Line::from(format!("  {ingredient}")));
        } else {
            lines.push(Line::from(vec![
                Span::raw(format!("  {ingredient:<name_width$}")),
                Span::styled(measure.as_str(), styles::text_secondary()),
            ]));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Instructions", styles::heading())));
    for (n, step) in view.instructions.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", n + 1), styles::keybinding()),
            Span::raw(step.as_str()),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mealdeck_core::MealDetail;

    fn teriyaki() -> DetailView {
        let mut meal = MealDetail::new("52772", "Teriyaki Chicken")
            .with_slot(1, "Salt", "1 tsp")
            .with_slot(2, "", "")
            .with_slot(3, "Pepper", "pinch");
        meal.thumbnail = "https://example.com/52772.jpg".to_string();
        meal.category = Some("Chicken".to_string());
        meal.source = Some("https://example.com/recipe".to_string());
        meal.tags = Some("Meat,Casserole".to_string());
        meal.instructions = Some("Step1\n\nStep2\n".to_string());
        DetailView::from_meal(&meal)
    }

    fn plain(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_detail_lines_layout() {
        let view = teriyaki();
        insta::assert_snapshot!(plain(&detail_lines(&view)), @r"
        Home › Teriyaki Chicken

        Category  Chicken
        Source    example.com
        Image     https://example.com/52772.jpg
        Tags      [Meat] [Casserole]

        Ingredients
          Salt    1 tsp
          Pepper  pinch

        Instructions
          1. Step1
          2. Step2
        ");
    }

    #[test]
    fn test_placeholders_for_missing_fields() {
        let view = DetailView::from_meal(&MealDetail::new("1", "Plain"));
        let text = plain(&detail_lines(&view));

        assert!(text.contains("Category  -"));
        assert!(text.contains("Source    —"));
        assert!(!text.contains("Tags"));
        assert!(!text.contains("Image"));
    }

    #[test]
    fn test_panel_renders_into_buffer() {
        let view = teriyaki();
        let mut term = TestTerminal::new();
        term.render_widget(DetailPanel::new(&view), term.area());

        assert!(term.buffer_contains("Teriyaki Chicken"));
        assert!(term.buffer_contains("example.com"));
        assert!(term.buffer_contains("1. Step1"));
    }

    #[test]
    fn test_scroll_hides_top_lines() {
        let view = teriyaki();
        let mut term = TestTerminal::with_size(80, 8);
        term.render_widget(DetailPanel::new(&view).scroll(3), term.area());

        assert!(!term.buffer_contains("Home ›"));
        assert!(term.buffer_contains("Source"));
    }

    fn long_steps() -> DetailView {
        let step = "Stir the pot slowly. ".repeat(15);
        let instructions = format!("{}FINALSTEP", format!("{step}\n").repeat(6));
        let mut meal = MealDetail::new("1", "Stew").with_slot(1, "Beef", "1kg");
        meal.instructions = Some(instructions);
        DetailView::from_meal(&meal)
    }

    #[test]
    fn test_max_scroll_counts_wrapped_rows() {
        let view = long_steps();
        let area = Rect::new(0, 0, 40, 12);
        let logical = detail_lines(&view).len() as u16;

        // each 315-char step wraps over several 38-column rows
        assert!(max_scroll(&view, area) > logical);
    }

    #[test]
    fn test_last_wrapped_step_reachable() {
        let view = long_steps();
        let mut term = TestTerminal::with_size(40, 12);
        let max = max_scroll(&view, term.area());
        term.render_widget(DetailPanel::new(&view).scroll(max), term.area());

        assert!(term.buffer_contains("FINALSTEP"));
    }

    #[test]
    fn test_wrapped_scroll_past_end_is_clamped() {
        let view = long_steps();
        let mut term = TestTerminal::with_size(40, 12);
        term.render_widget(DetailPanel::new(&view).scroll(2000), term.area());

        assert!(term.buffer_contains("FINALSTEP"));
    }

    #[test]
    fn test_short_detail_needs_no_scroll() {
        let view = teriyaki();
        assert_eq!(max_scroll(&view, Rect::new(0, 0, 80, 40)), 0);
    }

    #[test]
    fn test_scroll_past_end_is_clamped() {
        let view = teriyaki();
        let mut term = TestTerminal::new();
        term.render_widget(DetailPanel::new(&view).scroll(500), term.area());

        assert!(term.buffer_contains("2. Step2"));
    }
}
