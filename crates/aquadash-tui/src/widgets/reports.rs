//! Reports panel
//!
//! Weekly report card: date range, the trend chart, the water-health row,
//! the ammonia advisory, and two inert follow-up affordances.

use aquadash_core::WeeklyReport;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, IconSet};
use crate::widgets::TrendChart;

/// Reports panel showing the weekly trend and its advisory text.
pub struct ReportsPanel<'a> {
    report: &'a WeeklyReport,
    icons: IconSet,
}

impl<'a> ReportsPanel<'a> {
    pub fn new(report: &'a WeeklyReport, icons: IconSet) -> Self {
        Self { report, icons }
    }
}

impl Widget for ReportsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let card = styles::card_block(false).title(Span::styled(
            " Weekly Report ",
            styles::accent_bold(),
        ));
        let inner = card.inner(area);
        card.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // date range
            Constraint::Min(6),    // trend chart
            Constraint::Length(1), // water health
            Constraint::Length(2), // advisory
            Constraint::Length(1), // follow-up affordances
        ])
        .split(inner);

        // Date range with calendar glyph
        let date_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.calendar(), styles::accent()),
            Span::raw(" "),
            Span::styled(self.report.date_range.clone(), styles::text_secondary()),
        ]);
        Paragraph::new(date_line).render(chunks[0], buf);

        // Trend chart gets the points exactly as stored
        TrendChart::new(&self.report.points).render(chunks[1], buf);

        // Water health row
        let health_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("Water Health: ", styles::text_secondary()),
            Span::styled(self.report.health_status.clone(), styles::accent_bold()),
        ]);
        Paragraph::new(health_line).render(chunks[2], buf);

        // Advisory
        let advisory = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.zap(), styles::accent()),
            Span::raw(" "),
            Span::styled("Ammonia Increase: ", styles::text_primary()),
            Span::styled(self.report.advisory.clone(), styles::text_secondary()),
        ]))
        .wrap(ratatui::widgets::Wrap { trim: true });
        advisory.render(chunks[3], buf);

        // Inert follow-up affordances
        let actions = Paragraph::new(Line::from(vec![
            Span::styled("AI Advisory ", styles::accent()),
            Span::styled(self.icons.chevron_right(), styles::accent()),
            Span::raw("   "),
            Span::styled("Previous ", styles::text_muted()),
            Span::styled(self.icons.chevron_right(), styles::text_muted()),
        ]))
        .alignment(Alignment::Center);
        actions.render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use aquadash_core::DashboardData;

    fn sample_report() -> WeeklyReport {
        DashboardData::sample().weekly_report
    }

    #[test]
    fn test_panel_shows_card_title_and_date_range() {
        let report = sample_report();
        let mut term = TestTerminal::new();
        term.render_widget(ReportsPanel::new(&report, IconSet::default()), term.area());

        assert!(term.buffer_contains("Weekly Report"));
        assert!(term.buffer_contains("Apr 18, 2024 - Apr 22, 2024"));
    }

    #[test]
    fn test_panel_shows_health_and_advisory() {
        let report = sample_report();
        let mut term = TestTerminal::new();
        term.render_widget(ReportsPanel::new(&report, IconSet::default()), term.area());

        assert!(term.buffer_contains("Water Health:"));
        assert!(term.buffer_contains("Good"));
        assert!(term.buffer_contains("Ammonia Increase:"));
    }

    #[test]
    fn test_panel_shows_inert_affordances() {
        let report = sample_report();
        let mut term = TestTerminal::new();
        term.render_widget(ReportsPanel::new(&report, IconSet::default()), term.area());

        assert!(term.buffer_contains("AI Advisory"));
        assert!(term.buffer_contains("Previous"));
    }

    #[test]
    fn test_panel_chart_labels_appear_in_week_order() {
        let report = sample_report();
        let mut term = TestTerminal::new();
        term.render_widget(ReportsPanel::new(&report, IconSet::default()), term.area());

        let content = term.content();
        let su = content.find("Su").expect("Su label missing");
        let sa = content.find("Sa").expect("Sa label missing");
        assert!(su < sa);
    }

    #[test]
    fn test_panel_with_empty_points_does_not_panic() {
        let mut report = sample_report();
        report.points.clear();
        let mut term = TestTerminal::new();
        term.render_widget(ReportsPanel::new(&report, IconSet::default()), term.area());

        assert!(term.buffer_contains("Weekly Report"));
    }

    #[test]
    fn test_panel_compact_does_not_panic() {
        let report = sample_report();
        let mut term = TestTerminal::compact();
        term.render_widget(ReportsPanel::new(&report, IconSet::default()), term.area());
        assert!(!term.content().is_empty());
    }
}
