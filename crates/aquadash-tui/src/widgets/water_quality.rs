//! Water Quality panel (home)
//!
//! Status banner on top, the six readings in their fixed order below,
//! and the inert Measure affordance at the bottom.

use aquadash_core::WaterQualitySnapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles, IconSet};

/// Home panel: pure function of the snapshot to a visual tree.
pub struct WaterQualityPanel<'a> {
    snapshot: &'a WaterQualitySnapshot,
    icons: IconSet,
}

impl<'a> WaterQualityPanel<'a> {
    pub fn new(snapshot: &'a WaterQualitySnapshot, icons: IconSet) -> Self {
        Self { snapshot, icons }
    }

    /// Icon slot for each reading row, in the fixed display order.
    fn reading_icon(&self, label: &str) -> &'static str {
        match label {
            "DO" | "TDS" => self.icons.droplet(),
            "Ammonia" | "pH" => self.icons.flask(),
            "Temperature" => self.icons.thermometer(),
            _ => self.icons.activity(), // Turbidity
        }
    }
}

impl Widget for WaterQualityPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(3), // status banner
            Constraint::Min(6),    // readings card
            Constraint::Length(1), // measure affordance
        ])
        .split(area);

        // Status banner
        let (status_icon, status_style) = styles::status_indicator(self.snapshot.status);
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(status_icon, status_style),
            Span::raw(" Status: "),
            Span::styled(
                self.snapshot.status.to_string(),
                Style::default()
                    .fg(palette::BANNER_FG)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(styles::card_block(false).style(Style::default().bg(palette::BANNER_BG)));
        banner.render(chunks[0], buf);

        // Readings card, one row per reading in fixture order
        let card = styles::card_block(false);
        let card_inner = card.inner(chunks[1]);
        card.render(chunks[1], buf);

        for (row, (label, value)) in self.snapshot.readings().into_iter().enumerate() {
            let y = card_inner.y + row as u16;
            if y >= card_inner.y + card_inner.height {
                break;
            }

            let left = Line::from(vec![
                Span::raw(" "),
                Span::styled(self.reading_icon(label), styles::accent()),
                Span::raw(" "),
                Span::styled(label.to_string(), styles::text_secondary()),
            ]);
            buf.set_line(card_inner.x, y, &left, card_inner.width);

            let right = Line::from(vec![
                Span::styled(value.to_string(), styles::text_primary()),
                Span::raw(" "),
            ]);
            let right_width = right.width() as u16;
            if card_inner.width > right_width {
                buf.set_line(
                    card_inner.x + card_inner.width - right_width,
                    y,
                    &right,
                    right_width,
                );
            }
        }

        // Inert Measure affordance
        let measure = Paragraph::new(Line::from(vec![
            Span::styled("[m]", styles::keybinding()),
            Span::styled(" Measure", styles::accent_bold()),
        ]))
        .alignment(Alignment::Center);
        measure.render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use aquadash_core::DashboardData;

    fn sample_snapshot() -> WaterQualitySnapshot {
        DashboardData::sample().water_quality
    }

    #[test]
    fn test_panel_shows_status_banner() {
        let snapshot = sample_snapshot();
        let mut term = TestTerminal::new();
        term.render_widget(
            WaterQualityPanel::new(&snapshot, IconSet::default()),
            term.area(),
        );

        assert!(term.buffer_contains("Status"));
        assert!(term.buffer_contains("Normal"));
    }

    #[test]
    fn test_panel_shows_all_six_readings_in_order() {
        let snapshot = sample_snapshot();
        let mut term = TestTerminal::new();
        term.render_widget(
            WaterQualityPanel::new(&snapshot, IconSet::default()),
            term.area(),
        );

        let content = term.content();
        let order = ["DO", "Ammonia", "pH", "TDS", "Temperature", "Turbidity"];
        let mut last = 0;
        for label in order {
            let pos = content.find(label).unwrap_or_else(|| panic!("{label} missing"));
            assert!(pos > last, "{label} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_panel_shows_reading_values() {
        let snapshot = sample_snapshot();
        let mut term = TestTerminal::new();
        term.render_widget(
            WaterQualityPanel::new(&snapshot, IconSet::default()),
            term.area(),
        );

        assert!(term.buffer_contains("6.8 mg/L"));
        assert!(term.buffer_contains("26.5°C"));
        assert!(term.buffer_contains("4 NTU"));
    }

    #[test]
    fn test_panel_shows_measure_affordance() {
        let snapshot = sample_snapshot();
        let mut term = TestTerminal::new();
        term.render_widget(
            WaterQualityPanel::new(&snapshot, IconSet::default()),
            term.area(),
        );

        assert!(term.buffer_contains("[m]"));
        assert!(term.buffer_contains("Measure"));
    }

    #[test]
    fn test_panel_compact_does_not_panic() {
        let snapshot = sample_snapshot();
        let mut term = TestTerminal::compact();
        term.render_widget(
            WaterQualityPanel::new(&snapshot, IconSet::default()),
            term.area(),
        );
        assert!(!term.content().is_empty());
    }
}
