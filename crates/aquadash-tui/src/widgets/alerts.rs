//! Alerts panel
//!
//! One card per alert, in list order. Cards are produced lazily from the
//! slice each time the panel renders, so every frame starts from the top
//! of the list. An empty list renders an empty panel, never an error.

use aquadash_core::{Alert, AlertKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles, IconSet};

/// Lines of one alert card, built on demand.
fn card_lines<'a>(alert: &'a Alert, icons: IconSet) -> Vec<Line<'a>> {
    let (glyph, heading_color) = match alert.kind {
        AlertKind::Ai => (icons.zap(), palette::ALERT_AI),
        AlertKind::Historical => (icons.bell(), palette::ALERT_HISTORICAL),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(glyph, ratatui::style::Style::default().fg(heading_color)),
            Span::raw(" "),
            Span::styled(
                alert.kind.heading(),
                ratatui::style::Style::default()
                    .fg(heading_color)
                    .add_modifier(ratatui::style::Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(alert.message.as_str(), styles::text_primary())),
    ];

    if let Some(details) = &alert.details {
        lines.push(Line::from(Span::styled(
            details.as_str(),
            styles::text_secondary(),
        )));
    }

    // Timestamp line only when the alert carries one
    if let Some(timestamp) = &alert.timestamp {
        lines.push(Line::from(Span::styled(
            timestamp.as_str(),
            styles::text_muted(),
        )));
    }

    // Action pair only for AI alerts
    if alert.kind == AlertKind::Ai {
        lines.push(Line::from(vec![
            Span::styled("View Details", styles::accent_bold()),
            Span::styled("  /  ", styles::text_muted()),
            Span::styled("Contact Helpline", styles::accent_bold()),
        ]));
    }

    lines
}

/// Cards each alert in the list, restarting from the top every render.
fn cards<'a>(alerts: &'a [Alert], icons: IconSet) -> impl Iterator<Item = Vec<Line<'a>>> + 'a {
    alerts.iter().map(move |alert| card_lines(alert, icons))
}

/// Alerts panel: the full alert list as stacked cards.
pub struct AlertsPanel<'a> {
    alerts: &'a [Alert],
    icons: IconSet,
}

impl<'a> AlertsPanel<'a> {
    pub fn new(alerts: &'a [Alert], icons: IconSet) -> Self {
        Self { alerts, icons }
    }
}

impl Widget for AlertsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Min(3),    // alert cards
            Constraint::Length(1), // trailing affordance
        ])
        .split(area);

        let mut y = chunks[0].y;
        let bottom = chunks[0].y + chunks[0].height;

        for lines in cards(self.alerts, self.icons) {
            // Card height: content plus the border rows
            let height = (lines.len() as u16 + 2).min(bottom.saturating_sub(y));
            if height < 3 {
                break;
            }

            let card_area = Rect::new(chunks[0].x, y, chunks[0].width, height);
            let card = styles::card_block(false);
            let inner = card.inner(card_area);
            card.render(card_area, buf);

            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(inner, buf);

            y += height;
        }

        // Inert trailing affordance
        let trailing = Paragraph::new(Line::from(vec![
            Span::styled("Previous ", styles::text_muted()),
            Span::styled(self.icons.chevron_right(), styles::text_muted()),
        ]))
        .alignment(Alignment::Center);
        trailing.render(chunks[1], buf);
    }
}
