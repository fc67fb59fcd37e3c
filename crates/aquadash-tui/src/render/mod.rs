//! Top-level frame composition
//!
//! One draw call per frame: header, the panel for the current page, and
//! the navigation bar. All panel data comes from `AppState`; rendering
//! never mutates state.

use aquadash_app::{AppState, Page};
use ratatui::{
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::layout;
use crate::theme::{palette, IconSet};
use crate::widgets::{
    AlertsPanel, Header, HelpPanel, NavBar, ReportsPanel, WaterQualityPanel,
};

/// Render the whole screen from the current state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the background first
    Block::default()
        .style(Style::default().bg(palette::DEEPEST_BG))
        .render(area, frame.buffer_mut());

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);
    let page = state.current_page;

    let header = Header::new(page.title(), icons)
        .with_secondary_action(page.shows_secondary_action());
    frame.render_widget(header, areas.header);

    match page {
        Page::WaterQuality => frame.render_widget(
            WaterQualityPanel::new(&state.data.water_quality, icons),
            areas.body,
        ),
        Page::Reports => frame.render_widget(
            ReportsPanel::new(&state.data.weekly_report, icons),
            areas.body,
        ),
        Page::Alerts => {
            frame.render_widget(AlertsPanel::new(&state.data.alerts, icons), areas.body)
        }
        Page::Help => {
            frame.render_widget(HelpPanel::new(&state.data.help_entries, icons), areas.body)
        }
    }

    frame.render_widget(NavBar::new(page, icons), areas.nav);
}
