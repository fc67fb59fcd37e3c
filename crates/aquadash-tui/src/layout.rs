//! Screen layout definitions for the TUI
//!
//! Header on top, active panel in the middle, navigation bar pinned to
//! the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (back affordance + title + optional secondary action)
    pub header: Rect,

    /// Active panel content area
    pub body: Rect,

    /// Bottom navigation bar area
    pub nav: Rect,
}

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;
/// Nav bar height: top border + icon/label row + bottom border
const NAV_HEIGHT: u16 = 3;

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = [
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(NAV_HEIGHT),
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        nav: chunks[2],
    }
}
