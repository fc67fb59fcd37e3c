//! The four dashboard pages and their pure derivations
//!
//! `Page` is the sole piece of navigation state. It is a closed enum, so
//! the title and secondary-action derivations are exhaustive matches and
//! "unknown page" is unrepresentable. Adding a fifth page is a compile
//! error in every match until it is handled.

use serde::{Deserialize, Serialize};

/// One of the four full-screen content views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Home panel: status banner plus the six readings
    #[default]
    WaterQuality,
    /// Weekly report with the trend chart
    Reports,
    /// Alert card list
    Alerts,
    /// The four fixed help rows
    Help,
}

impl Page {
    /// Navigation order of the bottom bar, constant.
    pub const ALL: [Page; 4] = [Page::WaterQuality, Page::Reports, Page::Alerts, Page::Help];

    /// Header title for this page.
    pub fn title(&self) -> &'static str {
        match self {
            Page::WaterQuality => "Water Quality",
            Page::Reports => "Reports",
            Page::Alerts => "Alerts",
            Page::Help => "Help",
        }
    }

    /// Short label shown under the navigation bar icon.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::WaterQuality => "Home",
            Page::Reports => "Reports",
            Page::Alerts => "Alerts",
            Page::Help => "Help",
        }
    }

    /// Whether the header shows the overflow/secondary-action affordance.
    ///
    /// Only the Reports page carries it.
    pub fn shows_secondary_action(&self) -> bool {
        matches!(self, Page::Reports)
    }

    /// The page after this one in navigation order, wrapping around.
    pub fn next(&self) -> Page {
        let idx = Page::ALL.iter().position(|p| p == self).unwrap_or(0);
        Page::ALL[(idx + 1) % Page::ALL.len()]
    }

    /// The page before this one in navigation order, wrapping around.
    pub fn previous(&self) -> Page {
        let idx = Page::ALL.iter().position(|p| p == self).unwrap_or(0);
        Page::ALL[(idx + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_page_is_water_quality() {
        assert_eq!(Page::default(), Page::WaterQuality);
    }

    #[test]
    fn test_titles_are_bijective() {
        let titles: HashSet<&str> = Page::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(titles.len(), Page::ALL.len());
    }

    #[test]
    fn test_known_titles() {
        assert_eq!(Page::WaterQuality.title(), "Water Quality");
        assert_eq!(Page::Reports.title(), "Reports");
        assert_eq!(Page::Alerts.title(), "Alerts");
        assert_eq!(Page::Help.title(), "Help");
    }

    #[test]
    fn test_secondary_action_only_on_reports() {
        for page in Page::ALL {
            assert_eq!(page.shows_secondary_action(), page == Page::Reports);
        }
    }

    #[test]
    fn test_next_cycles_through_all_pages() {
        let mut page = Page::WaterQuality;
        let mut seen = Vec::new();
        for _ in 0..Page::ALL.len() {
            seen.push(page);
            page = page.next();
        }
        assert_eq!(seen, Page::ALL.to_vec());
        assert_eq!(page, Page::WaterQuality); // wrapped around
    }

    #[test]
    fn test_previous_is_inverse_of_next() {
        for page in Page::ALL {
            assert_eq!(page.next().previous(), page);
            assert_eq!(page.previous().next(), page);
        }
    }
}
