//! Application state (Model in TEA pattern)

use aquadash_core::DashboardData;

use crate::config::Settings;
use crate::page::Page;

/// The single mutable piece of UI state plus the immutable fixture data.
///
/// `current_page` is owned exclusively here and mutated only through
/// [`AppState::navigate`] and [`AppState::go_back`]; widgets receive it as
/// read-only data, which keeps the state machine testable without any
/// rendering.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The page currently shown. Initialized to WaterQuality.
    pub current_page: Page,

    /// Set when the user asked to quit; the event loop checks it each pass.
    should_quit: bool,

    /// The static datasets every panel reads from. Never mutated.
    pub data: DashboardData,

    /// Loaded configuration (icon mode etc.)
    pub settings: Settings,
}

impl AppState {
    /// Create state with the sample fixtures and default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state with the sample fixtures and the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            current_page: Page::WaterQuality,
            should_quit: false,
            data: DashboardData::sample(),
            settings,
        }
    }

    /// Unconditional page transition. Every `Page` value is always valid,
    /// so there are no guards and no failure mode.
    pub fn navigate(&mut self, target: Page) {
        if self.current_page != target {
            tracing::debug!(from = ?self.current_page, to = ?target, "navigate");
        }
        self.current_page = target;
    }

    /// Back affordance: `go_back ≡ navigate(WaterQuality)`.
    ///
    /// There is no navigation history; the back arrow unconditionally
    /// resets to the home panel. Deliberate, not a missing stack.
    pub fn go_back(&mut self) {
        self.navigate(Page::WaterQuality);
    }

    /// Request application shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_is_water_quality() {
        let state = AppState::new();
        assert_eq!(state.current_page, Page::WaterQuality);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_navigate_is_synchronous_and_exact() {
        let mut state = AppState::new();
        for page in Page::ALL {
            state.navigate(page);
            assert_eq!(state.current_page, page);
        }
    }

    #[test]
    fn test_go_back_always_lands_on_home() {
        let mut state = AppState::new();
        for page in Page::ALL {
            state.navigate(page);
            state.go_back();
            assert_eq!(state.current_page, Page::WaterQuality);
        }
    }

    #[test]
    fn test_go_back_is_idempotent() {
        let mut state = AppState::new();
        state.go_back();
        state.go_back();
        assert_eq!(state.current_page, Page::WaterQuality);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = AppState::new();
        state.quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_state_carries_sample_fixtures() {
        let state = AppState::new();
        assert_eq!(state.data.alerts.len(), 3);
        assert_eq!(state.data.weekly_report.points.len(), 7);
        assert_eq!(state.data.help_entries.len(), 4);
    }
}
