//! Color palette for the dashboard theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Blue; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Blue; // Primary accent (water blue)

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Normal/good
pub const STATUS_RED: Color = Color::Red; // Critical
pub const STATUS_YELLOW: Color = Color::Yellow; // Warning / keybinding hints

// --- Banner ---
pub const BANNER_BG: Color = Color::Blue; // Status banner background
pub const BANNER_FG: Color = Color::White;

// --- Alert accents ---
pub const ALERT_AI: Color = Color::Yellow; // AI alert icon
pub const ALERT_HISTORICAL: Color = Color::Blue; // Historical alert icon

// --- Chart ---
pub const CHART_LINE: Color = Color::Blue;
pub const CHART_AXIS: Color = Color::DarkGray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        let _: Color = ACCENT;
        let _: Color = DEEPEST_BG;
        let _: Color = STATUS_GREEN;
    }

    #[test]
    fn test_alert_accents_distinct() {
        assert_ne!(ALERT_AI, ALERT_HISTORICAL);
    }
}
