//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::page::Page;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Jump to a specific page (bottom navigation bar)
    Navigate(Page),
    /// Header back affordance: always returns to the home panel.
    /// There is no history stack; see `AppState::go_back`.
    GoBack,
    /// Cycle to the next page in navigation order
    NextPage,
    /// Cycle to the previous page in navigation order
    PreviousPage,

    // ─────────────────────────────────────────────────────────
    // Inert Affordance Hooks
    //
    // No behavior is attached to these yet; they exist as
    // well-defined extension points. `update` logs them and
    // leaves the state untouched.
    // ─────────────────────────────────────────────────────────
    /// "Measure" button on the Water Quality panel
    Measure,
    /// Header overflow action (Reports page only)
    SecondaryAction,
    /// A help row was activated (index into the four fixed entries)
    OpenHelpEntry(usize),
}
