//! Main update function - handles state transitions (TEA pattern)

use tracing::info;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state.
///
/// The match is exhaustive over the closed `Message` enum; every
/// transition is valid and there is no error condition to report.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(page) => {
            state.navigate(page);
            UpdateResult::none()
        }

        Message::GoBack => {
            state.go_back();
            UpdateResult::none()
        }

        Message::NextPage => {
            state.navigate(state.current_page.next());
            UpdateResult::none()
        }

        Message::PreviousPage => {
            state.navigate(state.current_page.previous());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Inert affordance hooks: log and leave state untouched.
        // Real behavior plugs in by extending these arms.
        // ─────────────────────────────────────────────────────────
        Message::Measure => {
            info!("measure requested (no-op: no sensor integration)");
            UpdateResult::none()
        }

        Message::SecondaryAction => {
            info!(page = ?state.current_page, "secondary action requested (no-op)");
            UpdateResult::none()
        }

        Message::OpenHelpEntry(index) => {
            let label = state
                .data
                .help_entries
                .get(index)
                .map(|e| e.label.as_str())
                .unwrap_or("<unknown>");
            info!(index, label, "help entry activated (no-op)");
            UpdateResult::none()
        }
    }
}
