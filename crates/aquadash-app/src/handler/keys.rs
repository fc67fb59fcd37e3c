//! Key event to message mapping

use crate::input_key::InputKey;
use crate::message::Message;
use crate::page::Page;
use crate::state::AppState;

/// Convert a key event to a message based on the current page.
///
/// Unmapped keys return `None` and are ignored.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Header back affordance
        InputKey::Esc | InputKey::Backspace => Some(Message::GoBack),

        // ─────────────────────────────────────────────────────────
        // Navigation bar
        // ─────────────────────────────────────────────────────────
        // Number keys jump straight to a destination
        InputKey::Char('1') => Some(Message::Navigate(Page::WaterQuality)),
        InputKey::Char('2') => Some(Message::Navigate(Page::Reports)),
        InputKey::Char('3') => Some(Message::Navigate(Page::Alerts)),
        InputKey::Char('4') => Some(Message::Navigate(Page::Help)),

        // Tab/arrows cycle in navigation order
        InputKey::Tab | InputKey::Right => Some(Message::NextPage),
        InputKey::BackTab | InputKey::Left => Some(Message::PreviousPage),

        // ─────────────────────────────────────────────────────────
        // Page-local affordances (inert hooks)
        // ─────────────────────────────────────────────────────────
        InputKey::Char('m') if state.current_page == Page::WaterQuality => Some(Message::Measure),

        InputKey::Char('.') if state.current_page.shows_secondary_action() => {
            Some(Message::SecondaryAction)
        }

        // Help rows are inert; keyboard activation lands on the first row
        InputKey::Enter if state.current_page == Page::Help => Some(Message::OpenHelpEntry(0)),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_navigate() {
        let state = AppState::new();
        assert_eq!(
            handle_key(&state, InputKey::Char('2')),
            Some(Message::Navigate(Page::Reports))
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('4')),
            Some(Message::Navigate(Page::Help))
        );
    }

    #[test]
    fn test_esc_and_backspace_go_back() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::GoBack));
        assert_eq!(
            handle_key(&state, InputKey::Backspace),
            Some(Message::GoBack)
        );
    }

    #[test]
    fn test_tab_cycles() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::NextPage));
        assert_eq!(
            handle_key(&state, InputKey::BackTab),
            Some(Message::PreviousPage)
        );
    }

    #[test]
    fn test_measure_only_on_home_page() {
        let mut state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Char('m')), Some(Message::Measure));

        state.navigate(Page::Reports);
        assert_eq!(handle_key(&state, InputKey::Char('m')), None);
    }

    #[test]
    fn test_secondary_action_only_where_visible() {
        let mut state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Char('.')), None);

        state.navigate(Page::Reports);
        assert_eq!(
            handle_key(&state, InputKey::Char('.')),
            Some(Message::SecondaryAction)
        );
    }

    #[test]
    fn test_enter_on_help_activates_entry() {
        let mut state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Enter), None);

        state.navigate(Page::Help);
        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::OpenHelpEntry(0))
        );
    }

    #[test]
    fn test_quit_keys() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
        assert_eq!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Char('z')), None);
        assert_eq!(handle_key(&state, InputKey::Up), None);
    }
}
