//! Blocking event loop

use aquadash_app::{update, AppState};
use aquadash_core::prelude::*;

use crate::render;
use crate::terminal::install_panic_hook;

/// Run the dashboard until the user quits.
///
/// Draw, poll, update. Follow-up messages from an update are applied
/// before the next draw so a keypress and the navigation it triggers land
/// in the same frame.
pub fn run(mut state: AppState) -> Result<()> {
    install_panic_hook();
    let mut terminal = ratatui::init();

    info!("dashboard started");

    let result = loop {
        if let Err(e) = terminal.draw(|frame| render::view(frame, &state)) {
            break Err(Error::from(e));
        }

        match crate::event::poll() {
            Ok(Some(message)) => {
                let mut next = Some(message);
                while let Some(msg) = next.take() {
                    next = update(&mut state, msg).message;
                }
            }
            Ok(None) => {}
            Err(e) => break Err(e),
        }

        if state.should_quit() {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("dashboard stopped");
    result
}
