//! aquadash-tui - Terminal UI for AquaDash
//!
//! This crate provides the ratatui-based terminal interface: widgets for
//! the header, navigation bar and the four panels, the screen layout, the
//! theme, and the blocking event loop that drives the view-state machine
//! in aquadash-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
