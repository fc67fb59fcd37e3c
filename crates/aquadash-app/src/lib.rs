//! aquadash-app - Application state and view-state machine for AquaDash
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dashboard: `AppState` is the model, `Message` the events, and
//! `handler::update` the pure transition function. It stays independent
//! of any terminal library; the TUI converts raw key events into
//! [`InputKey`] at its boundary.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod page;
pub mod state;

// Re-export primary types
pub use config::{IconMode, Settings, UiSettings};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use page::Page;
pub use state::AppState;
