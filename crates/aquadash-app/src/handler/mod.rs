//! Handler module - TEA update function and key routing
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping

pub(crate) mod keys;
pub(crate) mod update;


// Re-export main entry point
pub use update::update;

/// Result of one update step: an optional follow-up message for the event
/// loop to feed back in. The dashboard spawns no background work, so
/// unlike richer TEA loops there is no action channel here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<crate::message::Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: crate::message::Message) -> Self {
        Self { message: Some(msg) }
    }
}
