//! AquaDash Library
//!
//! A terminal dashboard for aquaculture water-quality monitoring.

pub mod headless;

use std::path::Path;

use aquadash_app::{config, AppState};
use aquadash_core::prelude::*;

/// Run the interactive dashboard, loading settings from `base_path`.
pub fn run_with_settings(base_path: &Path) -> Result<()> {
    let settings = config::load_settings(base_path);
    let state = AppState::with_settings(settings);
    aquadash_tui::run(state)
}
