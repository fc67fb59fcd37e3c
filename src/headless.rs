//! Headless mode - JSON snapshot output for scripted use
//!
//! Prints the full dashboard dataset as a single JSON document to stdout
//! instead of drawing the TUI. Useful for piping the fixture data into
//! test scripts without parsing ANSI escape codes.
//!
//! # Example Output
//!
//! ```json
//! {"timestamp":1704700001000,"water_quality":{...},"weekly_report":{...},"alerts":[...],"help_entries":[...]}
//! ```

use std::io::{self, Write};

use chrono::Utc;
use serde_json::json;

use aquadash_core::prelude::*;
use aquadash_core::DashboardData;

/// Build the snapshot document for the given dataset.
pub fn snapshot_json(data: &DashboardData) -> Result<serde_json::Value> {
    Ok(json!({
        "timestamp": Utc::now().timestamp_millis(),
        "water_quality": serde_json::to_value(&data.water_quality)?,
        "weekly_report": serde_json::to_value(&data.weekly_report)?,
        "alerts": serde_json::to_value(&data.alerts)?,
        "help_entries": serde_json::to_value(&data.help_entries)?,
    }))
}

/// Emit the sample dataset snapshot on stdout.
pub fn run_headless() -> Result<()> {
    let data = DashboardData::sample();
    let snapshot = snapshot_json(&data)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &snapshot)?;
    writeln!(stdout)?;

    info!("headless snapshot written");
    Ok(())
}
