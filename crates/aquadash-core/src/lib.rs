//! # aquadash-core - Core Domain Types
//!
//! Foundation crate for AquaDash. Provides the domain value records, the
//! fixed sample datasets, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`WaterQualitySnapshot`] - Status plus six formatted readings
//! - [`QualityStatus`] - Overall water status (Normal, Warning, Critical)
//! - [`WeeklyReport`] - Date range, health label, advisory, chart points
//! - [`Alert`], [`AlertKind`] - AI-generated and historical alerts
//! - [`HelpEntry`], [`HelpIcon`] - The four fixed help rows
//!
//! ### Fixtures (`fixtures`)
//! - [`DashboardData`] - All four datasets bundled together
//! - [`DashboardData::sample()`] - The static demo data, loaded once at
//!   startup; nothing is created, updated, or deleted at runtime
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use aquadash_core::prelude::*;
//! ```

pub mod error;
pub mod fixtures;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all AquaDash crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use fixtures::DashboardData;
pub use types::{
    Alert, AlertKind, ChartPoint, HelpEntry, HelpIcon, QualityStatus, WaterQualitySnapshot,
    WeeklyReport,
};
