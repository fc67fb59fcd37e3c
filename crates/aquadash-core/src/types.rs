//! Domain value records for the dashboard
//!
//! Every type here is a plain immutable record: constructed once from
//! fixture data at startup and never mutated afterwards. Readings are
//! opaque display strings (value + unit already formatted); no numeric
//! validation happens in this layer.

use serde::{Deserialize, Serialize};

/// Overall water status shown in the banner on the home panel.
///
/// Displayed as free text; the enum exists so styling can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityStatus {
    Normal,
    Warning,
    Critical,
}

impl std::fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityStatus::Normal => write!(f, "Normal"),
            QualityStatus::Warning => write!(f, "Warning"),
            QualityStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// A point-in-time snapshot of the six monitored parameters.
///
/// Field order is the display order: DO, Ammonia, pH, TDS, Temperature,
/// Turbidity. Renderers must not reorder the readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterQualitySnapshot {
    pub status: QualityStatus,
    pub dissolved_oxygen: String,
    pub ammonia: String,
    pub ph: String,
    pub tds: String,
    pub temperature: String,
    pub turbidity: String,
}

impl WaterQualitySnapshot {
    /// The six (label, value) pairs in their fixed display order.
    pub fn readings(&self) -> [(&'static str, &str); 6] {
        [
            ("DO", self.dissolved_oxygen.as_str()),
            ("Ammonia", self.ammonia.as_str()),
            ("pH", self.ph.as_str()),
            ("TDS", self.tds.as_str()),
            ("Temperature", self.temperature.as_str()),
            ("Turbidity", self.turbidity.as_str()),
        ]
    }
}

/// A single labeled point on the weekly trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// The weekly report shown on the Reports panel.
///
/// `points` is ordered chronologically; insertion order is the trend line.
/// An empty sequence is legal and must render as an empty chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub date_range: String,
    pub health_status: String,
    pub advisory: String,
    pub points: Vec<ChartPoint>,
}

/// Where an alert came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Raised by the AI advisory, carries a details string
    Ai,
    /// A previously recorded alert, carries a timestamp label
    Historical,
}

impl AlertKind {
    /// Card heading text for this kind of alert.
    pub fn heading(&self) -> &'static str {
        match self {
            AlertKind::Ai => "AI Alert",
            AlertKind::Historical => "Previous",
        }
    }
}

/// One entry in the alert list.
///
/// `details` and `timestamp` are independent optionals: the current
/// fixtures happen to pair details with AI alerts and timestamps with
/// historical ones, but that is the shape of the data, not an invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub details: Option<String>,
    pub timestamp: Option<String>,
}

impl Alert {
    /// An AI-generated alert with advisory details and no timestamp.
    pub fn ai(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Ai,
            message: message.into(),
            details: Some(details.into()),
            timestamp: None,
        }
    }

    /// A historical alert with a timestamp label.
    pub fn historical(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Historical,
            message: message.into(),
            details: None,
            timestamp: Some(timestamp.into()),
        }
    }
}

/// Icon slot for a help row. Resolved to a glyph by the TUI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpIcon {
    Phone,
    Book,
    Clipboard,
    AlertCircle,
}

/// One row on the Help panel. Activation is inert in this scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpEntry {
    pub label: String,
    pub icon: HelpIcon,
}

impl HelpEntry {
    pub fn new(label: impl Into<String>, icon: HelpIcon) -> Self {
        Self {
            label: label.into(),
            icon,
        }
    }
}
