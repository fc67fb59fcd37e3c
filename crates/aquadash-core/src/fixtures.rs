//! Static sample data backing the dashboard
//!
//! There is no network layer, persistence, or sensor integration: every
//! "measurement" is a hardcoded constant, bundled here and loaded once at
//! startup. The alert list is pre-ordered (most urgent first) and the
//! weekly points are chronological; consumers must preserve both orders.

use serde::{Deserialize, Serialize};

use crate::types::{
    Alert, ChartPoint, HelpEntry, HelpIcon, QualityStatus, WaterQualitySnapshot, WeeklyReport,
};

/// All four fixed datasets the panels consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub water_quality: WaterQualitySnapshot,
    pub weekly_report: WeeklyReport,
    pub alerts: Vec<Alert>,
    pub help_entries: Vec<HelpEntry>,
}

impl DashboardData {
    /// The demo fixture set.
    pub fn sample() -> Self {
        Self {
            water_quality: WaterQualitySnapshot {
                status: QualityStatus::Normal,
                dissolved_oxygen: "6.8 mg/L".to_string(),
                ammonia: "0.2 mg/L".to_string(),
                ph: "7.4".to_string(),
                tds: "520 mg/L".to_string(),
                temperature: "26.5°C".to_string(),
                turbidity: "4 NTU".to_string(),
            },
            weekly_report: WeeklyReport {
                date_range: "Apr 18, 2024 - Apr 22, 2024".to_string(),
                health_status: "Good".to_string(),
                advisory: "Checking ammonia, It levels & check ammonia increases.".to_string(),
                points: vec![
                    ChartPoint::new("Su", 6.5),
                    ChartPoint::new("M", 6.7),
                    ChartPoint::new("Tu", 7.0),
                    ChartPoint::new("W", 6.8),
                    ChartPoint::new("Th", 7.1),
                    ChartPoint::new("F", 6.9),
                    ChartPoint::new("Sa", 7.2),
                ],
            },
            alerts: vec![
                Alert::ai(
                    "Ammonia level above the threshold",
                    "Elevated ammonia levels detected. Consider immediate water change \
                     or reduce feeding.",
                ),
                Alert::historical("Decrease in DO level", "Today, 8.00 AM"),
                Alert::historical("pH out of range", "Yesterday, 3.00 PM"),
            ],
            help_entries: vec![
                HelpEntry::new("Helpline", HelpIcon::Phone),
                HelpEntry::new("Water Quality Guidelines", HelpIcon::Book),
                HelpEntry::new("Frequently Asked Questions", HelpIcon::Clipboard),
                HelpEntry::new("Report a Problem", HelpIcon::AlertCircle),
            ],
        }
    }
}
