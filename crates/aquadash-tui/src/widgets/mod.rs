//! Custom widget components

mod alerts;
mod header;
mod help;
mod nav_bar;
mod reports;
mod trend_chart;
mod water_quality;

pub use alerts::AlertsPanel;
pub use header::Header;
pub use help::HelpPanel;
pub use nav_bar::NavBar;
pub use reports::ReportsPanel;
pub use trend_chart::TrendChart;
pub use water_quality::WaterQualityPanel;
