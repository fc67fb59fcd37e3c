//! Line chart widget for the weekly trend
//!
//! Accepts an ordered sequence of labeled numeric points and renders a
//! line plot with labels on the x axis only and a hidden value axis
//! scaled to (min - 1, max + 1). Points are consumed exactly as given;
//! reordering them would break the visual trend line.

use aquadash_core::ChartPoint;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Widget},
};

use crate::theme::palette;

/// Map chart points to (x, y) pairs, x being the insertion index.
///
/// Order in = order out; this is the seam the order-preservation
/// guarantee rests on.
pub fn dataset_points(points: &[ChartPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect()
}

/// Value-axis bounds: (min − 1, max + 1) over the given points.
pub fn value_bounds(points: &[ChartPoint]) -> [f64; 2] {
    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    [min - 1.0, max + 1.0]
}

/// Weekly trend line plot.
pub struct TrendChart<'a> {
    points: &'a [ChartPoint],
}

impl<'a> TrendChart<'a> {
    pub fn new(points: &'a [ChartPoint]) -> Self {
        Self { points }
    }
}

impl Widget for TrendChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // An empty sequence renders as an empty plot, never a panic
        if self.points.is_empty() {
            return;
        }

        let data = dataset_points(self.points);
        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette::CHART_LINE))
            .data(&data);

        let x_labels: Vec<Span> = self
            .points
            .iter()
            .map(|p| Span::styled(p.label.clone(), Style::default().fg(palette::TEXT_SECONDARY)))
            .collect();

        // A single point still needs a non-degenerate axis range
        let x_bounds = [0.0, (self.points.len() - 1).max(1) as f64];

        let chart = Chart::new(vec![dataset])
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(palette::CHART_AXIS))
                    .bounds(x_bounds)
                    .labels(x_labels),
            )
            // Value axis hidden: bounds only, no labels
            .y_axis(Axis::default().bounds(value_bounds(self.points)));

        chart.render(area, buf);
    }
}
