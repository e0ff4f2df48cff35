//! Value labels drawn above each bar.

use crate::layout::BarSlot;

/// Labels sit at `height * LABEL_OFFSET`, just above the bar top.
pub const LABEL_OFFSET: f64 = 1.05;

/// Digits after the decimal point in a value label.
pub const LABEL_DECIMALS: usize = 3;

/// Text attached to one bar, positioned in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    pub category: usize,
    pub series: usize,
    /// Horizontal center of the bar.
    pub x: f64,
    /// Bottom edge of the text.
    pub y: f64,
    pub text: String,
}

/// Format a bar value for display.
///
/// Rounds the exact binary value of `value`, so a literal like `29.5345`
/// (stored as 29.53450000000000130…) becomes `"29.535"`; exact ties go to
/// the even digit.
pub fn format_value(value: f64) -> String {
    format!("{value:.prec$}", prec = LABEL_DECIMALS)
}

/// Place one label over every bar.
///
/// Short or adjacent bars can produce overlapping labels; no collision
/// avoidance is attempted.
pub fn annotate(bars: &[BarSlot]) -> Vec<BarLabel> {
    bars.iter()
        .map(|bar| BarLabel {
            category: bar.category,
            series: bar.series,
            x: bar.left() + bar.width / 2.0,
            y: bar.value * LABEL_OFFSET,
            text: format_value(bar.value),
        })
        .collect()
}
