//! Bar geometry in data coordinates.
//!
//! Category `i` owns the x range around `i`. Within a category, series `k`
//! is shifted right by `k * width`, so with two series and the default
//! width the bars sit at `i` and `i + 0.40` and the category tick at
//! `i + 0.20`. Bars are centered on their x position.

use crate::model::Dataset;

/// Width of a single bar in data units.
pub const BAR_WIDTH: f64 = 0.40;

/// Fraction of the data span added as padding on each side of the x axis.
pub const X_MARGIN: f64 = 0.05;

/// One bar, positioned in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSlot {
    pub category: usize,
    pub series: usize,
    /// Center of the bar.
    pub x: f64,
    pub width: f64,
    /// Bar height, i.e. the measured value.
    pub value: f64,
}

impl BarSlot {
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// X position of the bar for `series` within `category`.
pub fn bar_x(category: usize, series: usize, width: f64) -> f64 {
    category as f64 + series as f64 * width
}

/// Tick position for `category`: the midpoint of its group of bars.
pub fn tick_x(category: usize, series_count: usize, width: f64) -> f64 {
    category as f64 + series_count.saturating_sub(1) as f64 * width / 2.0
}

/// Padded x data range covering every bar.
pub fn x_domain(category_count: usize, series_count: usize, width: f64) -> (f64, f64) {
    let last_category = category_count.saturating_sub(1);
    let last_series = series_count.saturating_sub(1);
    let lo = bar_x(0, 0, width) - width / 2.0;
    let hi = bar_x(last_category, last_series, width) + width / 2.0;
    let pad = (hi - lo) * X_MARGIN;
    (lo - pad, hi + pad)
}

/// Lay out every bar of the data set, series by series.
pub fn layout_bars(dataset: &Dataset, width: f64) -> Vec<BarSlot> {
    let mut bars = Vec::with_capacity(dataset.series().len() * dataset.categories().len());
    for (series, s) in dataset.series().iter().enumerate() {
        for (category, &value) in s.values.iter().enumerate() {
            bars.push(BarSlot {
                category,
                series,
                x: bar_x(category, series, width),
                width,
                value,
            });
        }
    }
    bars
}
