pub mod axis;
pub mod bar_chart;
pub mod legend;

pub use bar_chart::{ChartLayout, ChartStyle, Margins, render_bar_chart};
