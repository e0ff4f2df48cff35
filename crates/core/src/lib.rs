//! Core of osm-chart: the measured data set, bar geometry, scales, value
//! labels, and the chart renderer that turns them into `RenderCommand`s.

pub mod labels;
pub mod layout;
pub mod measure;
pub mod model;
pub mod scale;
pub mod svg;
pub mod views;

pub use model::{ChartError, Dataset, Series};
