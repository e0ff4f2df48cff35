pub mod dataset;

pub use dataset::{CATEGORIES, ChartError, DIRECT_TIMES, Dataset, IN_VM_TIMES, Series};
