use osm_chart_protocol::ThemeToken;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category names, in x-axis order.
pub const CATEGORIES: [&str; 3] = ["Operation", "Function", "Syscall"];

/// Reference latencies (ns) measured directly on the host.
pub const DIRECT_TIMES: [f64; 3] = [0.3281, 1.544, 351.368];

/// Reference latencies (ns) measured inside a virtual machine.
pub const IN_VM_TIMES: [f64; 3] = [4.3212, 29.5345, 387.902];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("chart has no categories")]
    NoCategories,
    #[error("chart has no series")]
    NoSeries,
    #[error("series {series:?} has {actual} values, expected {expected}")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },
    #[error("series {series:?} value for {category:?} is {value}; a log scale needs values > 0")]
    NonPositiveValue {
        series: String,
        category: String,
        value: f64,
    },
    #[error("series {series:?} value for {category:?} is not finite ({value})")]
    NonFiniteValue {
        series: String,
        category: String,
        value: f64,
    },
    #[error("invalid log domain [{min}, {max}]")]
    InvalidLogDomain { min: f64, max: f64 },
}

/// One named sequence of measurements, drawn as one color of bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    /// One value per category, index-aligned with [`Dataset::categories`].
    pub values: Vec<f64>,
    pub color: ThemeToken,
}

impl Series {
    pub fn new(name: impl Into<String>, values: impl Into<Vec<f64>>, color: ThemeToken) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
            color,
        }
    }
}

/// Categories plus the series plotted over them.
///
/// Only constructible through [`Dataset::new`], so every `Dataset` has
/// equal-length series of finite, strictly positive values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    categories: Vec<String>,
    series: Vec<Series>,
}

impl Dataset {
    pub fn new(categories: Vec<String>, series: Vec<Series>) -> Result<Self, ChartError> {
        if categories.is_empty() {
            return Err(ChartError::NoCategories);
        }
        if series.is_empty() {
            return Err(ChartError::NoSeries);
        }

        for s in &series {
            if s.values.len() != categories.len() {
                return Err(ChartError::LengthMismatch {
                    series: s.name.clone(),
                    expected: categories.len(),
                    actual: s.values.len(),
                });
            }
            for (category, &value) in categories.iter().zip(&s.values) {
                if !value.is_finite() {
                    return Err(ChartError::NonFiniteValue {
                        series: s.name.clone(),
                        category: category.clone(),
                        value,
                    });
                }
                if value <= 0.0 {
                    return Err(ChartError::NonPositiveValue {
                        series: s.name.clone(),
                        category: category.clone(),
                        value,
                    });
                }
            }
        }

        Ok(Self { categories, series })
    }

    /// The "Direct" vs "VM" latency comparison.
    pub fn reference() -> Result<Self, ChartError> {
        Self::with_direct(Series::new("Direct", DIRECT_TIMES, ThemeToken::series(0)))
    }

    /// Compare `direct` against the reference VM timings.
    pub fn with_direct(direct: Series) -> Result<Self, ChartError> {
        Self::new(
            CATEGORIES.iter().map(|c| (*c).to_string()).collect(),
            vec![
                direct,
                Series::new("VM", IN_VM_TIMES, ThemeToken::series(1)),
            ],
        )
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Smallest and largest value across all series.
    pub fn value_range(&self) -> (f64, f64) {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        CATEGORIES.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn reference_dataset_is_valid() {
        let ds = Dataset::reference();
        assert!(ds.is_ok(), "{ds:?}");
        let Ok(ds) = ds else { return };
        assert_eq!(ds.categories(), ["Operation", "Function", "Syscall"]);
        let series: Vec<_> = ds.series().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(series, ["Direct", "VM"]);
        assert_eq!(ds.series()[0].values, DIRECT_TIMES);
        assert_eq!(ds.series()[1].values, IN_VM_TIMES);
        assert_eq!(ds.value_range(), (0.3281, 387.902));
    }

    #[test]
    fn rejects_zero_value() {
        let err = Dataset::new(
            names(),
            vec![Series::new("Direct", [0.3281, 0.0, 351.368], ThemeToken::SeriesPrimary)],
        );
        assert_eq!(
            err,
            Err(ChartError::NonPositiveValue {
                series: "Direct".into(),
                category: "Function".into(),
                value: 0.0,
            })
        );
    }

    #[test]
    fn rejects_negative_and_nan() {
        let negative = Dataset::new(
            names(),
            vec![Series::new("VM", [-1.0, 1.0, 1.0], ThemeToken::SeriesSecondary)],
        );
        assert!(matches!(negative, Err(ChartError::NonPositiveValue { .. })));

        let nan = Dataset::new(
            names(),
            vec![Series::new("VM", [1.0, f64::NAN, 1.0], ThemeToken::SeriesSecondary)],
        );
        assert!(matches!(nan, Err(ChartError::NonFiniteValue { .. })));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Dataset::new(
            names(),
            vec![Series::new("VM", [1.0, 2.0], ThemeToken::SeriesSecondary)],
        );
        assert_eq!(
            err,
            Err(ChartError::LengthMismatch {
                series: "VM".into(),
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn rejects_empty_inputs() {
        assert_eq!(Dataset::new(Vec::new(), Vec::new()), Err(ChartError::NoCategories));
        assert_eq!(Dataset::new(names(), Vec::new()), Err(ChartError::NoSeries));
    }

    #[test]
    fn error_message_names_offender() {
        let err = ChartError::NonPositiveValue {
            series: "Direct".into(),
            category: "Syscall".into(),
            value: -2.5,
        };
        assert_eq!(
            err.to_string(),
            "series \"Direct\" value for \"Syscall\" is -2.5; a log scale needs values > 0"
        );
    }
}
