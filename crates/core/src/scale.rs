use crate::model::ChartError;

/// Maps a data range linearly onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Maps a strictly positive data range onto a pixel range in log10 space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LogScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ChartError> {
        let (min, max) = domain;
        if !(min > 0.0 && max > min && max.is_finite()) {
            return Err(ChartError::InvalidLogDomain { min, max });
        }
        Ok(Self { domain, range })
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Values at or below zero map to the bottom of the range, the way
    /// plotting libraries clip non-positive data on a log axis.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if v <= 0.0 {
            return r0;
        }
        let t = (v.log10() - d0.log10()) / (d1.log10() - d0.log10());
        r0 + t * (r1 - r0)
    }

    /// Every power of ten inside the domain, ascending.
    pub fn decade_ticks(&self) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let first = snap(d0.log10()).ceil() as i32;
        let last = snap(d1.log10()).floor() as i32;
        (first..=last).map(|k| 10f64.powi(k)).collect()
    }
}

/// Expand `[min, max]` outward to whole decades.
pub fn nice_log_domain(min: f64, max: f64) -> (f64, f64) {
    let lo = 10f64.powi(snap(min.log10()).floor() as i32);
    let mut hi = 10f64.powi(snap(max.log10()).ceil() as i32);
    if hi <= lo {
        hi = lo * 10.0;
    }
    (lo, hi)
}

/// Plain-number label for a power of ten: `0.01`, `0.1`, `1`, `10`, `1000`.
pub fn format_decade(v: f64) -> String {
    let exponent = v.log10().round() as i32;
    if exponent >= 0 {
        format!("{v:.0}")
    } else {
        let digits = exponent.unsigned_abs() as usize;
        format!("{v:.digits$}")
    }
}

/// Round log values that are within float noise of an integer.
fn snap(x: f64) -> f64 {
    if (x - x.round()).abs() < 1e-9 {
        x.round()
    } else {
        x
    }
}
