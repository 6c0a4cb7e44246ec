use ordered_float::OrderedFloat;

use crate::error::{ConfigurationError, DashResult};

/// Affine mapping from a finite, non-degenerate domain onto caller-chosen
/// ranges. Drives bubble radii, bar extents, radar reaches, and choropleth
/// intensities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> DashResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ConfigurationError::InvalidDataset(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits the domain to the min/max of `values`.
    ///
    /// Returns `None` for an empty slice or a constant column, both of which
    /// callers treat as the degenerate single-intensity case rather than an
    /// error.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let min = values.iter().copied().map(OrderedFloat).min()?.0;
        let max = values.iter().copied().map(OrderedFloat).max()?.0;
        LinearScale::new(min, max).ok()
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Position of `value` within the domain, 0 at the start and 1 at the end.
    pub fn normalize(self, value: f64) -> DashResult<f64> {
        if !value.is_finite() {
            return Err(ConfigurationError::InvalidDataset(
                "scaled value must be finite".to_owned(),
            ));
        }
        let span = self.domain_end - self.domain_start;
        Ok((value - self.domain_start) / span)
    }

    pub fn map_to(self, value: f64, range: (f64, f64)) -> DashResult<f64> {
        let normalized = self.normalize(value)?;
        Ok(range.0 + normalized * (range.1 - range.0))
    }
}
