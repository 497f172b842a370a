use rayon::prelude::*;

use crate::error::DomainError;

/// The observed `[min, max]` range of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ValueRange {
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
}

impl ValueRange {
    /// Scans `values` for their minimum and maximum.
    ///
    /// The scan is a parallel reduction; the result does not depend on how the
    /// slice is partitioned across threads.
    ///
    /// # Errors
    ///
    /// * [`DomainError::EmptyDataset`] if `values` is empty
    /// * [`DomainError::NonFiniteValue`] if any value is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// # use coefvar_stats::range::ValueRange;
    /// let range = ValueRange::scan(&[3.0, -1.5, 8.0, 2.0]).unwrap();
    /// assert_eq!(range.min, -1.5);
    /// assert_eq!(range.max, 8.0);
    /// ```
    pub fn scan(values: &[f64]) -> Result<Self, DomainError> {
        if values.is_empty() {
            return Err(DomainError::EmptyDataset);
        }

        if let Some(index) = values.par_iter().position_first(|v| !v.is_finite()) {
            return Err(DomainError::NonFiniteValue {
                index,
                value: values[index],
            });
        }

        let (min, max) = values
            .par_iter()
            .fold(
                || (f64::INFINITY, f64::NEG_INFINITY),
                |(min, max), &v| (min.min(v), max.max(v)),
            )
            .reduce(
                || (f64::INFINITY, f64::NEG_INFINITY),
                |(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)),
            );

        Ok(Self { min, max })
    }

    /// Width of the range (`max - min`).
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
