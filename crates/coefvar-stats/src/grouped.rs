//! Statistics for interval-grouped data
//!
//! Raw observations are binned into equal-width classes (see
//! [`classes`](crate::classes)) and every statistic is then derived from the
//! `(midpoint, frequency)` pairs of the classes rather than from the raw values:
//!
//! ```text
//! mean     = Σ(fᵢ·xᵢ) / Σfᵢ
//! variance = Σ(fᵢ·(xᵢ - mean)²) / Σfᵢ
//! std_dev  = √variance
//! cv       = std_dev / mean · 100
//! ```
//!
//! where `xᵢ` is the midpoint and `fᵢ` the frequency of class `i`.
//!
//! # Examples
//!
//! ```
//! use coefvar_stats::grouped::GroupedStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let stats = GroupedStats::compute(&values, 4.0).unwrap();
//!
//! assert_eq!(stats.summary.num_classes, 2);
//! assert_eq!(stats.summary.mean, 5.0);
//! assert_eq!(stats.summary.std_dev, 2.0);
//! assert_eq!(stats.summary.cv, 40.0);
//! ```

use rayon::prelude::*;

use crate::{classes::ClassLayout, error::DomainError, frequency, range::ValueRange};

/// Headline statistics of a grouped dataset.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GroupedSummary {
    /// Grouped arithmetic mean.
    pub mean: f64,
    /// Grouped (population) standard deviation.
    pub std_dev: f64,
    /// Coefficient of variation, as a percentage of the mean.
    pub cv: f64,
    /// Number of classes the data was grouped into.
    pub num_classes: usize,
}

/// One row of the frequency distribution.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ClassInterval {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Exclusive upper bound.
    pub upper: f64,
    /// Class midpoint, taken as the value of every observation in the class.
    pub midpoint: f64,
    /// Number of observations in the class.
    pub frequency: u64,
}

/// Grouped statistics together with the frequency distribution they were derived from.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GroupedStats {
    /// Number of observations.
    pub count: usize,
    /// Smallest observation; the lower bound of the first class.
    pub min: f64,
    /// Largest observation, counted in the last class.
    pub max: f64,
    /// Frequency distribution, in class order.
    pub classes: Vec<ClassInterval>,
    pub summary: GroupedSummary,
}

impl GroupedStats {
    /// Groups `values` into classes of `width` and computes their statistics.
    ///
    /// The input is only read. Calling this twice with the same arguments
    /// yields equal results up to floating-point reduction order.
    ///
    /// # Errors
    ///
    /// * [`DomainError::EmptyDataset`] if `values` is empty
    /// * [`DomainError::NonFiniteValue`] if any value is NaN or infinite
    /// * [`DomainError::InvalidWidth`] if `width` is not a positive finite number
    /// * [`DomainError::TooManyClasses`] if the range is too large for `width`
    /// * [`DomainError::ZeroMean`] if the grouped mean is zero
    #[expect(clippy::cast_precision_loss)]
    pub fn compute(values: &[f64], width: f64) -> Result<Self, DomainError> {
        let range = ValueRange::scan(values)?;
        let layout = ClassLayout::new(range, width)?;

        let midpoints = layout.midpoints();
        let frequencies = frequency::tabulate(values, &layout);

        let total = frequencies.par_iter().sum::<u64>();
        debug_assert_eq!(
            total,
            values.len() as u64,
            "every observation must be assigned to a class"
        );
        let n = total as f64;

        let weighted_sum = frequencies
            .par_iter()
            .zip(&midpoints)
            .map(|(&f, &x)| f as f64 * x)
            .sum::<f64>();
        let mean = weighted_sum / n;

        let squared_deviations = frequencies
            .par_iter()
            .zip(&midpoints)
            .map(|(&f, &x)| f as f64 * (x - mean).powi(2))
            .sum::<f64>();
        let std_dev = (squared_deviations / n).sqrt();

        let cv = std_dev / mean * 100.0;
        if !cv.is_finite() {
            return Err(DomainError::ZeroMean { mean });
        }

        let classes = frequencies
            .iter()
            .zip(&midpoints)
            .enumerate()
            .map(|(idx, (&frequency, &midpoint))| {
                let bounds = layout.bounds(idx);
                ClassInterval {
                    lower: bounds.start,
                    upper: bounds.end,
                    midpoint,
                    frequency,
                }
            })
            .collect();

        Ok(Self {
            count: values.len(),
            min: range.min,
            max: range.max,
            classes,
            summary: GroupedSummary {
                mean,
                std_dev,
                cv,
                num_classes: layout.num_classes(),
            },
        })
    }
}
