//! Equal-width class intervals
//!
//! A [`ClassLayout`] partitions an observed [`ValueRange`] into
//! `ceil((max - min) / width)` classes of the same width, starting at `min`.
//! Class `i` covers `[min + i * width, min + (i + 1) * width)`. Values whose
//! computed index would fall past the last class (the maximum itself, or a
//! rounding overshoot) are clamped into the last class, so classification is
//! total.
//!
//! # Examples
//!
//! ```
//! use coefvar_stats::{classes::ClassLayout, range::ValueRange};
//!
//! let range = ValueRange { min: 1.0, max: 8.0 };
//! let layout = ClassLayout::new(range, 4.0).unwrap();
//!
//! assert_eq!(layout.num_classes(), 2);
//! assert_eq!(layout.class_index(4.0), 0);
//! assert_eq!(layout.class_index(8.0), 1);
//! assert_eq!(layout.midpoint(0), 3.0);
//! ```

use std::ops::Range;

use rayon::prelude::*;

use crate::{error::DomainError, range::ValueRange};

/// Upper bound on the number of classes a layout may hold.
///
/// A frequency table for this many classes is 8 MiB.
pub const MAX_CLASSES: usize = 1 << 20;

/// Equal-width partition of a value range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassLayout {
    min: f64,
    width: f64,
    num_classes: usize,
}

impl ClassLayout {
    /// Creates a layout covering `range` with classes of `width`.
    ///
    /// A zero-width range (all observations equal) yields a single class
    /// starting at `min`.
    ///
    /// # Errors
    ///
    /// * [`DomainError::InvalidWidth`] if `width` is not a positive finite number
    /// * [`DomainError::TooManyClasses`] if the layout would exceed [`MAX_CLASSES`]
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn new(range: ValueRange, width: f64) -> Result<Self, DomainError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(DomainError::InvalidWidth { width });
        }

        let num_classes = (range.span() / width).ceil();
        if !num_classes.is_finite() || num_classes > MAX_CLASSES as f64 {
            return Err(DomainError::TooManyClasses {
                num_classes,
                max: MAX_CLASSES,
            });
        }

        Ok(Self {
            min: range.min,
            width,
            num_classes: (num_classes as usize).max(1),
        })
    }

    /// Number of classes in the layout. Always at least 1.
    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Width shared by every class.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the index of the class `value` falls into.
    ///
    /// Values below `min` map to class 0 and values past the last class map to
    /// the last class.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn class_index(&self, value: f64) -> usize {
        // `as` saturates: negative offsets become 0, overshoots are clamped below
        let idx = ((value - self.min) / self.width).floor() as usize;
        idx.min(self.num_classes - 1)
    }

    /// Bounds `[lower, upper)` of class `idx`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bounds(&self, idx: usize) -> Range<f64> {
        debug_assert!(idx < self.num_classes, "class index out of range");
        let lower = self.min + idx as f64 * self.width;
        lower..lower + self.width
    }

    /// Arithmetic midpoint of class `idx`.
    #[must_use]
    pub fn midpoint(&self, idx: usize) -> f64 {
        let Range { start, end } = self.bounds(idx);
        f64::midpoint(start, end)
    }

    /// Midpoints of every class, in class order.
    #[must_use]
    pub fn midpoints(&self) -> Vec<f64> {
        (0..self.num_classes)
            .into_par_iter()
            .map(|idx| self.midpoint(idx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(min: f64, max: f64, width: f64) -> ClassLayout {
        ClassLayout::new(ValueRange { min, max }, width).unwrap()
    }

    #[test]
    fn test_num_classes_is_ceiling() {
        assert_eq!(layout(1.0, 8.0, 4.0).num_classes(), 2);
        assert_eq!(layout(0.0, 8.0, 4.0).num_classes(), 2);
        assert_eq!(layout(0.0, 8.1, 4.0).num_classes(), 3);
        assert_eq!(layout(150.0, 199.0, 8.0).num_classes(), 7);
    }

    #[test]
    fn test_zero_span_has_one_class() {
        let layout = layout(5.0, 5.0, 2.0);
        assert_eq!(layout.num_classes(), 1);
        assert_eq!(layout.class_index(5.0), 0);
        assert_eq!(layout.bounds(0), 5.0..7.0);
        assert_eq!(layout.midpoint(0), 6.0);
    }

    #[test]
    fn test_invalid_width() {
        let range = ValueRange { min: 0.0, max: 1.0 };
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ClassLayout::new(range, width).unwrap_err();
            assert!(matches!(err, DomainError::InvalidWidth { .. }), "{width}");
        }
    }

    #[test]
    fn test_too_many_classes() {
        let range = ValueRange {
            min: 0.0,
            max: 1.0e12,
        };
        let err = ClassLayout::new(range, 1.0).unwrap_err();
        assert!(matches!(err, DomainError::TooManyClasses { .. }));
    }

    #[test]
    #[expect(clippy::cast_precision_loss)]
    fn test_class_count_limit_is_inclusive() {
        let limit = MAX_CLASSES as f64;
        let at_limit = layout(0.0, limit, 1.0);
        assert_eq!(at_limit.num_classes(), MAX_CLASSES);

        let err = ClassLayout::new(
            ValueRange {
                min: 0.0,
                max: limit + 1.0,
            },
            1.0,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::TooManyClasses {
                num_classes: limit + 1.0,
                max: MAX_CLASSES,
            }
        );
    }

    #[test]
    fn test_maximum_lands_in_last_class() {
        // max - min is an exact multiple of the width
        let layout = layout(0.0, 12.0, 4.0);
        assert_eq!(layout.num_classes(), 3);
        assert_eq!(layout.class_index(12.0), 2);
        assert_eq!(layout.class_index(11.999), 2);
        assert_eq!(layout.class_index(8.0), 2);
        assert_eq!(layout.class_index(7.999), 1);
        assert_eq!(layout.class_index(0.0), 0);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let layout = layout(0.0, 10.0, 5.0);
        assert_eq!(layout.class_index(-3.0), 0);
        assert_eq!(layout.class_index(1000.0), 1);
    }

    #[test]
    fn test_midpoints() {
        let layout = layout(1.0, 8.0, 4.0);
        assert_eq!(layout.bounds(0), 1.0..5.0);
        assert_eq!(layout.bounds(1), 5.0..9.0);
        assert_eq!(layout.midpoints(), vec![3.0, 7.0]);
    }
}
