//! Grouped-data statistics for the coefvar project.
//!
//! This crate computes descriptive statistics from interval-grouped data:
//! raw observations are binned into equal-width classes, and the mean,
//! standard deviation and coefficient of variation are derived from the class
//! midpoints and frequencies.
//!
//! # Modules
//!
//! - [`range`]: Parallel min/max scan of a dataset
//! - [`classes`]: Equal-width class layout and value classification
//! - [`frequency`]: Race-free parallel frequency tabulation
//! - [`grouped`]: Grouped mean, standard deviation and coefficient of variation
//! - [`error`]: Errors for inputs the statistics are undefined on
//!
//! All reductions run on the current [rayon] thread pool. Floating-point sums
//! are not bit-for-bit reproducible across thread counts, only to within
//! rounding error.
//!
//! # Examples
//!
//! ```
//! use coefvar_stats::grouped::GroupedStats;
//!
//! let heights = [158.0, 162.5, 171.0, 174.2, 180.9, 166.3, 169.8, 177.1];
//! let stats = GroupedStats::compute(&heights, 8.0).unwrap();
//!
//! println!("mean = {:.2}", stats.summary.mean);
//! println!("cv = {:.2}%", stats.summary.cv);
//! assert_eq!(stats.summary.num_classes, 3);
//! ```
//!
//! ## Rejected inputs
//!
//! ```
//! use coefvar_stats::{error::DomainError, grouped::GroupedStats};
//!
//! assert_eq!(GroupedStats::compute(&[], 8.0), Err(DomainError::EmptyDataset));
//! assert!(matches!(
//!     GroupedStats::compute(&[1.0, 2.0], 0.0),
//!     Err(DomainError::InvalidWidth { .. })
//! ));
//! ```

pub mod classes;
pub mod error;
pub mod frequency;
pub mod grouped;
pub mod range;
