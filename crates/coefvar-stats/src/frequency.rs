use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use crate::classes::ClassLayout;

/// Counts how many of `values` fall into each class of `layout`.
///
/// The returned vector has exactly `layout.num_classes()` entries and its sum
/// equals `values.len()`. Two race-free strategies are used:
///
/// - when there are many observations per class, each worker counts one
///   contiguous chunk into its own table and the tables are summed
///   element-wise, so no counter is shared between threads;
/// - otherwise a single table of atomic counters is shared, so memory stays at
///   one counter per class however many workers run.
///
/// # Examples
///
/// ```
/// # use coefvar_stats::{classes::ClassLayout, frequency::tabulate, range::ValueRange};
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let layout = ClassLayout::new(ValueRange { min: 1.0, max: 8.0 }, 4.0).unwrap();
/// assert_eq!(tabulate(&values, &layout), vec![4, 4]);
/// ```
#[must_use]
pub fn tabulate(values: &[f64], layout: &ClassLayout) -> Vec<u64> {
    let workers = rayon::current_num_threads().max(1);
    if layout.num_classes().saturating_mul(workers) <= values.len() {
        tabulate_per_worker(values, layout, workers)
    } else {
        tabulate_shared(values, layout)
    }
}

fn tabulate_per_worker(values: &[f64], layout: &ClassLayout, workers: usize) -> Vec<u64> {
    let num_classes = layout.num_classes();
    let chunk_len = values.len().div_ceil(workers).max(1);
    values
        .par_chunks(chunk_len)
        .map(|chunk| {
            let mut counts = vec![0_u64; num_classes];
            for &value in chunk {
                counts[layout.class_index(value)] += 1;
            }
            counts
        })
        .reduce_with(|mut acc, counts| {
            for (a, c) in acc.iter_mut().zip(counts) {
                *a += c;
            }
            acc
        })
        .unwrap_or_else(|| vec![0_u64; num_classes])
}

fn tabulate_shared(values: &[f64], layout: &ClassLayout) -> Vec<u64> {
    let counts = (0..layout.num_classes())
        .map(|_| AtomicU64::new(0))
        .collect::<Vec<_>>();
    values.par_iter().for_each(|&value| {
        counts[layout.class_index(value)].fetch_add(1, Ordering::Relaxed);
    });
    counts.into_iter().map(AtomicU64::into_inner).collect()
}
