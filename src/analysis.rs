//! Combinatorial helpers for cross-validated decoding analyses.

use std::collections::BTreeSet;

use crate::utils::error::{Error, Result};

/// Number of unordered pairs among `n_items` elements, self-pairs included.
///
/// Corresponds to the entry count of the upper triangle of an
/// `n_items` x `n_items` matrix, diagonal included.
pub fn n_pairs(n_items: usize) -> Result<usize> {
    if n_items < 2 {
        return Err(Error::InsufficientItems(n_items));
    }
    Ok(n_items * (n_items - 1) / 2 + n_items)
}

/// Sorted, deduplicated set of labels present in both slices.
///
/// Inputs may contain duplicates in any order; an empty intersection is a
/// valid result.
pub fn unique_targets<T>(targets_train: &[T], targets_test: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let train: BTreeSet<&T> = targets_train.iter().collect();
    let test: BTreeSet<&T> = targets_test.iter().collect();
    train.intersection(&test).map(|&t| t.clone()).collect()
}
