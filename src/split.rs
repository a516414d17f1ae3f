//! Divide-and-conquer factorial.
//!
//! The range `[1, n]` is cut into contiguous sub-ranges, each sub-range product is
//! computed on the rayon pool, and the partial products are multiplied back together.
//! Every integer of `[1, n]` belongs to exactly one sub-range.
use crate::error::FactorialError;
use crate::utils::{non_negative, range_product, within_limit};
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Split `[1, n]` into `[1, pivot]` and `[pivot + 1, n]`.
///
/// A pivot larger than `n` is clamped to `n`, leaving the right half empty.
pub fn split_at(n: u64, pivot: u64) -> (RangeInclusive<u64>, RangeInclusive<u64>) {
    let pivot = pivot.min(n);
    let right = match pivot.checked_add(1) {
        Some(start) => start..=n,
        // pivot == n == u64::MAX
        None => 1..=0,
    };
    (1..=pivot, right)
}

/// Split `[1, n]` into at most `parts` contiguous, non-empty ranges whose
/// lengths differ by at most one.
pub fn partition(n: u64, parts: usize) -> Vec<RangeInclusive<u64>> {
    if n == 0 {
        return vec![];
    }
    let parts = (parts.max(1) as u64).min(n);
    let (len, rem) = (n / parts, n % parts);

    let mut ranges = Vec::with_capacity(parts as usize);
    let mut start = 1;
    for i in 0..parts {
        // end <= n, so neither this nor the next start can overflow
        let end = (start - 1) + len + if i < rem { 1 } else { 0 };
        ranges.push(start..=end);
        if i + 1 < parts {
            start = end + 1;
        }
    }
    ranges
}

pub fn factorial_with_pivot(n: i64, pivot: u64) -> Result<u64, FactorialError> {
    let n = within_limit(non_negative(n)?)?;
    let (left, right) = split_at(n, pivot);
    trace!("{}! split into {:?} and {:?}", n, left, right);

    let (left, right) = rayon::join(|| range_product(left, n), || range_product(right, n));
    left?.checked_mul(right?).ok_or(FactorialError::Overflow(n))
}

/// Two-way split at the midpoint.
pub fn factorial(n: i64) -> Result<u64, FactorialError> {
    factorial_with_pivot(n, non_negative(n)? / 2)
}

pub fn factorial_fanout(n: i64, workers: usize) -> Result<u64, FactorialError> {
    let n = within_limit(non_negative(n)?)?;
    let ranges = partition(n, workers);
    debug!("{}! over {} ranges", n, ranges.len());

    ranges
        .into_par_iter()
        .map(|range| range_product(range, n))
        .try_reduce(|| 1, |a, b| a.checked_mul(b).ok_or(FactorialError::Overflow(n)))
}
