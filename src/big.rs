//! Arbitrary precision factorials. No overflow is possible here.
use crate::error::FactorialError;
use crate::split::partition;
use crate::utils::non_negative;
use num_bigint::BigUint;
use rayon::prelude::*;
use std::ops::RangeInclusive;

fn range_product(range: RangeInclusive<u64>) -> BigUint {
    range.fold(BigUint::from(1u32), |acc, i| acc * i)
}

pub fn factorial(n: i64) -> Result<BigUint, FactorialError> {
    let n = non_negative(n)?;
    Ok(range_product(1..=n))
}

pub fn factorial_parallel(n: i64, workers: usize) -> Result<BigUint, FactorialError> {
    let n = non_negative(n)?;
    let ranges = partition(n, workers);
    debug!("{}! over {} ranges", n, ranges.len());

    Ok(ranges
        .into_par_iter()
        .map(range_product)
        .reduce(|| BigUint::from(1u32), |a, b| a * b))
}
