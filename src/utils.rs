use crate::error::FactorialError;
use std::ops::RangeInclusive;

/// Largest n whose factorial fits in a `u64`.
pub const MAX_N: u64 = 20;

pub fn non_negative(n: i64) -> Result<u64, FactorialError> {
    if n < 0 {
        return Err(FactorialError::InvalidArgument(n));
    }
    Ok(n as u64)
}

pub fn within_limit(n: u64) -> Result<u64, FactorialError> {
    if n > MAX_N {
        return Err(FactorialError::Overflow(n));
    }
    Ok(n)
}

/// Product of every integer in `range`, 1 for an empty range.
///
/// `n` is the argument of the whole factorial, reported on overflow.
pub fn range_product(range: RangeInclusive<u64>, n: u64) -> Result<u64, FactorialError> {
    let mut product: u64 = 1;
    for i in range {
        product = product
            .checked_mul(i)
            .ok_or(FactorialError::Overflow(n))?;
    }
    Ok(product)
}
