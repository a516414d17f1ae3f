use crate::error::FactorialError;
use crate::utils::{non_negative, range_product};

/// Multiply a running product by every integer from 1 to `n`.
pub fn factorial(n: i64) -> Result<u64, FactorialError> {
    let n = non_negative(n)?;
    range_product(1..=n, n)
}
