use crate::error::FactorialError;
use crate::utils::{non_negative, within_limit};

pub fn factorial(n: i64) -> Result<u64, FactorialError> {
    // Rejecting early also bounds the recursion depth.
    let n = within_limit(non_negative(n)?)?;
    Ok(fact(n))
}

fn fact(n: u64) -> u64 {
    match n {
        0 => 1,
        _ => n * fact(n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::factorial;
    use crate::error::FactorialError;

    #[test]
    fn matches_iterative() {
        for n in 0..=20 {
            assert_eq!(
                factorial(n).unwrap(),
                crate::iterative::factorial(n).unwrap()
            );
        }
    }

    #[test]
    fn base_case() {
        assert_eq!(factorial(0).unwrap(), 1);
    }

    #[test]
    fn errors() {
        assert!(matches!(
            factorial(-3),
            Err(FactorialError::InvalidArgument(-3))
        ));
        assert!(matches!(
            factorial(1_000_000),
            Err(FactorialError::Overflow(1_000_000))
        ));
    }
}
