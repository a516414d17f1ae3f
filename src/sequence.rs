use crate::error::FactorialError;
use crate::utils::{non_negative, within_limit};
use std::iter::FusedIterator;

/// The finite sequence `0!, 1!, ..., n!`.
///
/// Every call to [`iter`](PrefixFactorials::iter) starts over from `0!`, so the
/// sequence can be walked any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixFactorials {
    n: u64,
}

impl PrefixFactorials {
    pub fn new(n: i64) -> Result<Self, FactorialError> {
        let n = within_limit(non_negative(n)?)?;
        Ok(Self { n })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn iter(&self) -> Prefixes {
        Prefixes {
            next: 0,
            last: self.n,
            product: 1,
        }
    }
}

impl IntoIterator for &PrefixFactorials {
    type Item = u64;
    type IntoIter = Prefixes;

    fn into_iter(self) -> Prefixes {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Prefixes {
    /// index of the next factorial to yield
    next: u64,
    last: u64,
    /// `(next - 1)!`, or 1 before anything was yielded
    product: u64,
}

impl Iterator for Prefixes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next > self.last {
            return None;
        }
        // last <= MAX_N, so this never overflows
        self.product *= self.next.max(1);
        self.next += 1;
        Some(self.product)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.last + 1).saturating_sub(self.next) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Prefixes {}

impl FusedIterator for Prefixes {}

/// Take the n-th element of the prefix sequence.
pub fn factorial(n: i64) -> Result<u64, FactorialError> {
    let seq = PrefixFactorials::new(n)?;
    // the sequence has n + 1 elements, so the n-th is always there
    Ok(seq.iter().nth(seq.n() as usize).unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        let seq = PrefixFactorials::new(5).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 1, 2, 6, 24, 120]);
        assert_eq!(seq.iter().len(), 6);
    }

    #[test]
    fn restartable() {
        let seq = PrefixFactorials::new(10).unwrap();
        let first: Vec<u64> = seq.iter().collect();
        let second: Vec<u64> = (&seq).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero() {
        let seq = PrefixFactorials::new(0).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(factorial(0).unwrap(), 1);
    }

    #[test]
    fn fused() {
        let mut it = PrefixFactorials::new(1).unwrap().iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn nth_is_the_factorial() {
        let seq = PrefixFactorials::new(5).unwrap();
        assert_eq!(seq.iter().nth(5), Some(120));
        assert_eq!(seq.iter().nth(3), Some(6));
        assert_eq!(seq.iter().nth(6), None);
    }

    #[test]
    fn nth_element() {
        for n in 0..=20 {
            assert_eq!(
                factorial(n).unwrap(),
                crate::iterative::factorial(n).unwrap()
            );
        }
    }

    #[test]
    fn errors() {
        assert!(matches!(
            PrefixFactorials::new(-1),
            Err(FactorialError::InvalidArgument(-1))
        ));
        assert!(matches!(
            PrefixFactorials::new(21),
            Err(FactorialError::Overflow(21))
        ));
    }
}
