//! `factorials` computes n! in every style a programmer grows through:
//! a plain loop, recursion, a parallel split, a lazy sequence, a
//! producer thread and an over-built calculator object. They all agree.
//!
//! Negative input fails with [`FactorialError::InvalidArgument`]. Results that
//! do not fit in a `u64` (anything past 20!) fail with [`FactorialError::Overflow`];
//! use [`big`] for arbitrary precision.
//!
//! # Example
//!
//! ```
//! use factorials::calculator::{CalculatorBuilder, Strategy};
//!
//! assert_eq!(factorials::factorial(5).unwrap(), 120);
//!
//! let calc = CalculatorBuilder::new()
//!     .strategy(Strategy::Split)
//!     .pivot(3)
//!     .build();
//! assert_eq!(calc.compute(7).unwrap(), 5040);
//!
//! assert!(factorials::factorial(-1).is_err());
//! assert_eq!(factorials::big::factorial(25).unwrap().to_string(), "15511210043330985984000000");
//! ```
#[macro_use]
extern crate log;

pub mod big;
pub mod calculator;
pub mod directories;
pub mod dynamic;
pub mod error;
pub mod iterative;
pub mod pipeline;
pub mod recursive;
pub mod sequence;
pub mod split;
pub mod utils;

pub use crate::error::FactorialError;
pub use crate::iterative::factorial;
