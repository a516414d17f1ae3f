use crate::error::FactorialError;
use crate::pipeline::Pipeline;
use crate::sequence::PrefixFactorials;
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Iterative,
    Recursive,
    Split,
    Fanout,
    Sequence,
    Pipeline,
}

impl Strategy {
    pub const NAMES: &'static [&'static str] = &[
        "iterative",
        "recursive",
        "split",
        "fanout",
        "sequence",
        "pipeline",
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::Recursive => "recursive",
            Strategy::Split => "split",
            Strategy::Fanout => "fanout",
            Strategy::Sequence => "sequence",
            Strategy::Pipeline => "pipeline",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iterative" => Ok(Strategy::Iterative),
            "recursive" => Ok(Strategy::Recursive),
            "split" => Ok(Strategy::Split),
            "fanout" => Ok(Strategy::Fanout),
            "sequence" => Ok(Strategy::Sequence),
            "pipeline" => Ok(Strategy::Pipeline),
            _ => Err(format!("Unknown strategy: `{}`", s)),
        }
    }
}

/// An immutable factorial calculator. All state is fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    strategy: Strategy,
    /// number of ranges for `Strategy::Fanout`
    workers: usize,
    /// pivot for `Strategy::Split`, midpoint when unset
    pivot: Option<u64>,
}

pub struct CalculatorBuilder {
    /// Default: Iterative
    strategy: Strategy,
    /// Default: number of threads in the rayon pool
    workers: usize,
    /// Default: None
    pivot: Option<u64>,
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            strategy: Strategy::Iterative,
            workers: rayon::current_num_threads(),
            pivot: None,
        }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn pivot(mut self, pivot: u64) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn build(self) -> Calculator {
        Calculator {
            strategy: self.strategy,
            workers: self.workers,
            pivot: self.pivot,
        }
    }
}

impl Calculator {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn compute(&self, n: i64) -> Result<u64, FactorialError> {
        debug!("computing {}! with the {} strategy", n, self.strategy);
        match self.strategy {
            Strategy::Iterative => crate::iterative::factorial(n),
            Strategy::Recursive => crate::recursive::factorial(n),
            Strategy::Split => match self.pivot {
                Some(pivot) => crate::split::factorial_with_pivot(n, pivot),
                None => crate::split::factorial(n),
            },
            Strategy::Fanout => crate::split::factorial_fanout(n, self.workers),
            Strategy::Sequence => crate::sequence::factorial(n),
            Strategy::Pipeline => crate::pipeline::factorial(n),
        }
    }

    /// Every prefix factorial `0!..=n!`.
    pub fn prefixes(&self, n: i64) -> Result<Vec<u64>, FactorialError> {
        match self.strategy {
            Strategy::Pipeline => Ok(Pipeline::spawn(n)?.collect()),
            _ => Ok(PrefixFactorials::new(n)?.iter().collect()),
        }
    }
}
