use std::error::Error;
use std::fmt::{self, Display};
use std::io;

#[derive(Debug)]
pub enum FactorialError {
    /// factorial is undefined for negative numbers
    InvalidArgument(i64),
    /// n! does not fit in a `u64`
    Overflow(u64),
    /// input was not an integer at all
    NotAnInteger(String),
    /// the producer thread could not be started
    Spawn(io::Error),
}

impl Error for FactorialError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FactorialError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for FactorialError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FactorialError::InvalidArgument(n) => {
                write!(f, "Invalid argument: {}! is undefined for negative n", n)
            }
            FactorialError::Overflow(n) => write!(f, "Overflow: {}! does not fit in 64 bits", n),
            FactorialError::NotAnInteger(s) => write!(f, "Invalid argument: `{}` is not an integer", s),
            FactorialError::Spawn(e) => write!(f, "Failed to spawn producer: {}", e),
        }
    }
}

impl From<io::Error> for FactorialError {
    fn from(e: io::Error) -> Self {
        FactorialError::Spawn(e)
    }
}
