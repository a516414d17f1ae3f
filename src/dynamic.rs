use crate::error::FactorialError;
use std::fmt::{self, Display};

/// Input resolved once at the boundary: either an integer or anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Other(String),
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        s.trim()
            .parse::<i64>()
            .map(Value::Integer)
            .unwrap_or_else(|_| Value::Other(s.to_owned()))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Other(s) => write!(f, "{}", s),
        }
    }
}

impl Value {
    pub fn as_integer(&self) -> Result<i64, FactorialError> {
        match self {
            Value::Integer(n) => Ok(*n),
            Value::Other(s) => Err(FactorialError::NotAnInteger(s.clone())),
        }
    }
}

pub fn factorial(value: &Value) -> Result<u64, FactorialError> {
    crate::iterative::factorial(value.as_integer()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Value::from("5"), Value::Integer(5));
        assert_eq!(Value::from(" -1 "), Value::Integer(-1));
        assert_eq!(Value::from("5.0"), Value::Other("5.0".into()));
        assert_eq!(Value::from("five"), Value::Other("five".into()));
    }

    #[test]
    fn integers() {
        assert_eq!(factorial(&Value::from(5)).unwrap(), 120);
        assert!(matches!(
            factorial(&Value::from(-1)),
            Err(FactorialError::InvalidArgument(-1))
        ));
    }

    #[test]
    fn others() {
        assert!(matches!(
            factorial(&Value::from("abc")),
            Err(FactorialError::NotAnInteger(ref s)) if s == "abc"
        ));
    }
}
