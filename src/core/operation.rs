//! # Operation
//!
//! Names for the six operations, used wherever an operation is chosen at
//! runtime (the harness, the CLI, error reports).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// One of the six arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
}

impl Operation {
    /// All operations, in declaration order
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
        }
    }

    /// Number of operands the operation takes
    pub fn arity(&self) -> usize {
        match self {
            Operation::Sqrt => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised operation name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0:?}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" | "sub" => Ok(Operation::Subtract),
            "multiply" | "mul" => Ok(Operation::Multiply),
            "divide" | "div" => Ok(Operation::Divide),
            "power" | "pow" => Ok(Operation::Power),
            "sqrt" => Ok(Operation::Sqrt),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("SUB".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("pow".parse::<Operation>().unwrap(), Operation::Power);
        assert!("modulo".parse::<Operation>().is_err());
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operation::Sqrt.arity(), 1);
        assert!(Operation::ALL
            .iter()
            .filter(|op| **op != Operation::Sqrt)
            .all(|op| op.arity() == 2));
    }
}
