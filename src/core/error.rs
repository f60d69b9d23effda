//! # Arithmetic Errors
//!
//! Every failure an operation can report. Errors go straight back to the
//! caller; nothing is retried or swallowed inside the engine.

use thiserror::Error;

use super::operation::Operation;

/// Errors from arithmetic operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticError {
    /// Divisor (or the base of a negative power) is exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// The mathematical preconditions of the operation do not hold over the reals
    #[error("{operation}: domain error: {reason}")]
    Domain {
        operation: Operation,
        reason: &'static str,
    },

    /// The result is outside the representable range
    #[error("{operation}: result overflows")]
    Overflow { operation: Operation },

    /// Wrong number of operands passed to a dynamically dispatched operation
    #[error("{operation} expects {expected} operand(s), got {got}")]
    Arity {
        operation: Operation,
        expected: usize,
        got: usize,
    },
}

impl ArithmeticError {
    /// Short machine-readable kind, stable across messages
    pub fn kind(&self) -> &'static str {
        match self {
            ArithmeticError::DivisionByZero => "division_by_zero",
            ArithmeticError::Domain { .. } => "domain",
            ArithmeticError::Overflow { .. } => "overflow",
            ArithmeticError::Arity { .. } => "arity",
        }
    }
}

pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
