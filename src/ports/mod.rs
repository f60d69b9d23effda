//! # Ports
//!
//! Trait contract for anything that performs the six operations.
//!
//! The engine implements it; harnesses and bindings only depend on it.

use crate::core::{ArithmeticError, ArithmeticResult, Number, Operation};

/// The arithmetic operation set.
///
/// Every method is a pure function of its arguments. Implementations hold
/// no mutable state, so a shared reference can be used from any thread.
pub trait Arithmetic: Send + Sync {
    /// `a + b`
    fn add(&self, a: Number, b: Number) -> ArithmeticResult<Number>;

    /// `a - b`
    fn subtract(&self, a: Number, b: Number) -> ArithmeticResult<Number>;

    /// `a × b`
    fn multiply(&self, a: Number, b: Number) -> ArithmeticResult<Number>;

    /// `a ÷ b`; `DivisionByZero` when `b` is zero
    fn divide(&self, a: Number, b: Number) -> ArithmeticResult<Number>;

    /// `a` raised to `b`; `Domain` for a negative base with a non-integral exponent
    fn power(&self, a: Number, b: Number) -> ArithmeticResult<Number>;

    /// Non-negative square root; `Domain` when `a < 0`
    fn sqrt(&self, a: Number) -> ArithmeticResult<Number>;

    /// Dispatch an operation chosen at runtime
    fn apply(&self, operation: Operation, operands: &[Number]) -> ArithmeticResult<Number> {
        if operands.len() != operation.arity() {
            return Err(ArithmeticError::Arity {
                operation,
                expected: operation.arity(),
                got: operands.len(),
            });
        }

        match operation {
            Operation::Add => self.add(operands[0], operands[1]),
            Operation::Subtract => self.subtract(operands[0], operands[1]),
            Operation::Multiply => self.multiply(operands[0], operands[1]),
            Operation::Divide => self.divide(operands[0], operands[1]),
            Operation::Power => self.power(operands[0], operands[1]),
            Operation::Sqrt => self.sqrt(operands[0]),
        }
    }
}
