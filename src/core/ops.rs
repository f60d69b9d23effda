//! # Arithmetic Kernels
//!
//! The six operations as pure functions of their operands and an overflow
//! policy. No state, no I/O.
//!
//! Promotion rules:
//! - integer ∘ integer stays integer for add, subtract, multiply and
//!   power with a non-negative exponent
//! - anything touching a real, any division, and any root is computed in `f64`
//!
//! Overflow is only ever raised for results computed from finite operands.
//! Non-finite operands propagate by IEEE-754 rules.

use super::config::OverflowPolicy;
use super::error::{ArithmeticError, ArithmeticResult};
use super::number::Number;
use super::operation::Operation;

/// `a + b`
pub fn add(a: Number, b: Number, policy: OverflowPolicy) -> ArithmeticResult<Number> {
    binary(Operation::Add, a, b, policy, i128::checked_add, |x, y| x + y)
}

/// `a - b`
pub fn subtract(a: Number, b: Number, policy: OverflowPolicy) -> ArithmeticResult<Number> {
    binary(Operation::Subtract, a, b, policy, i128::checked_sub, |x, y| x - y)
}

/// `a × b`
pub fn multiply(a: Number, b: Number, policy: OverflowPolicy) -> ArithmeticResult<Number> {
    binary(Operation::Multiply, a, b, policy, i128::checked_mul, |x, y| x * y)
}

/// `a ÷ b`, always real.
///
/// Fails with `DivisionByZero` when `b` is `0`, `0.0` or `-0.0`.
pub fn divide(a: Number, b: Number, policy: OverflowPolicy) -> ArithmeticResult<Number> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    let finite = a.is_finite() && b.is_finite();
    real(Operation::Divide, a.as_f64() / b.as_f64(), finite, policy)
}

/// `a` raised to `b`.
///
/// - negative base with a non-integral exponent has no real result: `Domain`
/// - zero base with a negative exponent is a reciprocal of zero: `DivisionByZero`
pub fn power(a: Number, b: Number, policy: OverflowPolicy) -> ArithmeticResult<Number> {
    if a.is_zero() && b.is_negative() {
        return Err(ArithmeticError::DivisionByZero);
    }

    if let (Number::Integer(base), Number::Integer(exp)) = (a, b) {
        if exp >= 0 {
            if let Some(value) = int_pow(base, exp) {
                return Ok(Number::Integer(value));
            }
            return match policy {
                OverflowPolicy::Reject => Err(ArithmeticError::Overflow {
                    operation: Operation::Power,
                }),
                OverflowPolicy::Widen => Ok(Number::Real((base as f64).powf(exp as f64))),
            };
        }
        // Negative integer exponent: a real reciprocal
        return real(Operation::Power, (base as f64).powf(exp as f64), true, policy);
    }

    if a.is_negative() && b.is_finite() && !b.is_integral() {
        return Err(ArithmeticError::Domain {
            operation: Operation::Power,
            reason: "negative base with non-integral exponent",
        });
    }

    real(
        Operation::Power,
        a.as_f64().powf(b.as_f64()),
        a.is_finite() && b.is_finite(),
        policy,
    )
}

/// Non-negative square root of `a`, always real.
///
/// Fails with `Domain` when `a < 0`. `-0.0` is not negative and yields `-0.0`.
pub fn sqrt(a: Number) -> ArithmeticResult<Number> {
    if a.is_negative() {
        return Err(ArithmeticError::Domain {
            operation: Operation::Sqrt,
            reason: "square root of a negative number",
        });
    }

    Ok(Number::Real(a.as_f64().sqrt()))
}

// ============================================================================
// HELPERS
// ============================================================================

fn binary(
    operation: Operation,
    a: Number,
    b: Number,
    policy: OverflowPolicy,
    exact: fn(i128, i128) -> Option<i128>,
    float: fn(f64, f64) -> f64,
) -> ArithmeticResult<Number> {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => match exact(x, y) {
            Some(value) => Ok(Number::Integer(value)),
            None => match policy {
                OverflowPolicy::Reject => Err(ArithmeticError::Overflow { operation }),
                OverflowPolicy::Widen => Ok(Number::Real(float(x as f64, y as f64))),
            },
        },
        _ => {
            let finite = a.is_finite() && b.is_finite();
            real(operation, float(a.as_f64(), b.as_f64()), finite, policy)
        }
    }
}

/// Apply the overflow policy to a floating-point result
fn real(
    operation: Operation,
    value: f64,
    operands_finite: bool,
    policy: OverflowPolicy,
) -> ArithmeticResult<Number> {
    if operands_finite && value.is_infinite() && policy == OverflowPolicy::Reject {
        return Err(ArithmeticError::Overflow { operation });
    }
    Ok(Number::Real(value))
}

/// Exact `base^exp` for `exp >= 0`, `None` on overflow
fn int_pow(base: i128, exp: i128) -> Option<i128> {
    match base {
        0 => Some(if exp == 0 { 1 } else { 0 }),
        1 => Some(1),
        -1 => Some(if exp % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exp).ok().and_then(|e| base.checked_pow(e)),
    }
}
