//! # Console Harness
//!
//! Runs operations against an `Arithmetic` implementation and writes the
//! results to a byte sink, one line per result.
//!
//! Formatting lives here, never in the engine. The first failing operation
//! stops the run and its error is returned to the caller.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

use crate::core::{ArithmeticError, Number, Operation};
use crate::ports::Arithmetic;

/// The fixed demonstration sequence
pub const DEMO: [(Operation, &[Number]); 6] = [
    (Operation::Add, &[Number::Integer(10), Number::Integer(20)]),
    (Operation::Subtract, &[Number::Integer(10), Number::Integer(20)]),
    (Operation::Multiply, &[Number::Integer(10), Number::Integer(20)]),
    (Operation::Divide, &[Number::Integer(10), Number::Integer(20)]),
    (Operation::Power, &[Number::Integer(10), Number::Integer(20)]),
    (Operation::Sqrt, &[Number::Integer(100)]),
];

/// How result lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare result, e.g. `30`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Harness failures
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("{operation} failed: {source}")]
    Arithmetic {
        operation: Operation,
        #[source]
        source: ArithmeticError,
    },

    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    #[error("encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;

#[derive(Serialize)]
struct Record<'a> {
    operation: Operation,
    operands: &'a [Number],
    result: Number,
}

#[derive(Serialize)]
struct FailureRecord<'a> {
    operation: Operation,
    operands: &'a [Number],
    error: &'static str,
    message: String,
}

/// Evaluate one operation and write its result line.
///
/// In JSON format a failure is also written, as a line carrying `error`
/// (the `ArithmeticError::kind`) and `message` instead of `result`. Text
/// format writes nothing for a failure.
pub fn evaluate<A, W>(
    engine: &A,
    operation: Operation,
    operands: &[Number],
    out: &mut W,
    format: OutputFormat,
) -> HarnessResult<Number>
where
    A: Arithmetic + ?Sized,
    W: Write,
{
    debug!("evaluating {} {:?}", operation, operands);

    let result = match engine.apply(operation, operands) {
        Ok(result) => result,
        Err(source) => {
            error!("{} {:?}: {}", operation, operands, source);
            if format == OutputFormat::Json {
                let record = FailureRecord {
                    operation,
                    operands,
                    error: source.kind(),
                    message: source.to_string(),
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
            return Err(HarnessError::Arithmetic { operation, source });
        }
    };

    match format {
        OutputFormat::Text => writeln!(out, "{}", result)?,
        OutputFormat::Json => {
            let record = Record {
                operation,
                operands,
                result,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }

    Ok(result)
}

/// Run the demonstration sequence, returning every result in order
pub fn run_demo<A, W>(engine: &A, out: &mut W, format: OutputFormat) -> HarnessResult<Vec<Number>>
where
    A: Arithmetic + ?Sized,
    W: Write,
{
    let mut results = Vec::with_capacity(DEMO.len());

    for (operation, operands) in DEMO {
        results.push(evaluate(engine, operation, operands, out, format)?);
    }

    out.flush()?;
    debug!("demo complete: {} results", results.len());

    Ok(results)
}
