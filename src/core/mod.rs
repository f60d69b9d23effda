//! # Core
//!
//! Pure arithmetic. No I/O, no logging, no shared state.
//!
//! - `Number` - operand and result value
//! - `Operation` - names for the six operations
//! - `ops` - the operation kernels
//! - `EngineConfig` - overflow policy
//! - `ArithmeticError` - failure taxonomy

pub mod config;
pub mod error;
pub mod number;
pub mod operation;
pub mod ops;

pub use config::{EngineConfig, OverflowPolicy};
pub use error::{ArithmeticError, ArithmeticResult};
pub use number::{Number, ParseNumberError};
pub use operation::{Operation, UnknownOperation};
