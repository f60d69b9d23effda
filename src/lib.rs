//! # reckon - Checked Arithmetic Engine
//!
//! Six pure operations over real numbers, with typed failures instead of
//! runtime surprises.
//!
//! ## Philosophy
//!
//! - **No hidden effects** - no I/O, no logging, no state between calls
//! - **Failures are values** - division by zero, domain and overflow errors
//!   come back as `ArithmeticError`
//! - **Exact where possible** - whole numbers stay whole (`i128`)
//! - **Pure core, swappable adapters** - Hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        RECKON                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure math, no I/O)                                   │
//! │    Number, Operation, ops, EngineConfig, ArithmeticError    │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Arithmetic                                                │
//! │                                                              │
//! │  ENGINE (configuration applied)                              │
//! │    Calculator - the main entry point                        │
//! │                                                              │
//! │  ADAPTERS (outer surfaces)                                   │
//! │    Console harness, Python bindings                         │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use reckon::{Arithmetic, ArithmeticError, Calculator, Number};
//!
//! let calc = Calculator::new();
//!
//! let sum = calc.add(Number::from(10), Number::from(20)).unwrap();
//! assert_eq!(sum.to_string(), "30");
//!
//! let err = calc.divide(Number::from(1), Number::from(0)).unwrap_err();
//! assert_eq!(err, ArithmeticError::DivisionByZero);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure math, no I/O
/// Contains: Number, Operation, ops, EngineConfig, ArithmeticError
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Arithmetic trait
pub mod ports;

/// Adapter implementations - outer surfaces
/// Contains: console, python submodules
pub mod adapters;

/// Engine - configuration applied to the core
/// Contains: Calculator main struct
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::PyCalculator;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{ArithmeticError, ArithmeticResult, Number, Operation};
pub use crate::core::config::{EngineConfig, OverflowPolicy};

// Port traits
pub use crate::ports::Arithmetic;

// Engine
pub use crate::engine::Calculator;

// Harness
pub use crate::adapters::console::{HarnessError, OutputFormat};
