//! # Adapters
//!
//! Outer surfaces built on the `Arithmetic` port:
//! - Console harness: demonstration run and one-off evaluation
//! - Python bindings (when enabled)
//!
//! Adapters depend on the port, never on engine internals.

pub mod console;

#[cfg(feature = "python")]
pub mod python;
