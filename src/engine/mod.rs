//! # Engine
//!
//! The entry point that binds a configuration to the core kernels.
//!
//! This is where:
//! - Configuration is applied
//! - The `Arithmetic` port is implemented

mod calculator;

pub use calculator::Calculator;
