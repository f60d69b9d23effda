//! # Calculator
//!
//! The arithmetic engine.
//!
//! Holds only its configuration. Building one performs no I/O, and every
//! call is independent of every other.

use crate::core::config::EngineConfig;
use crate::core::{ops, ArithmeticResult, Number};
use crate::ports::Arithmetic;

/// The arithmetic engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    /// Configuration
    config: EngineConfig,
}

impl Calculator {
    /// Create with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an explicit configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Arithmetic for Calculator {
    fn add(&self, a: Number, b: Number) -> ArithmeticResult<Number> {
        ops::add(a, b, self.config.overflow)
    }

    fn subtract(&self, a: Number, b: Number) -> ArithmeticResult<Number> {
        ops::subtract(a, b, self.config.overflow)
    }

    fn multiply(&self, a: Number, b: Number) -> ArithmeticResult<Number> {
        ops::multiply(a, b, self.config.overflow)
    }

    fn divide(&self, a: Number, b: Number) -> ArithmeticResult<Number> {
        ops::divide(a, b, self.config.overflow)
    }

    fn power(&self, a: Number, b: Number) -> ArithmeticResult<Number> {
        ops::power(a, b, self.config.overflow)
    }

    fn sqrt(&self, a: Number) -> ArithmeticResult<Number> {
        ops::sqrt(a)
    }
}
