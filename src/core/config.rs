//! # Engine Configuration
//!
//! The only knob is what happens when a result leaves the representable
//! range. Everything else about the operations is fixed.

use std::fmt;
use std::str::FromStr;

/// What to do with results that do not fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Report `ArithmeticError::Overflow`
    #[default]
    Reject,

    /// Integer overflow falls back to `f64`; `f64` overflow yields `±inf`
    Widen,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Reject => "reject",
            OverflowPolicy::Widen => "widen",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(OverflowPolicy::Reject),
            "widen" | "ieee" => Ok(OverflowPolicy::Widen),
            other => Err(format!("unknown overflow policy: {}", other)),
        }
    }
}

/// Configuration for a `Calculator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Overflow handling
    pub overflow: OverflowPolicy,
}

impl EngineConfig {
    /// Default configuration (`OverflowPolicy::Reject`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overflow policy
    pub fn with_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rejects() {
        assert_eq!(EngineConfig::new().overflow, OverflowPolicy::Reject);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new().with_overflow(OverflowPolicy::Widen);
        assert_eq!(config.overflow, OverflowPolicy::Widen);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("Widen".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Widen);
        assert_eq!("reject".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Reject);
        assert!("clamp".parse::<OverflowPolicy>().is_err());
    }
}
