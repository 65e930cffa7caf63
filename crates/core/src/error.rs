//! Error types for the text tools
//!
//! Comparison itself never fails. These errors come from the surrounding
//! surfaces: the opt-in input ceiling, the transform registry and the TOML
//! configuration loader.

use std::fmt;
use thiserror::Error;

/// Result alias using [`TextError`]
pub type Result<T> = std::result::Result<T, TextError>;

/// Which input of a comparison an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Errors raised by textbench operations
#[derive(Error, Debug)]
pub enum TextError {
    /// An input exceeded the configured comparison ceiling
    #[error("{side} input is {len} bytes, exceeding the limit of {limit} bytes")]
    InputTooLarge { side: Side, len: usize, limit: usize },

    /// No transform is registered under this name
    #[error("unknown transform: {name} (available: {available})")]
    UnknownTransform { name: String, available: String },

    /// Configuration parsed but holds an unusable value
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Configuration file is not valid TOML for the expected schema
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_too_large_message() {
        let err = TextError::InputTooLarge {
            side: Side::Right,
            len: 20,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "right input is 20 bytes, exceeding the limit of 10 bytes"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TextError = io.into();
        assert!(matches!(err, TextError::Io(_)));
    }
}
