//! Error types for zillion

use thiserror::Error;

/// Core zillion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZillionError {
    // Input errors
    #[error("Invalid zero count: {0:?}")]
    InvalidZeroCount(String),

    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),

    // Range errors
    #[error("Zero count too large: {value} exceeds maximum {max}")]
    ZeroCountTooLarge { value: u64, max: u64 },

    #[error("Group value out of range: {0} (expected 0..=999)")]
    GroupOutOfRange(u64),
}

/// Result type for zillion operations
pub type ZillionResult<T> = Result<T, ZillionError>;
