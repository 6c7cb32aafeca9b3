//! Naming configuration

use crate::{DashMode, ZeroCount, ZillionError, ZillionResult};

/// Largest count of the classic namer (one millinillion)
pub const CLASSIC_MAX_ZEROS: u64 = 3003;

/// Largest count of the extended namer (one millinillinillinillion)
pub const EXTENDED_MAX_ZEROS: u64 = 3_000_000_000_003;

/// What to do with a count above the configured maximum
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Silently use the maximum instead
    #[default]
    Clamp,
    /// Fail with `ZeroCountTooLarge`
    Reject,
}

/// Namer configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingConfig {
    /// Separator between Latin morphemes
    pub dash_mode: DashMode,
    /// Upper bound on accepted zero counts
    pub max_zeros: ZeroCount,
    /// Handling of counts above `max_zeros`
    pub overflow: OverflowPolicy,
}

impl Default for NamingConfig {
    fn default() -> Self {
        NamingConfig {
            dash_mode: DashMode::Dashed,
            max_zeros: ZeroCount(EXTENDED_MAX_ZEROS),
            overflow: OverflowPolicy::Clamp,
        }
    }
}

impl NamingConfig {
    /// Configuration of the first keypad revision (up to a millinillion)
    pub fn classic() -> Self {
        NamingConfig {
            max_zeros: ZeroCount(CLASSIC_MAX_ZEROS),
            ..Self::default()
        }
    }

    /// Configuration of the recursive revision
    pub fn extended() -> Self {
        Self::default()
    }

    pub fn with_dash_mode(mut self, dash_mode: DashMode) -> Self {
        self.dash_mode = dash_mode;
        self
    }

    pub fn with_max_zeros(mut self, max_zeros: u64) -> Self {
        self.max_zeros = ZeroCount(max_zeros);
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Apply the overflow policy to a raw count
    pub fn admit(&self, zeros: ZeroCount) -> ZillionResult<ZeroCount> {
        if zeros <= self.max_zeros {
            return Ok(zeros);
        }
        match self.overflow {
            OverflowPolicy::Clamp => {
                tracing::debug!(
                    requested = zeros.get(),
                    max = self.max_zeros.get(),
                    "zero count clamped"
                );
                Ok(self.max_zeros)
            }
            OverflowPolicy::Reject => {
                tracing::debug!(
                    requested = zeros.get(),
                    max = self.max_zeros.get(),
                    "zero count rejected"
                );
                Err(ZillionError::ZeroCountTooLarge {
                    value: zeros.get(),
                    max: self.max_zeros.get(),
                })
            }
        }
    }
}
