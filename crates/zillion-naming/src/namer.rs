//! Namer - config-aware entry point for callers

use zillion_core::{DashMode, NamingConfig, ZeroCount, ZeroEntry, ZillionResult};

use crate::grouping::{render_decimal, MAX_RENDERED_ZEROS};
use crate::landmark::{landmark_for, Landmark};
use crate::number::number_name;

/// Everything a caller shows for one zero count
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberReport {
    /// Count actually named (after the overflow policy)
    pub zeros: ZeroCount,
    /// Whether the requested count was clamped
    pub clamped: bool,
    /// English name
    pub name: String,
    /// Grouped decimal digits, omitted above `MAX_RENDERED_ZEROS`
    pub digits: Option<String>,
    pub landmark: Option<Landmark>,
}

/// Large-number namer
#[derive(Clone, Debug, Default)]
pub struct Namer {
    config: NamingConfig,
}

impl Namer {
    /// Create a namer with default configuration
    pub fn new() -> Self {
        Self::with_config(NamingConfig::default())
    }

    /// Create a namer with custom configuration
    pub fn with_config(config: NamingConfig) -> Self {
        Namer { config }
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    pub fn set_dash_mode(&mut self, dash_mode: DashMode) {
        self.config.dash_mode = dash_mode;
    }

    /// Fresh keypad entry bounded by this namer's maximum
    pub fn entry(&self) -> ZeroEntry {
        ZeroEntry::new(self.config.max_zeros)
    }

    /// Apply the overflow policy
    pub fn resolve(&self, zeros: ZeroCount) -> ZillionResult<ZeroCount> {
        self.config.admit(zeros)
    }

    pub fn name(&self, zeros: ZeroCount) -> ZillionResult<String> {
        let zeros = self.resolve(zeros)?;
        Ok(number_name(zeros, self.config.dash_mode))
    }

    pub fn report(&self, requested: ZeroCount) -> ZillionResult<NumberReport> {
        let zeros = self.resolve(requested)?;
        let digits = (zeros.get() <= MAX_RENDERED_ZEROS).then(|| render_decimal(zeros));
        let report = NumberReport {
            zeros,
            clamped: zeros != requested,
            name: number_name(zeros, self.config.dash_mode),
            digits,
            landmark: landmark_for(zeros),
        };
        tracing::trace!(zeros = zeros.get(), name = %report.name, "named");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zillion_core::{OverflowPolicy, ZillionError};

    #[test]
    fn test_default_namer_uses_dashes() {
        let namer = Namer::new();
        assert_eq!(namer.name(ZeroCount(66)).unwrap(), "one un-vigint-illion");
    }

    #[test]
    fn test_joined_namer() {
        let mut namer = Namer::new();
        namer.set_dash_mode(DashMode::Joined);
        assert_eq!(namer.name(ZeroCount(66)).unwrap(), "one unvigintillion");
    }

    #[test]
    fn test_classic_clamps_to_millinillion() {
        let namer = Namer::with_config(NamingConfig::classic());
        let report = namer.report(ZeroCount(5000)).unwrap();
        assert_eq!(report.zeros, ZeroCount(3003));
        assert!(report.clamped);
        assert_eq!(report.name, "one m-illin-illion");
        assert_eq!(report.landmark, Some(Landmark::Millinillion));
    }

    #[test]
    fn test_reject_policy() {
        let config = NamingConfig::classic().with_overflow(OverflowPolicy::Reject);
        let namer = Namer::with_config(config);
        assert_eq!(
            namer.name(ZeroCount(3004)),
            Err(ZillionError::ZeroCountTooLarge { value: 3004, max: 3003 })
        );
    }

    #[test]
    fn test_report_digits() {
        let namer = Namer::new();
        let report = namer.report(ZeroCount(6)).unwrap();
        assert_eq!(report.digits.as_deref(), Some("1,000,000"));
        assert!(!report.clamped);
        assert_eq!(report.landmark, None);

        let huge = namer.report(ZeroCount(MAX_RENDERED_ZEROS + 1)).unwrap();
        assert_eq!(huge.digits, None);
    }

    #[test]
    fn test_entry_is_bounded_by_config() {
        let namer = Namer::with_config(NamingConfig::classic());
        let mut entry = namer.entry();
        entry.set_text("99999");
        assert_eq!(entry.value(), ZeroCount(3003));
    }
}
