//! Latin prefix for a single base-1000 group

use zillion_core::{DashMode, GroupValue};

use crate::tables::{HUNDREDS_PREFIX, ILLION_ROOTS, ONES_PREFIX, TENS_PREFIX};

/// Build the Latin prefix for a group value (empty for zero)
///
/// Values 1..=10 use the short roots (m, b, tr, ...). Larger values compose
/// ones, tens and hundreds morphemes in that order, which is the Latin
/// compounding order ("tre" + "viginti"), not place-value reading order.
/// The final morpheme loses a trailing "i" or "a".
pub fn group_prefix(group: GroupValue, dash_mode: DashMode) -> String {
    if group.is_zero() {
        return String::new();
    }
    if group.is_root() {
        return ILLION_ROOTS[group.get() as usize].to_string();
    }

    let mut parts: Vec<&str> = [
        ONES_PREFIX[group.ones()],
        TENS_PREFIX[group.tens()],
        HUNDREDS_PREFIX[group.hundreds()],
    ]
    .into_iter()
    .filter(|m| !m.is_empty())
    .collect();

    if let Some(last) = parts.last_mut() {
        *last = elide(*last);
    }

    parts.join(dash_mode.separator())
}

fn elide(morpheme: &str) -> &str {
    morpheme
        .strip_suffix('i')
        .or_else(|| morpheme.strip_suffix('a'))
        .unwrap_or(morpheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(n: u64) -> String {
        group_prefix(GroupValue::new(n).unwrap(), DashMode::Joined)
    }

    fn dashed(n: u64) -> String {
        group_prefix(GroupValue::new(n).unwrap(), DashMode::Dashed)
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(joined(0), "");
        assert_eq!(dashed(0), "");
    }

    #[test]
    fn test_roots() {
        assert_eq!(joined(1), "m");
        assert_eq!(joined(3), "tr");
        assert_eq!(dashed(10), "dec");
    }

    #[test]
    fn test_ones_before_tens() {
        assert_eq!(joined(11), "undec");
        assert_eq!(dashed(23), "tre-vigint");
        assert_eq!(joined(32), "duotrigint");
    }

    #[test]
    fn test_only_last_morpheme_elided() {
        assert_eq!(dashed(111), "un-deci-cent");
        assert_eq!(dashed(999), "novem-nonaginta-nongent");
        assert_eq!(joined(120), "viginticent");
    }

    #[test]
    fn test_whole_hundreds() {
        assert_eq!(joined(100), "cent");
        assert_eq!(dashed(200), "ducent");
        assert_eq!(dashed(600), "sescent");
    }

    #[test]
    fn test_elision_endings() {
        assert_eq!(joined(20), "vigint");
        assert_eq!(joined(30), "trigint");
        assert_eq!(joined(15), "quindec");
        // "un" has nothing to elide
        assert_eq!(dashed(101), "un-cent");
    }
}
