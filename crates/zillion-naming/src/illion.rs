//! Illion prefixes and names
//!
//! An illion index is read as base-1000 digits. The leading digit is named by
//! `group_prefix`, and every following digit adds the "illin" infix plus its
//! own group prefix when non-zero:
//!
//! ```text
//! 1000      -> m + illin              -> millinillion
//! 1023      -> m + illin + trevigint  -> millintrevigintillion
//! 1_000_000 -> m + illin + illin      -> millinillinillion
//! ```

use zillion_core::{DashMode, IllionIndex};

use crate::group::group_prefix;
use crate::tables::{ILLIN, ILLION, STANDARD_ILLIONS};

/// Latin prefix of the n-th illion, without the "illion" suffix
pub fn illion_prefix(index: IllionIndex, dash_mode: DashMode) -> String {
    let sep = dash_mode.separator();
    let groups = index.groups();
    let Some((leading, rest)) = groups.split_first() else {
        return String::new();
    };

    let mut prefix = group_prefix(*leading, dash_mode);
    for &group in rest {
        prefix.push_str(sep);
        prefix.push_str(ILLIN);
        if !group.is_zero() {
            prefix.push_str(sep);
            prefix.push_str(&group_prefix(group, dash_mode));
        }
    }
    prefix
}

/// Full name of the n-th illion ("million", "undecillion", ...)
pub fn illion_name(index: IllionIndex, dash_mode: DashMode) -> String {
    if index == IllionIndex::ZERO {
        return String::new();
    }
    if index.is_standard() {
        return STANDARD_ILLIONS[index.get() as usize].to_string();
    }

    let mut name = illion_prefix(index, dash_mode);
    name.push_str(dash_mode.separator());
    name.push_str(ILLION);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(n: u64, dash_mode: DashMode) -> String {
        illion_prefix(IllionIndex(n), dash_mode)
    }

    fn name(n: u64, dash_mode: DashMode) -> String {
        illion_name(IllionIndex(n), dash_mode)
    }

    #[test]
    fn test_prefix_single_group() {
        assert_eq!(prefix(0, DashMode::Joined), "");
        assert_eq!(prefix(1, DashMode::Joined), "m");
        assert_eq!(prefix(11, DashMode::Dashed), "un-dec");
        assert_eq!(prefix(999, DashMode::Joined), "novemnonagintanongent");
    }

    #[test]
    fn test_prefix_thousands() {
        assert_eq!(prefix(1000, DashMode::Joined), "millin");
        assert_eq!(prefix(1000, DashMode::Dashed), "m-illin");
        assert_eq!(prefix(1001, DashMode::Dashed), "m-illin-m");
        assert_eq!(prefix(2023, DashMode::Dashed), "b-illin-tre-vigint");
        assert_eq!(prefix(1_000_000, DashMode::Joined), "millinillin");
        assert_eq!(prefix(1_000_011, DashMode::Joined), "millinillinundec");
    }

    #[test]
    fn test_standard_names() {
        assert_eq!(name(0, DashMode::Dashed), "");
        assert_eq!(name(1, DashMode::Dashed), "million");
        assert_eq!(name(2, DashMode::Joined), "billion");
        assert_eq!(name(10, DashMode::Dashed), "decillion");
    }

    #[test]
    fn test_compositional_names() {
        assert_eq!(name(11, DashMode::Joined), "undecillion");
        assert_eq!(name(11, DashMode::Dashed), "un-dec-illion");
        assert_eq!(name(20, DashMode::Joined), "vigintillion");
        assert_eq!(name(21, DashMode::Dashed), "un-vigint-illion");
        assert_eq!(name(100, DashMode::Joined), "centillion");
        assert_eq!(name(1000, DashMode::Joined), "millinillion");
        assert_eq!(name(1000, DashMode::Dashed), "m-illin-illion");
    }

    #[test]
    fn test_deep_nesting() {
        assert_eq!(
            name(1_000_000_000_000, DashMode::Joined),
            "millinillinillinillinillion"
        );
        // u64::MAX still resolves
        assert!(name(u64::MAX, DashMode::Joined).ends_with("illion"));
    }
}
