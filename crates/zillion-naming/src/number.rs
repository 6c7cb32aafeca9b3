//! Full number names

use zillion_core::{DashMode, ZeroCount};

use crate::illion::illion_name;
use crate::tables::SMALL_NAMES;

/// Name of 10^zeros
///
/// Counts below six are irregular and come straight from a table. From one
/// million on, the name is the magnitude word followed by the illion name.
pub fn number_name(zeros: ZeroCount, dash_mode: DashMode) -> String {
    let Some(index) = zeros.illion_index() else {
        return SMALL_NAMES[zeros.get() as usize].to_string();
    };

    let illion = illion_name(index, dash_mode);
    let magnitude = zeros.magnitude().word();
    let mut name = String::with_capacity(magnitude.len() + 1 + illion.len());
    name.push_str(magnitude);
    name.push(' ');
    name.push_str(&illion);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(z: u64) -> String {
        number_name(ZeroCount(z), DashMode::Joined)
    }

    fn dashed(z: u64) -> String {
        number_name(ZeroCount(z), DashMode::Dashed)
    }

    #[test]
    fn test_small_names() {
        let expected = [
            "one",
            "ten",
            "one hundred",
            "one thousand",
            "ten thousand",
            "one hundred thousand",
        ];
        for (z, name) in expected.iter().enumerate() {
            assert_eq!(joined(z as u64), *name);
            assert_eq!(dashed(z as u64), *name);
        }
    }

    #[test]
    fn test_standard_illions() {
        assert_eq!(joined(6), "one million");
        assert_eq!(joined(7), "ten million");
        assert_eq!(joined(8), "one hundred million");
        assert_eq!(joined(9), "one billion");
        assert_eq!(dashed(33), "one decillion");
    }

    #[test]
    fn test_landmark_names() {
        assert_eq!(joined(36), "one undecillion");
        assert_eq!(joined(100), "ten duotrigintillion");
        assert_eq!(dashed(100), "ten duo-trigint-illion");
        assert_eq!(joined(303), "one centillion");
        assert_eq!(joined(3003), "one millinillion");
        assert_eq!(dashed(3003), "one m-illin-illion");
    }

    #[test]
    fn test_extended_maximum() {
        assert_eq!(
            joined(3_000_000_000_003),
            "one millinillinillinillinillion"
        );
        assert_eq!(
            joined(3_000_000_000_005),
            "one hundred millinillinillinillinillion"
        );
    }
}
