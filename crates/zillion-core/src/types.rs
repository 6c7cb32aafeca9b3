//! Count and index types for zillion
//!
//! A number is always "1" followed by some zeros, so the whole model is built
//! around the zero count. Everything else is derived from it:
//! - IllionIndex: which "-illion" names the leading groups (1 = million)
//! - Magnitude: the one/ten/one hundred multiplier in front of the illion
//! - GroupValue: one base-1000 digit of an illion index

use std::fmt;
use std::str::FromStr;

use crate::{ZillionError, ZillionResult};

/// First zero count named by an illion (10^6 = one million)
pub const FIRST_ILLION_ZEROS: u64 = 6;

/// Largest value a single base-1000 group can hold
pub const MAX_GROUP_VALUE: u16 = 999;

/// Number of zeros following the leading "1" (the number is 10^n)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ZeroCount(pub u64);

impl ZeroCount {
    pub const ZERO: ZeroCount = ZeroCount(0);

    #[inline]
    pub fn new(zeros: u64) -> Self {
        ZeroCount(zeros)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// Illion index for this count, or None below one million
    #[inline]
    pub fn illion_index(self) -> Option<IllionIndex> {
        if self.0 < FIRST_ILLION_ZEROS {
            None
        } else {
            Some(IllionIndex(self.0 / 3 - 1))
        }
    }

    /// Multiplier selected by the count modulo 3
    #[inline]
    pub fn magnitude(self) -> Magnitude {
        Magnitude::from_zero_count(self.0)
    }

    /// Rebuild a count from its illion index and magnitude
    /// Returns None if the result does not fit in a u64
    pub fn from_parts(index: IllionIndex, magnitude: Magnitude) -> Option<Self> {
        index
            .0
            .checked_add(1)?
            .checked_mul(3)?
            .checked_add(magnitude.extra_zeros())
            .map(ZeroCount)
    }

    /// Clamp to an upper bound
    #[inline]
    pub fn clamp_to(self, max: ZeroCount) -> Self {
        self.min(max)
    }

    #[inline]
    pub fn saturating_add(self, n: u64) -> Self {
        ZeroCount(self.0.saturating_add(n))
    }

    #[inline]
    pub fn saturating_sub(self, n: u64) -> Self {
        ZeroCount(self.0.saturating_sub(n))
    }
}

impl From<u64> for ZeroCount {
    fn from(zeros: u64) -> Self {
        ZeroCount(zeros)
    }
}

impl FromStr for ZeroCount {
    type Err = ZillionError;

    /// Parse raw user text. Empty input means no zeros.
    fn from_str(s: &str) -> ZillionResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(ZeroCount::ZERO);
        }
        trimmed
            .parse::<u64>()
            .map(ZeroCount)
            .map_err(|_| ZillionError::InvalidZeroCount(trimmed.to_string()))
    }
}

impl fmt::Display for ZeroCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordinal of an "-illion" (1 = million, 2 = billion, ...)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IllionIndex(pub u64);

impl IllionIndex {
    pub const ZERO: IllionIndex = IllionIndex(0);
    pub const MILLION: IllionIndex = IllionIndex(1);
    pub const DECILLION: IllionIndex = IllionIndex(10);

    #[inline]
    pub fn new(index: u64) -> Self {
        IllionIndex(index)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// million through decillion have irregular names
    #[inline]
    pub fn is_standard(self) -> bool {
        self >= Self::MILLION && self <= Self::DECILLION
    }

    /// Split off the lowest base-1000 group: (n / 1000, n % 1000)
    #[inline]
    pub fn split_thousands(self) -> (IllionIndex, GroupValue) {
        (
            IllionIndex(self.0 / 1000),
            GroupValue((self.0 % 1000) as u16),
        )
    }

    /// Base-1000 digits, most significant first
    /// Zero has no groups.
    pub fn groups(self) -> Vec<GroupValue> {
        let mut groups = Vec::new();
        let mut rest = self;
        while rest.0 > 0 {
            let (high, low) = rest.split_thousands();
            groups.push(low);
            rest = high;
        }
        groups.reverse();
        groups
    }
}

impl fmt::Display for IllionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single base-1000 digit (0..=999)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GroupValue(u16);

impl GroupValue {
    pub const ZERO: GroupValue = GroupValue(0);

    /// Checked constructor
    pub fn new(value: u64) -> ZillionResult<Self> {
        if value > MAX_GROUP_VALUE as u64 {
            return Err(ZillionError::GroupOutOfRange(value));
        }
        Ok(GroupValue(value as u16))
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// 1..=10 are named by irreducible roots (m, b, tr, ...)
    #[inline]
    pub fn is_root(self) -> bool {
        (1..=10).contains(&self.0)
    }

    #[inline]
    pub fn ones(self) -> usize {
        (self.0 % 10) as usize
    }

    #[inline]
    pub fn tens(self) -> usize {
        (self.0 / 10 % 10) as usize
    }

    #[inline]
    pub fn hundreds(self) -> usize {
        (self.0 / 100) as usize
    }
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Multiplier word in front of an illion name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Magnitude {
    /// zero count divisible by 3
    #[default]
    One,
    /// one extra zero
    Ten,
    /// two extra zeros
    OneHundred,
}

impl Magnitude {
    /// Total over the residues of 3
    #[inline]
    pub fn from_zero_count(zeros: u64) -> Self {
        match zeros % 3 {
            0 => Magnitude::One,
            1 => Magnitude::Ten,
            _ => Magnitude::OneHundred,
        }
    }

    /// Zeros contributed beyond the illion's own
    #[inline]
    pub fn extra_zeros(self) -> u64 {
        match self {
            Magnitude::One => 0,
            Magnitude::Ten => 1,
            Magnitude::OneHundred => 2,
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            Magnitude::One => "one",
            Magnitude::Ten => "ten",
            Magnitude::OneHundred => "one hundred",
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Separator placed between Latin morphemes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DashMode {
    /// "unvigintillion"
    #[default]
    Joined,
    /// "un-vigint-illion"
    Dashed,
}

impl DashMode {
    #[inline]
    pub fn separator(self) -> &'static str {
        match self {
            DashMode::Joined => "",
            DashMode::Dashed => "-",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DashMode::Joined => DashMode::Dashed,
            DashMode::Dashed => DashMode::Joined,
        }
    }
}

impl From<bool> for DashMode {
    fn from(use_dashes: bool) -> Self {
        if use_dashes {
            DashMode::Dashed
        } else {
            DashMode::Joined
        }
    }
}
