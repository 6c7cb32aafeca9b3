//! Morpheme tables
//!
//! Index 0 is always the empty morpheme so tables can be indexed by digit.

/// Irregular names for illion indices 1..=10
pub const STANDARD_ILLIONS: [&str; 11] = [
    "",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Short roots used for group values 1..=10
pub const ILLION_ROOTS: [&str; 11] = [
    "", "m", "b", "tr", "quadr", "quint", "sext", "sept", "oct", "non", "dec",
];

pub const ONES_PREFIX: [&str; 10] = [
    "", "un", "duo", "tre", "quattuor", "quin", "sex", "septen", "octo", "novem",
];

pub const TENS_PREFIX: [&str; 10] = [
    "",
    "deci",
    "viginti",
    "triginta",
    "quadraginta",
    "quinquaginta",
    "sexaginta",
    "septuaginta",
    "octoginta",
    "nonaginta",
];

pub const HUNDREDS_PREFIX: [&str; 10] = [
    "",
    "centi",
    "ducenti",
    "trecenti",
    "quadringenti",
    "quingenti",
    "sescenti",
    "septingenti",
    "octingenti",
    "nongenti",
];

/// Infix marking each completed base-1000 group
pub const ILLIN: &str = "illin";

/// Suffix of every compositional name
pub const ILLION: &str = "illion";

/// Irregular names for zero counts 0..=5
pub const SMALL_NAMES: [&str; 6] = [
    "one",
    "ten",
    "one hundred",
    "one thousand",
    "ten thousand",
    "one hundred thousand",
];
