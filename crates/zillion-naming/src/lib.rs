//! Zillion Naming Engine - names for powers of ten
//!
//! Given the number of zeros after a leading "1", this crate produces the
//! English name of the number:
//! - Irregular small names (one, ten, ... one hundred thousand)
//! - Standard illions (million through decillion)
//! - Compositional Latin illions (undecillion, centillion, millinillion, ...)
//! - Comma-grouped digit rendering of the same number

pub mod tables;
pub mod group;
pub mod illion;
pub mod number;
pub mod grouping;
pub mod landmark;
pub mod namer;

pub use group::*;
pub use illion::*;
pub use number::*;
pub use grouping::*;
pub use landmark::*;
pub use namer::*;

use zillion_core::{DashMode, ZeroCount};

/// Name of 10^zero_count, e.g. 100 -> "ten duotrigintillion"
pub fn name_for_zero_count(zero_count: u64, use_dashes: bool) -> String {
    number_name(ZeroCount::new(zero_count), DashMode::from(use_dashes))
}

/// Zero digits of 10^zero_count with positional comma grouping
pub fn format_zeros_with_commas(zero_count: u64) -> String {
    grouped_zeros(ZeroCount::new(zero_count))
}
