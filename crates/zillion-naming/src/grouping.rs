//! Comma-grouped digit rendering
//!
//! The zeros of 10^n are grouped the way the full positional number is. The
//! leading "1" shares the first group with `n mod 3` zeros, so when that
//! remainder is zero every group of the output starts with a comma:
//!
//! ```text
//! n = 2  ->  "00"        (100)
//! n = 4  ->  "0,000"     (10,000)
//! n = 6  ->  ",000,000"  (1,000,000)
//! ```

use zillion_core::ZeroCount;

/// Largest count whose digits are written out in a `NumberReport`
pub const MAX_RENDERED_ZEROS: u64 = 3003;

const GROUP: &str = ",000";

/// Zero digits of 10^zeros with positional comma grouping
/// The caller renders the leading "1".
pub fn grouped_zeros(zeros: ZeroCount) -> String {
    let n = zeros.get();
    let lead = (n % 3) as usize;
    let full = n / 3;

    let capacity = usize::try_from(full)
        .ok()
        .and_then(|f| f.checked_mul(GROUP.len()))
        .and_then(|c| c.checked_add(lead))
        .unwrap_or(0);
    let mut out = String::with_capacity(capacity);

    out.extend(std::iter::repeat('0').take(lead));
    for _ in 0..full {
        out.push_str(GROUP);
    }
    out
}

/// Full decimal rendering of 10^zeros, e.g. "1,000,000"
pub fn render_decimal(zeros: ZeroCount) -> String {
    let mut out = String::from("1");
    out.push_str(&grouped_zeros(zeros));
    out
}
