//! Fuzz inputs and invariant checks for zillion
//!
//! The fuzz targets under `fuzz/` decode raw bytes into these inputs with
//! `arbitrary` and call the checkers, which panic on any broken invariant.

use arbitrary::Arbitrary;

use zillion_core::{DashMode, NamingConfig, ZeroCount, ZeroEntry, EXTENDED_MAX_ZEROS};
use zillion_naming::{grouped_zeros, number_name, Namer};

/// Largest count whose digits are rendered while fuzzing
const MAX_FUZZ_RENDER: u64 = 100_000;

/// One naming request
#[derive(Arbitrary, Debug, Clone, Copy)]
pub struct NamingInput {
    pub zeros: u64,
    pub dashed: bool,
}

/// One keypad action
#[derive(Arbitrary, Debug, Clone)]
pub enum EntryOp {
    Digit(u8),
    Backspace,
    Clear,
    Increment,
    Decrement,
    Paste(String),
}

/// A session of keypad actions against a bounded entry
#[derive(Arbitrary, Debug, Clone)]
pub struct EntrySession {
    pub max: u64,
    pub ops: Vec<EntryOp>,
}

/// Name a count in both modes and check they agree
pub fn check_naming(input: NamingInput) {
    let zeros = ZeroCount(input.zeros);
    let dashed = number_name(zeros, DashMode::Dashed);
    let joined = number_name(zeros, DashMode::Joined);
    assert_eq!(dashed.replace('-', ""), joined, "separator drift at {}", zeros);

    if input.zeros >= 6 {
        assert!(joined.ends_with("illion"), "missing suffix at {}", zeros);
    }

    let namer = Namer::with_config(
        NamingConfig::extended().with_dash_mode(DashMode::from(input.dashed)),
    );
    let report = namer.report(zeros).expect("clamping namer never fails");
    assert!(report.zeros.get() <= EXTENDED_MAX_ZEROS);
}

/// Render grouped zeros and check digit and comma counts
pub fn check_grouping(zeros: u64) {
    let zeros = zeros % MAX_FUZZ_RENDER;
    let grouped = grouped_zeros(ZeroCount(zeros));
    assert_eq!(grouped.matches('0').count() as u64, zeros);
    assert_eq!(grouped.matches(',').count() as u64, zeros / 3);
}

/// Replay keypad actions and check the entry never leaves its bound
pub fn run_entry_session(session: &EntrySession) {
    let max = ZeroCount(session.max);
    let mut entry = ZeroEntry::new(max);
    for op in &session.ops {
        match op {
            EntryOp::Digit(d) => {
                let _ = entry.push_digit(*d);
            }
            EntryOp::Backspace => {
                entry.backspace();
            }
            EntryOp::Clear => {
                entry.clear();
            }
            EntryOp::Increment => {
                entry.increment();
            }
            EntryOp::Decrement => {
                entry.decrement();
            }
            EntryOp::Paste(text) => {
                entry.set_text(text);
            }
        }
        assert!(entry.value() <= max, "entry escaped its bound");
    }
}
