//! Zillion Core - Fundamental types for large-number naming
//!
//! This crate defines the types shared by the naming engine and its callers:
//! - Counts and indices (ZeroCount, IllionIndex, GroupValue)
//! - Magnitude multipliers and separator mode
//! - Naming configuration and overflow policy
//! - The keypad entry model that turns keystrokes into a clamped count

pub mod types;
pub mod config;
pub mod entry;
pub mod error;

pub use types::*;
pub use config::*;
pub use entry::*;
pub use error::*;
