//! Keypad entry model
//!
//! Turns digit keys, backspace, clear and +1/-1 presses into a zero count that
//! never exceeds the configured maximum. An empty entry means no zeros.
//!
//! Digit keys that would make the entry longer than the maximum's own digit
//! count are ignored; digit keys that stay within that length but overshoot
//! the maximum snap the entry to the maximum.

use crate::{ZeroCount, ZillionError, ZillionResult};

/// Outcome of a single entry edit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryChange {
    /// Value changed as requested
    Updated,
    /// Value was limited to the maximum
    Clamped,
    /// Edit had no effect
    Ignored,
}

/// Zero count being typed on a keypad
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZeroEntry {
    value: ZeroCount,
    max: ZeroCount,
}

impl ZeroEntry {
    /// Create an empty entry bounded by `max`
    pub fn new(max: ZeroCount) -> Self {
        ZeroEntry {
            value: ZeroCount::ZERO,
            max,
        }
    }

    #[inline]
    pub fn value(&self) -> ZeroCount {
        self.value
    }

    #[inline]
    pub fn max(&self) -> ZeroCount {
        self.max
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value == ZeroCount::ZERO
    }

    #[inline]
    pub fn is_at_max(&self) -> bool {
        self.value >= self.max
    }

    /// Text shown in the input field ("" when empty)
    pub fn text(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            self.value.to_string()
        }
    }

    /// Append a decimal digit
    pub fn push_digit(&mut self, digit: u8) -> ZillionResult<EntryChange> {
        if digit > 9 {
            return Err(ZillionError::InvalidDigit(digit));
        }
        if self.is_at_max() {
            tracing::trace!(digit, "digit ignored at maximum");
            return Ok(EntryChange::Ignored);
        }

        let next = self
            .value
            .get()
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as u64));
        let next = match next {
            Some(v) if digit_len(v) <= digit_len(self.max.get()) => v,
            _ => {
                tracing::trace!(digit, "digit ignored, entry too long");
                return Ok(EntryChange::Ignored);
            }
        };

        Ok(self.store(ZeroCount(next)))
    }

    /// Drop the last typed digit
    pub fn backspace(&mut self) -> EntryChange {
        if self.is_empty() {
            return EntryChange::Ignored;
        }
        self.value = ZeroCount(self.value.get() / 10);
        EntryChange::Updated
    }

    pub fn clear(&mut self) -> EntryChange {
        if self.is_empty() {
            return EntryChange::Ignored;
        }
        self.value = ZeroCount::ZERO;
        EntryChange::Updated
    }

    /// Add one zero
    pub fn increment(&mut self) -> EntryChange {
        if self.is_at_max() {
            return EntryChange::Ignored;
        }
        self.value = self.value.saturating_add(1).clamp_to(self.max);
        EntryChange::Updated
    }

    /// Remove one zero
    pub fn decrement(&mut self) -> EntryChange {
        if self.is_empty() {
            return EntryChange::Ignored;
        }
        self.value = self.value.saturating_sub(1);
        EntryChange::Updated
    }

    /// Replace the entry with pasted or typed text
    /// Unparseable text empties the entry; oversized values snap to the maximum.
    pub fn set_text(&mut self, text: &str) -> EntryChange {
        match text.parse::<ZeroCount>() {
            Ok(zeros) => self.store(zeros),
            Err(err) => {
                tracing::debug!(%err, "entry text rejected, clearing");
                self.value = ZeroCount::ZERO;
                EntryChange::Updated
            }
        }
    }

    fn store(&mut self, zeros: ZeroCount) -> EntryChange {
        if zeros > self.max {
            tracing::debug!(requested = zeros.get(), max = self.max.get(), "entry clamped");
            self.value = self.max;
            EntryChange::Clamped
        } else {
            self.value = zeros;
            EntryChange::Updated
        }
    }
}

fn digit_len(mut n: u64) -> u32 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}
