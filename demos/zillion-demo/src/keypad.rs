//! Keypad commands for the interactive demo

use zillion_core::{DashMode, EntryChange, ZeroEntry, ZillionResult};

/// One line of user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Digits typed on the keypad
    Digits(Vec<u8>),
    Backspace,
    Clear,
    PlusOne,
    MinusOne,
    ToggleDashes,
    /// Replace the entry with free text
    Set(String),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        match line {
            "" => None,
            "b" | "/back" => Some(Command::Backspace),
            "c" | "/clear" => Some(Command::Clear),
            "+" => Some(Command::PlusOne),
            "-" => Some(Command::MinusOne),
            "d" | "/dashes" => Some(Command::ToggleDashes),
            "h" | "?" | "/help" => Some(Command::Help),
            "q" | "/quit" => Some(Command::Quit),
            _ => {
                if let Some(text) = line.strip_prefix("/set ") {
                    return Some(Command::Set(text.to_string()));
                }
                if line.bytes().all(|b| b.is_ascii_digit()) {
                    return Some(Command::Digits(line.bytes().map(|b| b - b'0').collect()));
                }
                None
            }
        }
    }
}

/// Keypad session state
pub struct Keypad {
    pub entry: ZeroEntry,
    pub dash_mode: DashMode,
}

impl Keypad {
    pub fn new(entry: ZeroEntry, dash_mode: DashMode) -> Self {
        Keypad { entry, dash_mode }
    }

    /// Apply a command; the last non-ignored change is returned
    pub fn apply(&mut self, command: &Command) -> ZillionResult<EntryChange> {
        let change = match command {
            Command::Digits(digits) => {
                let mut last = EntryChange::Ignored;
                for &d in digits {
                    match self.entry.push_digit(d)? {
                        EntryChange::Ignored => {}
                        change => last = change,
                    }
                }
                last
            }
            Command::Backspace => self.entry.backspace(),
            Command::Clear => self.entry.clear(),
            Command::PlusOne => self.entry.increment(),
            Command::MinusOne => self.entry.decrement(),
            Command::ToggleDashes => {
                self.dash_mode = self.dash_mode.toggled();
                EntryChange::Updated
            }
            Command::Set(text) => self.entry.set_text(text),
            Command::Help | Command::Quit => EntryChange::Ignored,
        };
        Ok(change)
    }
}
