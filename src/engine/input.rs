//! Logical key events
//!
//! The engine does not care whether a key came from the physical keyboard or
//! an on-screen button; both are turned into a `Key` first.

use std::str::FromStr;

/// A key the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An ASCII letter, case-insensitive
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Parse a key token: a single ASCII letter, `Enter`, or `Backspace`
    ///
    /// Anything else yields `None` and should be ignored.
    ///
    /// # Examples
    /// ```
    /// use brainrot_wordle::engine::Key;
    ///
    /// assert_eq!(Key::parse("q"), Some(Key::Letter('q')));
    /// assert_eq!(Key::parse("Enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("Shift"), None);
    /// assert_eq!(Key::parse("7"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Letter key for an ASCII alphabetic character
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter(c))
        } else {
            None
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unrecognized key: {s}"))
    }
}
