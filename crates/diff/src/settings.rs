#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flexibility options controlling how lines are normalized before they are
/// compared.
///
/// Terms used by the options:
///
/// - *non-newline whitespace*: tabs, spaces and any other whitespace that is
///   not a line ending
/// - *newline*: any of `\n`, `\r` or `\r\n`
/// - *blank line*: a line consisting only of whitespace
///
/// Every combination of options is valid. Settings are plain data, so a
/// single value can be shared freely between parsers and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Ignore case differences between the two texts.
    pub ignore_case: bool,

    /// Completely ignore differences in non-newline whitespace.
    pub ignore_non_newline_whitespace: bool,

    /// Treat any run of non-newline whitespace as a single space, so one
    /// space, two spaces and a tab all compare equal.
    pub ignore_non_newline_whitespace_changes: bool,

    /// Treat any run of newline characters as a single `\n`, so `\r`,
    /// `\r\r\n` and `\n\n` all compare equal.
    pub ignore_newline_changes: bool,

    /// Ignore lines consisting only of whitespace.
    pub ignore_blank_lines: bool,

    /// Ignore whitespace at the beginning of lines. Blank lines compare as
    /// the empty string.
    pub ignore_leading_whitespace: bool,

    /// Ignore whitespace at the end of lines, including the line ending.
    /// Blank lines compare as the empty string.
    pub ignore_trailing_whitespace: bool,
}

impl Settings {
    /// Create settings with every option turned off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether case differences are ignored
    pub fn ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = value;
        self
    }

    /// Set whether non-newline whitespace is ignored entirely
    pub fn ignore_non_newline_whitespace(mut self, value: bool) -> Self {
        self.ignore_non_newline_whitespace = value;
        self
    }

    /// Set whether runs of non-newline whitespace compare equal
    pub fn ignore_non_newline_whitespace_changes(mut self, value: bool) -> Self {
        self.ignore_non_newline_whitespace_changes = value;
        self
    }

    /// Set whether runs of newline characters compare equal
    pub fn ignore_newline_changes(mut self, value: bool) -> Self {
        self.ignore_newline_changes = value;
        self
    }

    /// Set whether whitespace-only lines are ignored
    pub fn ignore_blank_lines(mut self, value: bool) -> Self {
        self.ignore_blank_lines = value;
        self
    }

    /// Set whether leading whitespace is ignored
    pub fn ignore_leading_whitespace(mut self, value: bool) -> Self {
        self.ignore_leading_whitespace = value;
        self
    }

    /// Set whether trailing whitespace is ignored
    pub fn ignore_trailing_whitespace(mut self, value: bool) -> Self {
        self.ignore_trailing_whitespace = value;
        self
    }

    /// Whether any option is turned on
    pub fn is_flexible(&self) -> bool {
        *self != Self::default()
    }
}
