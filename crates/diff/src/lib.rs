// Flexible line diffing for superdiff
// Lines are normalized per Settings before they are aligned, and results
// always carry the original text of both sides.

mod differ;
mod line;
mod parser;
mod sequence_matcher;
mod settings;
mod token;

pub use differ::{DiffRecord, DiffStats, DiffTag, Differ};
pub use line::Line;
pub use parser::Parser;
pub use sequence_matcher::{align, MatchingBlock, Opcode, SequenceMatcher};
pub use settings::Settings;
pub use token::{Token, TokenKind};

/// Compare two texts line by line using the given settings.
///
/// Shortcut for `Differ::new(settings).compare(first, second)`.
///
/// ```rust
/// use superdiff::{compare, Settings};
///
/// let settings = Settings::new().ignore_case(true);
/// assert!(compare("spam", "SPam", settings).is_empty());
/// ```
pub fn compare<'a>(first: &'a str, second: &'a str, settings: Settings) -> Vec<DiffRecord<'a>> {
    Differ::new(settings).compare(first, second)
}
