use derive_more::Display;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line::Line;
use crate::parser::Parser;
use crate::sequence_matcher::align;
use crate::settings::Settings;

/// How a pair of lines (or an opcode's ranges) relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffTag {
    /// Both sides are equal once normalized
    #[display(fmt = "equal")]
    Equal,

    /// The first side was replaced by the second
    #[display(fmt = "replace")]
    Replace,

    /// Only the first side has content
    #[display(fmt = "delete")]
    Delete,

    /// Only the second side has content
    #[display(fmt = "insert")]
    Insert,
}

/// One row of a comparison: a line from each text, in its original form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DiffRecord<'a> {
    /// How the two lines relate
    pub tag: DiffTag,

    /// The original text from the first input, empty when absent
    pub left: &'a str,

    /// The original text from the second input, empty when absent
    pub right: &'a str,
}

impl<'a> DiffRecord<'a> {
    /// Create a new record
    pub fn new(tag: DiffTag, left: &'a str, right: &'a str) -> Self {
        Self { tag, left, right }
    }

    /// Check if this record is anything other than equal
    pub fn is_change(&self) -> bool {
        self.tag != DiffTag::Equal
    }
}

/// Record counts of a comparison, by tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub equal: usize,
    pub replaced: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl DiffStats {
    /// Count the records of a comparison
    pub fn from_records(records: &[DiffRecord<'_>]) -> Self {
        let mut stats = Self::default();
        for record in records {
            match record.tag {
                DiffTag::Equal => stats.equal += 1,
                DiffTag::Replace => stats.replaced += 1,
                DiffTag::Delete => stats.deleted += 1,
                DiffTag::Insert => stats.inserted += 1,
            }
        }
        stats
    }

    /// Check if any record is a change
    pub fn has_changes(&self) -> bool {
        self.replaced + self.deleted + self.inserted > 0
    }

    /// Total number of records
    pub fn total(&self) -> usize {
        self.equal + self.replaced + self.deleted + self.inserted
    }
}

/// Flexibly compares two pieces of text line by line.
///
/// A `Differ` holds no state besides its settings, so it can be reused for
/// any number of comparisons and shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Differ {
    parser: Parser,
}

impl Differ {
    /// Create a differ using the given settings
    pub fn new(settings: Settings) -> Self {
        Self {
            parser: Parser::new(settings),
        }
    }

    /// Get the settings used by this differ
    pub fn settings(&self) -> &Settings {
        self.parser.settings()
    }

    /// Get the parser used to split texts into lines
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Parse text into lines with this differ's settings
    pub fn parse<'a>(&self, text: &'a str) -> Vec<Line<'a>> {
        self.parser.parse(text)
    }

    /// Compare `first` and `second` line by line.
    ///
    /// Returns one record per aligned pair of lines, carrying the original
    /// text of each side. When an opcode covers more lines on one side than
    /// on the other, the shorter side is padded with empty strings.
    ///
    /// If the texts are equal once normalized, the result is empty even when
    /// their original text differs.
    pub fn compare<'a>(&self, first: &'a str, second: &'a str) -> Vec<DiffRecord<'a>> {
        let first_lines = self.parser.parse(first);
        let second_lines = self.parser.parse(second);
        let opcodes = align(&first_lines, &second_lines);

        debug!(
            "compared {} lines against {} lines: {} opcodes",
            first_lines.len(),
            second_lines.len(),
            opcodes.len()
        );

        if opcodes.iter().all(|opcode| opcode.tag == DiffTag::Equal) {
            debug!("texts are equal once normalized");
            return Vec::new();
        }

        let mut records = Vec::new();
        for opcode in &opcodes {
            let left = &first_lines[opcode.first.clone()];
            let right = &second_lines[opcode.second.clone()];

            for row in 0..left.len().max(right.len()) {
                records.push(DiffRecord::new(
                    opcode.tag,
                    left.get(row).map_or("", Line::original_text),
                    right.get(row).map_or("", Line::original_text),
                ));
            }
        }

        records
    }
}
