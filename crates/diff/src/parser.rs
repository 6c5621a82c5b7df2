use std::mem;

use crate::line::Line;
use crate::settings::Settings;
use crate::token::{Token, TokenKind};

/// Splits text into [`Line`]s, normalizing each token according to the
/// settings it was created with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    settings: Settings,
}

impl Parser {
    /// Create a parser using the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the settings used by this parser
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parse `text` into lines.
    ///
    /// The original text of the returned lines, concatenated in order, is
    /// always exactly `text`. Empty input yields no lines.
    pub fn parse<'a>(&self, text: &'a str) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let mut tokens = Vec::new();
        let mut line_start = 0;
        let mut pos = 0;

        while pos < text.len() {
            let (kind, len) = self.next_unit(&text[pos..]);
            let end = pos + len;
            tokens.push(Token::new(kind, &text[pos..end], &self.settings));
            pos = end;

            if kind == TokenKind::Newline {
                lines.push(Line::new(
                    &text[line_start..pos],
                    mem::take(&mut tokens),
                    &self.settings,
                ));
                line_start = pos;
            }
        }

        if !tokens.is_empty() {
            lines.push(Line::new(&text[line_start..], tokens, &self.settings));
        }

        lines
    }

    /// Classify the unit at the start of `rest` and return its byte length.
    ///
    /// Newlines are tried before other whitespace since line endings are
    /// whitespace too.
    fn next_unit(&self, rest: &str) -> (TokenKind, usize) {
        if let Some(len) = self.newline_len(rest) {
            return (TokenKind::Newline, len);
        }

        let len = run_len(rest, is_inline_whitespace);
        if len > 0 {
            return (TokenKind::Whitespace, len);
        }

        (TokenKind::Word, run_len(rest, |c| !c.is_whitespace()))
    }

    fn newline_len(&self, rest: &str) -> Option<usize> {
        let mut len = line_ending_len(rest)?;

        if self.settings.ignore_newline_changes {
            len = run_len(rest, is_newline);
        }

        if self.settings.ignore_blank_lines {
            len += blank_tail_len(&rest[len..]);
        }

        Some(len)
    }
}

fn is_newline(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn is_inline_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_newline(c)
}

/// Length of a single `\r\n`, `\r` or `\n` at the start of `rest`
fn line_ending_len(rest: &str) -> Option<usize> {
    if rest.starts_with("\r\n") {
        Some(2)
    } else if rest.starts_with(is_newline) {
        Some(1)
    } else {
        None
    }
}

/// Length of the longest prefix of `rest` whose chars all satisfy `pred`
fn run_len(rest: &str, pred: impl Fn(char) -> bool) -> usize {
    rest.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(rest.len(), |(i, _)| i)
}

/// Length of the blank lines following a line ending.
///
/// Covers whitespace and newlines up to the last newline before the next
/// word, or everything when only whitespace is left.
fn blank_tail_len(tail: &str) -> usize {
    let mut absorbed = 0;
    for (i, c) in tail.char_indices() {
        if is_newline(c) {
            absorbed = i + c.len_utf8();
        } else if !is_inline_whitespace(c) {
            return absorbed;
        }
    }
    tail.len()
}
