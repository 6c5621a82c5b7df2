use std::hash::{Hash, Hasher};

use crate::settings::Settings;
use crate::token::{Token, TokenKind};

/// A run of tokens ending with a newline token, or the unterminated run at the
/// end of the input.
///
/// Two lines are equal when their transformed text is equal; the original
/// text plays no part in comparisons.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    /// The exact input slice covered by the tokens
    original: &'a str,

    /// The tokens making up the line, in order
    tokens: Vec<Token<'a>>,

    /// The normalized text used for comparison
    transformed: String,
}

impl<'a> Line<'a> {
    /// Create a line from its tokens.
    ///
    /// `original` is the input slice the tokens were scanned from, so the
    /// concatenation of the tokens' original text must equal it.
    pub fn new(original: &'a str, tokens: Vec<Token<'a>>, settings: &Settings) -> Self {
        debug_assert_eq!(
            tokens.iter().map(Token::original).collect::<String>(),
            original
        );

        let joined: String = tokens.iter().map(Token::transformed).collect();
        let mut stripped = joined.as_str();
        if settings.ignore_leading_whitespace {
            stripped = stripped.trim_start();
        }
        if settings.ignore_trailing_whitespace {
            stripped = stripped.trim_end();
        }
        let transformed = if stripped.len() == joined.len() {
            joined
        } else {
            stripped.to_owned()
        };

        Self {
            original,
            tokens,
            transformed,
        }
    }

    /// Get the original text of the line, line ending included
    pub fn original_text(&self) -> &'a str {
        self.original
    }

    /// Get the normalized text of the line
    pub fn transformed_text(&self) -> &str {
        &self.transformed
    }

    /// Get the tokens of the line
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Check if the line ends with a newline token
    pub fn is_terminated(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|token| token.kind() == TokenKind::Newline)
    }

    /// Check if the line holds no word tokens
    pub fn is_blank(&self) -> bool {
        self.tokens.iter().all(|token| token.kind() != TokenKind::Word)
    }
}

impl PartialEq for Line<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.transformed == other.transformed
    }
}

impl Eq for Line<'_> {}

impl Hash for Line<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.transformed.hash(state);
    }
}
