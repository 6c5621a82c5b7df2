use derive_more::Display;
use std::borrow::Cow;

use crate::settings::Settings;

/// The classification of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenKind {
    /// A run of non-whitespace characters
    #[display(fmt = "word")]
    Word,

    /// One line ending, or a run of them depending on the settings
    #[display(fmt = "newline")]
    Newline,

    /// A run of non-newline whitespace characters
    #[display(fmt = "whitespace")]
    Whitespace,
}

impl TokenKind {
    /// Apply the settings to a token's original text.
    pub fn transform<'a>(self, original: &'a str, settings: &Settings) -> Cow<'a, str> {
        match self {
            TokenKind::Word if settings.ignore_case => Cow::Owned(original.to_lowercase()),
            TokenKind::Word => Cow::Borrowed(original),
            TokenKind::Whitespace if settings.ignore_non_newline_whitespace => Cow::Borrowed(""),
            TokenKind::Whitespace if settings.ignore_non_newline_whitespace_changes => {
                Cow::Borrowed(" ")
            }
            TokenKind::Whitespace => Cow::Borrowed(original),
            TokenKind::Newline
                if settings.ignore_newline_changes || settings.ignore_blank_lines =>
            {
                Cow::Borrowed("\n")
            }
            TokenKind::Newline => Cow::Borrowed(original),
        }
    }
}

/// A classified, indivisible slice of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    original: &'a str,
    transformed: Cow<'a, str>,
}

impl<'a> Token<'a> {
    /// Create a token, computing its transformed text from the settings.
    ///
    /// `original` must not be empty; the parser never produces empty tokens.
    pub fn new(kind: TokenKind, original: &'a str, settings: &Settings) -> Self {
        debug_assert!(!original.is_empty(), "tokens cover at least one character");
        Self {
            kind,
            original,
            transformed: kind.transform(original, settings),
        }
    }

    /// Get the token's classification
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the exact source text of the token
    pub fn original(&self) -> &'a str {
        self.original
    }

    /// Get the normalized text used for comparison
    pub fn transformed(&self) -> &str {
        &self.transformed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_transform() {
        let settings = Settings::new();
        assert_eq!(TokenKind::Word.transform("SPAM", &settings), "SPAM");

        let settings = Settings::new().ignore_case(true);
        assert_eq!(TokenKind::Word.transform("SPAM", &settings), "spam");
    }

    #[test]
    fn test_whitespace_transform_precedence() {
        let settings = Settings::new().ignore_non_newline_whitespace_changes(true);
        assert_eq!(TokenKind::Whitespace.transform(" \t ", &settings), " ");

        // Ignoring whitespace entirely wins over collapsing it
        let settings = settings.ignore_non_newline_whitespace(true);
        assert_eq!(TokenKind::Whitespace.transform(" \t ", &settings), "");

        assert_eq!(TokenKind::Whitespace.transform(" \t ", &Settings::new()), " \t ");
    }

    #[test]
    fn test_newline_transform() {
        assert_eq!(TokenKind::Newline.transform("\r\n", &Settings::new()), "\r\n");

        let settings = Settings::new().ignore_newline_changes(true);
        assert_eq!(TokenKind::Newline.transform("\r\r\n", &settings), "\n");

        let settings = Settings::new().ignore_blank_lines(true);
        assert_eq!(TokenKind::Newline.transform("\r\n  \r", &settings), "\n");
    }

    #[test]
    fn test_token_accessors() {
        let settings = Settings::new().ignore_case(true);
        let token = Token::new(TokenKind::Word, "Egg", &settings);

        assert_eq!(token.kind(), TokenKind::Word);
        assert_eq!(token.original(), "Egg");
        assert_eq!(token.transformed(), "egg");
        assert_eq!(token.kind().to_string(), "word");
    }
}
