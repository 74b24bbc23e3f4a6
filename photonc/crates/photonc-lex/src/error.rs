//! Lexical error records.
//!
//! Errors are values, not control flow: in recovery mode they accumulate
//! next to the tokens they interleave with, and the core never renders
//! them. The record carries a precise byte range for squiggly underlines,
//! a kind for message selection, and an optional detail string.

use thiserror::Error;

use photonc_util::{SourceError, Span};

/// Classification of a lexical error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexicalErrorKind {
    #[error("invalid character")]
    InvalidCharacter,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("invalid number literal")]
    InvalidNumber,
    #[error("invalid unicode codepoint")]
    InvalidUnicode,
    #[error("number literal too large")]
    NumberTooLarge,
    #[error("unexpected end of file")]
    UnexpectedEof,
    #[error("invalid float literal")]
    InvalidFloat,
    #[error("radix prefix with no digits")]
    InvalidRadix,
}

/// One recorded lexical error.
#[derive(Clone, Debug, PartialEq)]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    pub location: Span,
    /// Offending text or a short clarification, when one helps.
    pub detail: Option<String>,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, location: Span) -> LexicalError {
        LexicalError {
            kind,
            location,
            detail: None,
        }
    }

    pub fn with_detail(
        kind: LexicalErrorKind,
        location: Span,
        detail: impl Into<String>,
    ) -> LexicalError {
        LexicalError {
            kind,
            location,
            detail: Some(detail.into()),
        }
    }
}

impl std::error::Error for LexicalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.kind,
            self.location.offset,
            self.location.end()
        )?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

/// Umbrella error for the tokenizer surface: either the scan failed
/// lexically, or the source manager could not produce a buffer.
#[derive(Debug, Error)]
pub enum LexError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Result alias for scan-level operations.
pub type LexResult<T> = std::result::Result<T, LexicalError>;
