//! Core lexer implementation.
//!
//! The scanner is a direct-coded state machine: the main loop classifies
//! the lead byte through the 256-entry table and dispatches to a
//! sub-scanner, each of which consumes the maximal valid prefix and emits
//! at most one token. Sub-scanners live in sibling modules
//! ([`identifier`], [`number`], [`string`], [`operator`], [`comment`]).
//!
//! Errors never unwind through the scan. Every sub-scanner funnels
//! failures through [`Lexer::error`], which either aborts (strict mode),
//! consults the caller's veto callback, or records the error and lets the
//! scan resynchronize.

mod comment;
mod identifier;
mod number;
mod operator;
mod string;

use std::time::Duration;

use log::trace;

use photonc_util::{Arena, FileId, Span};

use crate::classify::{classify, CharClass};
use crate::cursor::Cursor;
use crate::error::{LexicalError, LexicalErrorKind, LexResult};
use crate::intern::StringInterner;
use crate::stats::LexerStats;
use crate::token::{Token, TokenKind, TokenValue};
use crate::LexerOptions;

/// Callback consulted on every recovered error; returning `false` vetoes
/// recovery and aborts the scan with that error.
pub type ErrorCallback<'a> = Box<dyn FnMut(&LexicalError) -> bool + 'a>;

/// The scanner for one source buffer.
///
/// A lexer instance is single-use and single-threaded: it walks one
/// buffer front to back, interning text into the arena it borrows.
/// Separate instances with disjoint arenas can run in parallel across
/// files.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    file: FileId,
    pub(crate) arena: &'a Arena,
    pub(crate) interner: StringInterner<'a>,
    pub(crate) options: LexerOptions,
    errors: Vec<LexicalError>,
    stats: LexerStats,
    /// Byte offset where the token being scanned begins.
    pub(crate) token_start: usize,
    on_error: Option<ErrorCallback<'a>>,
    bom_checked: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(
        source: &'a str,
        file: FileId,
        arena: &'a Arena,
        options: LexerOptions,
    ) -> Lexer<'a> {
        Lexer {
            cursor: Cursor::new(source),
            file,
            arena,
            interner: StringInterner::new(arena),
            options,
            errors: Vec::new(),
            stats: LexerStats::default(),
            token_start: 0,
            on_error: None,
            bom_checked: false,
            finished: false,
        }
    }

    /// Install a recovery veto callback (see [`ErrorCallback`]).
    pub fn with_error_callback(mut self, callback: ErrorCallback<'a>) -> Lexer<'a> {
        self.on_error = Some(callback);
        self
    }

    /// Scan and return the next token.
    ///
    /// Trivia that is not preserved by the options is skipped here;
    /// newline tokens are always emitted. At the end of input every call
    /// returns an `Eof` token located at the buffer end.
    pub fn next_token(&mut self) -> LexResult<Token<'a>> {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.source().starts_with('\u{FEFF}') {
                let _ = self.cursor.bump_char();
            }
        }

        loop {
            self.token_start = self.cursor.pos();

            if self.cursor.is_at_end() {
                return Ok(self.emit(TokenKind::Eof, TokenValue::None));
            }

            let byte = self.cursor.first();
            let scanned = match classify(byte) {
                CharClass::Newline => {
                    self.cursor.bump();
                    Some(self.emit(TokenKind::Newline, TokenValue::None))
                }
                CharClass::Whitespace => {
                    self.cursor
                        .eat_while(|b| classify(b) == CharClass::Whitespace);
                    if self.options.preserve_whitespace {
                        Some(self.emit(TokenKind::Whitespace, TokenValue::None))
                    } else {
                        None
                    }
                }
                CharClass::Digit => self.scan_number()?,
                CharClass::IdentStart => {
                    if byte == b'r' && self.cursor.peek(1) == b'"' {
                        self.scan_raw_string()?
                    } else {
                        Some(self.scan_identifier())
                    }
                }
                CharClass::Quote => {
                    if byte == b'"' {
                        self.scan_string()?
                    } else {
                        self.scan_char()?
                    }
                }
                CharClass::OperatorStart => {
                    if byte == b'/' && matches!(self.cursor.peek(1), b'/' | b'*') {
                        self.scan_comment()?
                    } else {
                        Some(self.scan_operator())
                    }
                }
                CharClass::Delimiter => {
                    self.cursor.bump();
                    Some(self.emit(delimiter_kind(byte), TokenValue::None))
                }
                CharClass::Punctuation => {
                    self.cursor.bump();
                    Some(self.emit(punctuation_kind(byte), TokenValue::None))
                }
                CharClass::Other => {
                    // Consume one full character so recovery lands on a
                    // character boundary.
                    let ch = self.cursor.bump_char();
                    let detail = ch.map(|c| format!("{:?}", c)).unwrap_or_default();
                    self.error_detail(LexicalErrorKind::InvalidCharacter, self.token_start, detail)?;
                    None
                }
            };

            if let Some(token) = scanned {
                return Ok(token);
            }
        }
    }

    /// Build a token spanning from `token_start` to the cursor and update
    /// the counters.
    pub(crate) fn emit(&mut self, kind: TokenKind, value: TokenValue<'a>) -> Token<'a> {
        let location = self.span_from(self.token_start);
        self.stats.tokens_produced += 1;
        self.stats.peak_arena_bytes = self.stats.peak_arena_bytes.max(self.arena.bytes_used());
        Token::new(kind, value, location)
    }

    /// Span from `start` to the current cursor position.
    pub(crate) fn span_from(&self, start: usize) -> Span {
        Span::new(
            self.file,
            start as u32,
            (self.cursor.pos() - start) as u32,
        )
    }

    /// Record an error spanning from `start` to the cursor.
    ///
    /// In strict mode the error is returned and the scan is over. In
    /// recovery mode the caller's veto callback (if any) is consulted,
    /// then the error is recorded and scanning continues.
    pub(crate) fn error(&mut self, kind: LexicalErrorKind, start: usize) -> LexResult<()> {
        self.record(LexicalError::new(kind, self.span_from(start)))
    }

    /// [`Lexer::error`] with an attached detail string.
    pub(crate) fn error_detail(
        &mut self,
        kind: LexicalErrorKind,
        start: usize,
        detail: impl Into<String>,
    ) -> LexResult<()> {
        self.record(LexicalError::with_detail(
            kind,
            self.span_from(start),
            detail,
        ))
    }

    fn record(&mut self, err: LexicalError) -> LexResult<()> {
        if self.options.strict_mode {
            return Err(err);
        }
        if let Some(callback) = self.on_error.as_mut() {
            if !callback(&err) {
                return Err(err);
            }
        }
        trace!("recovered from {}", err);
        self.stats.errors_recovered += 1;
        self.errors.push(err);
        Ok(())
    }

    /// Errors recovered so far.
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Finalize the run, yielding the recovered errors and the filled-in
    /// statistics.
    pub(crate) fn finish(self, duration: Duration) -> (Vec<LexicalError>, LexerStats) {
        let mut stats = self.stats;
        stats.bytes_processed = self.cursor.pos() as u64;
        stats.lines_processed = if self.cursor.pos() > 0 {
            self.cursor.newlines() + 1
        } else {
            0
        };
        stats.duration = duration;
        stats.peak_arena_bytes = stats.peak_arena_bytes.max(self.arena.bytes_used());
        (self.errors, stats)
    }
}

fn delimiter_kind(byte: u8) -> TokenKind {
    match byte {
        b'(' => TokenKind::LeftParen,
        b')' => TokenKind::RightParen,
        b'{' => TokenKind::LeftBrace,
        b'}' => TokenKind::RightBrace,
        b'[' => TokenKind::LeftBracket,
        b']' => TokenKind::RightBracket,
        _ => unreachable!("delimiter dispatch on non-delimiter byte {byte}"),
    }
}

fn punctuation_kind(byte: u8) -> TokenKind {
    match byte {
        b',' => TokenKind::Comma,
        b';' => TokenKind::Semicolon,
        b'@' => TokenKind::At,
        b'#' => TokenKind::Hash,
        b'$' => TokenKind::Dollar,
        b'?' => TokenKind::Question,
        _ => unreachable!("punctuation dispatch on non-punctuation byte {byte}"),
    }
}

/// Iterate tokens up to and excluding `Eof`; a scan abort ends the
/// iteration after yielding the error.
impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
