//! photonc-lex - Lexical Analyzer for the Photon Language
//!
//! Transforms a stream of source bytes into a typed, position-annotated
//! token sequence. The crate is built around three cooperating pieces:
//!
//! - the scanner ([`Lexer`]): a direct-coded state machine that
//!   classifies bytes through a 256-entry table, recognizes the full
//!   literal grammar (four integer radixes, decimal and hex floats,
//!   escaped and raw strings, char literals), applies maximal munch to
//!   operators, and recovers from lexical errors without losing the rest
//!   of the file;
//! - the keyword recognizer ([`keyword`]): a compile-time perfect hash
//!   over the fixed reserved-word set;
//! - the token stream ([`TokenStream`]): a random-access cursor with
//!   lookahead and expectation-based consumption for the parser.
//!
//! Identifier text and decoded literal bodies are interned into an
//! [`Arena`] owned by the caller, so tokens are small `Copy` values whose
//! text payloads are borrowed slices. The stream must be consumed before
//! the arena is reset; the `'a` lifetime enforces that.
//!
//! # Example
//!
//! ```
//! use photonc_lex::{LexEngine, LexerOptions, TokenKind, Tokenizer};
//! use photonc_util::{Arena, SourceManager};
//!
//! let mut sources = SourceManager::new();
//! let arena = Arena::new();
//! let mut engine = LexEngine::new(LexerOptions::default());
//!
//! let stream = engine
//!     .tokenize_text(&mut sources, &arena, "main.pt", "fn main() {}")
//!     .unwrap();
//! let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::KwFn,
//!         TokenKind::Identifier,
//!         TokenKind::LeftParen,
//!         TokenKind::RightParen,
//!         TokenKind::LeftBrace,
//!         TokenKind::RightBrace,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! # Error policy
//!
//! In strict mode (the default) the first lexical error aborts the scan
//! and becomes the top-level result; tokens produced so far are
//! discarded. In recovery mode the scanner records the error, advances
//! to a plausible token boundary, and keeps going; the resulting stream
//! carries its error list alongside the tokens. Arena exhaustion is
//! always fatal.

pub mod classify;
pub mod cursor;
pub mod error;
pub mod intern;
pub mod keyword;
pub mod lexer;
pub mod stats;
pub mod stream;
pub mod token;

mod edge_cases;

use std::time::Instant;

use log::debug;

use photonc_util::{Arena, FileId, SourceManager};

pub use error::{LexError, LexicalError, LexicalErrorKind, LexResult};
pub use keyword::keyword_kind;
pub use lexer::{ErrorCallback, Lexer};
pub use stats::LexerStats;
pub use stream::TokenStream;
pub use token::{Token, TokenKind, TokenValue};

/// Tuning knobs for one tokenization run.
#[derive(Clone, Copy, Debug)]
pub struct LexerOptions {
    /// Emit `Whitespace` tokens for runs of spaces and tabs.
    pub preserve_whitespace: bool,
    /// Emit `Comment` tokens instead of discarding comments.
    pub preserve_comments: bool,
    /// Advisory flag for drivers: deliver tokens through
    /// [`Tokenizer::tokenize_streaming`] instead of building a stream.
    pub enable_streaming: bool,
    /// Preferred arena block size in bytes.
    pub buffer_size: usize,
    /// Abort on the first error instead of recovering.
    pub strict_mode: bool,
    /// Enable keyword-table lookup and identifier interning.
    pub optimize_identifiers: bool,
}

impl Default for LexerOptions {
    fn default() -> LexerOptions {
        LexerOptions {
            preserve_whitespace: false,
            preserve_comments: false,
            enable_streaming: false,
            buffer_size: 64 * 1024,
            strict_mode: true,
            optimize_identifiers: true,
        }
    }
}

/// The tokenization capability the rest of the compiler programs
/// against.
///
/// One concrete engine ([`LexEngine`]) implements it; the preset
/// factories ([`standard`], [`ide`], [`testing`]) hand out boxed trait
/// objects so drivers do not depend on the engine type.
pub trait Tokenizer {
    /// Tokenize a registered file into a stream backed by `arena`.
    fn tokenize_file<'a>(
        &mut self,
        sources: &'a SourceManager,
        arena: &'a Arena,
        file: FileId,
    ) -> Result<TokenStream<'a>, LexError>;

    /// Register `text` under `name` and tokenize it.
    fn tokenize_text<'a>(
        &mut self,
        sources: &'a mut SourceManager,
        arena: &'a Arena,
        name: &str,
        text: &str,
    ) -> Result<TokenStream<'a>, LexError>;

    /// Deliver tokens one at a time to `sink`; no stream is built and
    /// peak memory stays bounded by the arena block size plus interned
    /// text. `sink` returning `false` cancels the scan after the current
    /// token.
    fn tokenize_streaming(
        &mut self,
        sources: &SourceManager,
        file: FileId,
        sink: &mut dyn FnMut(&Token<'_>) -> bool,
    ) -> Result<(), LexError>;

    /// Statistics of the most recent completed run.
    fn statistics(&self) -> LexerStats;
}

/// The concrete tokenizer.
pub struct LexEngine {
    options: LexerOptions,
    stats: LexerStats,
}

impl LexEngine {
    pub fn new(options: LexerOptions) -> LexEngine {
        LexEngine {
            options,
            stats: LexerStats::default(),
        }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    fn run<'a>(
        &mut self,
        source: &'a str,
        file: FileId,
        arena: &'a Arena,
    ) -> Result<TokenStream<'a>, LexError> {
        let started = Instant::now();
        let mut lexer = Lexer::new(source, file, arena, self.options);

        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let at_end = token.kind == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                break;
            }
        }

        let (errors, stats) = lexer.finish(started.elapsed());
        debug!(
            "tokenized {:?}: {} tokens, {} bytes, {} errors in {:?}",
            file, stats.tokens_produced, stats.bytes_processed, stats.errors_recovered, stats.duration
        );
        self.stats = stats;
        Ok(TokenStream::new(tokens, errors))
    }
}

impl Tokenizer for LexEngine {
    fn tokenize_file<'a>(
        &mut self,
        sources: &'a SourceManager,
        arena: &'a Arena,
        file: FileId,
    ) -> Result<TokenStream<'a>, LexError> {
        let source = sources.content(file)?;
        self.run(source, file, arena)
    }

    fn tokenize_text<'a>(
        &mut self,
        sources: &'a mut SourceManager,
        arena: &'a Arena,
        name: &str,
        text: &str,
    ) -> Result<TokenStream<'a>, LexError> {
        let file = sources.add_virtual(name, text);
        let sources: &'a SourceManager = sources;
        let source = sources.content(file)?;
        self.run(source, file, arena)
    }

    fn tokenize_streaming(
        &mut self,
        sources: &SourceManager,
        file: FileId,
        sink: &mut dyn FnMut(&Token<'_>) -> bool,
    ) -> Result<(), LexError> {
        let source = sources.content(file)?;
        let arena = Arena::with_block_size(self.options.buffer_size);
        let started = Instant::now();
        let mut lexer = Lexer::new(source, file, &arena, self.options);

        loop {
            let token = lexer.next_token()?;
            let at_end = token.kind == TokenKind::Eof;
            // The sink's verdict applies after the current token is
            // delivered; cancellation is clean, not an error.
            let keep_going = sink(&token);
            if at_end || !keep_going {
                break;
            }
        }

        let (_, stats) = lexer.finish(started.elapsed());
        self.stats = stats;
        Ok(())
    }

    fn statistics(&self) -> LexerStats {
        self.stats
    }
}

/// Default preset: strict mode, trivia discarded.
pub fn standard() -> Box<dyn Tokenizer> {
    Box::new(LexEngine::new(LexerOptions::default()))
}

/// IDE preset: keeps whitespace and comments, recovers from errors so a
/// broken buffer still produces tokens for highlighting.
pub fn ide() -> Box<dyn Tokenizer> {
    Box::new(LexEngine::new(LexerOptions {
        preserve_whitespace: true,
        preserve_comments: true,
        strict_mode: false,
        ..Default::default()
    }))
}

/// Test preset: recovery mode with default trivia handling, so
/// expectation tests can assert on recorded errors.
pub fn testing() -> Box<dyn Tokenizer> {
    Box::new(LexEngine::new(LexerOptions {
        strict_mode: false,
        ..Default::default()
    }))
}
