//! Random-access cursor over a lexed token sequence.

use crate::error::{LexicalError, LexicalErrorKind, LexResult};
use crate::token::{Token, TokenKind};

/// An immutable token sequence with a movable cursor.
///
/// The sequence always ends with exactly one `Eof` token; reads past the
/// end return that sentinel, so lookahead never needs bounds checks at
/// the call site. Errors recovered during the scan travel with the
/// stream.
///
/// # Example
///
/// ```
/// use photonc_lex::{LexEngine, LexerOptions, Tokenizer, TokenKind};
/// use photonc_util::{Arena, SourceManager};
///
/// let mut sources = SourceManager::new();
/// let arena = Arena::new();
/// let mut engine = LexEngine::new(LexerOptions::default());
/// let mut stream = engine
///     .tokenize_text(&mut sources, &arena, "demo.pt", "let x;")
///     .unwrap();
///
/// assert_eq!(stream.current().kind, TokenKind::KwLet);
/// stream.advance();
/// assert_eq!(stream.current().kind, TokenKind::Identifier);
/// ```
#[derive(Debug)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    errors: Vec<LexicalError>,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    /// Build a stream from a token vector ending in `Eof`.
    pub(crate) fn new(tokens: Vec<Token<'a>>, errors: Vec<LexicalError>) -> TokenStream<'a> {
        debug_assert!(
            matches!(tokens.last(), Some(token) if token.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        TokenStream {
            tokens,
            errors,
            pos: 0,
        }
    }

    /// The token at the cursor; `Eof` once the cursor is past the end.
    #[inline]
    pub fn current(&self) -> &Token<'a> {
        self.peek(0)
    }

    /// The token `offset` positions ahead of the cursor, clamped to the
    /// trailing `Eof`.
    pub fn peek(&self, offset: usize) -> &Token<'a> {
        let index = self.pos.saturating_add(offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Move the cursor forward one token, clamped at the end.
    pub fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.tokens.len());
    }

    /// Consume the current token if it has the expected kind.
    ///
    /// On mismatch the stream reports an `InvalidCharacter`-class record
    /// at the offending token; mapping it onto a parser diagnostic is the
    /// caller's job.
    pub fn consume(&mut self, expected: TokenKind) -> LexResult<Token<'a>> {
        let token = *self.current();
        if token.kind == expected {
            self.advance();
            Ok(token)
        } else {
            Err(LexicalError::with_detail(
                LexicalErrorKind::InvalidCharacter,
                token.location,
                format!("expected {:?}, found {:?}", expected, token.kind),
            ))
        }
    }

    /// Reposition the cursor; clamped to `[0, len]`.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    /// Rewind the cursor to the first token.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of tokens, including the trailing `Eof`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // there is always at least the Eof token
    }

    /// Whether the cursor sits on the trailing `Eof`.
    pub fn at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    /// All tokens in source order.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Errors recovered while producing this stream.
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Iterate the tokens in order, independent of the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }
}

impl<'s, 'a> IntoIterator for &'s TokenStream<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenValue;
    use photonc_util::{FileId, Span};

    fn stream_of(kinds: &[TokenKind]) -> TokenStream<'static> {
        let mut tokens: Vec<Token<'static>> = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| Token::bare(*kind, Span::new(FileId(0), i as u32, 1)))
            .collect();
        let end = tokens.len() as u32;
        tokens.push(Token::bare(TokenKind::Eof, Span::point(FileId(0), end)));
        TokenStream::new(tokens, Vec::new())
    }

    #[test]
    fn test_current_and_advance() {
        let mut stream = stream_of(&[TokenKind::KwLet, TokenKind::Identifier]);
        assert_eq!(stream.current().kind, TokenKind::KwLet);
        stream.advance();
        assert_eq!(stream.current().kind, TokenKind::Identifier);
        stream.advance();
        assert_eq!(stream.current().kind, TokenKind::Eof);
    }

    #[test]
    fn test_past_end_is_stable_eof() {
        let mut stream = stream_of(&[TokenKind::Semicolon]);
        for _ in 0..10 {
            stream.advance();
        }
        assert_eq!(stream.current().kind, TokenKind::Eof);
        assert!(stream.at_end());
        assert!(stream.position() <= stream.len());
    }

    #[test]
    fn test_peek() {
        let stream = stream_of(&[TokenKind::KwFn, TokenKind::Identifier, TokenKind::LeftParen]);
        assert_eq!(stream.peek(0).kind, TokenKind::KwFn);
        assert_eq!(stream.peek(1).kind, TokenKind::Identifier);
        assert_eq!(stream.peek(2).kind, TokenKind::LeftParen);
        assert_eq!(stream.peek(3).kind, TokenKind::Eof);
        assert_eq!(stream.peek(100).kind, TokenKind::Eof);
    }

    #[test]
    fn test_consume_match() {
        let mut stream = stream_of(&[TokenKind::KwLet]);
        let token = stream.consume(TokenKind::KwLet).unwrap();
        assert_eq!(token.kind, TokenKind::KwLet);
        assert_eq!(stream.current().kind, TokenKind::Eof);
    }

    #[test]
    fn test_consume_mismatch() {
        let mut stream = stream_of(&[TokenKind::Semicolon]);
        let err = stream.consume(TokenKind::KwLet).unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::InvalidCharacter);
        assert!(err.detail.unwrap().contains("KwLet"));
        // Cursor does not move on mismatch.
        assert_eq!(stream.current().kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_seek_and_reset() {
        let mut stream = stream_of(&[TokenKind::Plus, TokenKind::Minus, TokenKind::Star]);
        stream.seek(2);
        assert_eq!(stream.current().kind, TokenKind::Star);
        stream.seek(99);
        assert_eq!(stream.current().kind, TokenKind::Eof);
        stream.reset();
        assert_eq!(stream.current().kind, TokenKind::Plus);
    }

    #[test]
    fn test_iteration_in_order() {
        let stream = stream_of(&[TokenKind::Plus, TokenKind::Minus]);
        let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Plus, TokenKind::Minus, TokenKind::Eof]
        );
    }

    #[test]
    fn test_single_trailing_eof() {
        let stream = stream_of(&[TokenKind::Plus]);
        let eofs = stream
            .iter()
            .filter(|t| t.kind == TokenKind::Eof)
            .count();
        assert_eq!(eofs, 1);
        assert_eq!(stream.tokens().last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_values_travel_with_tokens() {
        let tokens = vec![
            Token::new(
                TokenKind::IntegerLiteral,
                TokenValue::Integer(42),
                Span::new(FileId(0), 0, 2),
            ),
            Token::bare(TokenKind::Eof, Span::point(FileId(0), 2)),
        ];
        let stream = TokenStream::new(tokens, Vec::new());
        assert_eq!(stream.current().value.as_integer(), Some(42));
    }
}
