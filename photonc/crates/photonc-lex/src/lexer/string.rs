//! String and character literal scanning.
//!
//! Escaped strings are decoded into a scratch buffer and the result is
//! copied into the arena, so the token's text value is the decoded
//! content. Raw strings (`r"..."`) skip escape processing entirely and
//! may span newlines.

use crate::error::{LexicalErrorKind, LexResult};
use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scan `"..."` with escape processing; the cursor sits on the
    /// opening quote.
    pub(crate) fn scan_string(&mut self) -> LexResult<Option<Token<'a>>> {
        let start = self.token_start;
        self.cursor.bump();

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() || self.cursor.first() == b'\n' {
                // Resync point: end of line (the newline itself is left
                // for the main loop) or end of input.
                self.error(LexicalErrorKind::UnterminatedString, start)?;
                return Ok(None);
            }
            match self.cursor.first() {
                b'"' => {
                    self.cursor.bump();
                    break;
                }
                b'\\' => {
                    self.cursor.bump();
                    if let Some(ch) = self.scan_escape()? {
                        content.push(ch);
                    }
                }
                _ => {
                    if let Some(ch) = self.cursor.bump_char() {
                        content.push(ch);
                    }
                }
            }
        }

        let text = self.arena.alloc_str(&content);
        Ok(Some(self.emit(TokenKind::StringLiteral, TokenValue::Text(text))))
    }

    /// Scan `r"..."`: no escapes, newlines allowed, unterminated only at
    /// end of input.
    pub(crate) fn scan_raw_string(&mut self) -> LexResult<Option<Token<'a>>> {
        let start = self.token_start;
        self.cursor.bump(); // r
        self.cursor.bump(); // "

        let content_start = self.cursor.pos();
        loop {
            if self.cursor.is_at_end() {
                self.error(LexicalErrorKind::UnterminatedString, start)?;
                return Ok(None);
            }
            if self.cursor.first() == b'"' {
                break;
            }
            self.cursor.bump();
        }
        let content = self.cursor.slice_from(content_start);
        self.cursor.bump(); // closing quote

        let text = self.arena.alloc_str(content);
        Ok(Some(self.emit(TokenKind::StringLiteral, TokenValue::Text(text))))
    }

    /// Scan `'c'` or `'\<escape>'`: exactly one Unicode scalar.
    pub(crate) fn scan_char(&mut self) -> LexResult<Option<Token<'a>>> {
        let start = self.token_start;
        self.cursor.bump();

        if self.cursor.is_at_end() {
            self.error(LexicalErrorKind::UnterminatedChar, start)?;
            return Ok(None);
        }

        let scalar = match self.cursor.first() {
            b'\'' => {
                self.cursor.bump();
                self.error_detail(LexicalErrorKind::UnterminatedChar, start, "empty character literal")?;
                return Ok(None);
            }
            b'\n' => {
                self.error(LexicalErrorKind::UnterminatedChar, start)?;
                return Ok(None);
            }
            b'\\' => {
                self.cursor.bump();
                self.scan_escape()?
            }
            _ => self.cursor.bump_char(),
        };

        if !self.cursor.match_byte(b'\'') {
            // Resync to the closing quote or end of line.
            self.cursor
                .eat_while(|b| b != b'\'' && b != b'\n');
            self.cursor.match_byte(b'\'');
            self.error_detail(
                LexicalErrorKind::UnterminatedChar,
                start,
                "character literal must contain exactly one character",
            )?;
            return Ok(None);
        }

        match scalar {
            Some(ch) => {
                let mut buf = [0u8; 4];
                let text = self.arena.alloc_str(ch.encode_utf8(&mut buf));
                Ok(Some(self.emit(TokenKind::CharLiteral, TokenValue::Text(text))))
            }
            // The escape error was already recorded; the lexeme is spent.
            None => Ok(None),
        }
    }

    /// Decode one escape sequence; the backslash is already consumed.
    ///
    /// `Ok(None)` means the escape was invalid and recorded (recovery
    /// mode); the caller keeps scanning the surrounding literal.
    fn scan_escape(&mut self) -> LexResult<Option<char>> {
        let escape_start = self.cursor.pos() - 1;
        let Some(selector) = self.cursor.bump_char() else {
            // Backslash at end of input; the enclosing literal reports
            // the unterminated error.
            return Ok(None);
        };

        match selector {
            'n' => Ok(Some('\n')),
            'r' => Ok(Some('\r')),
            't' => Ok(Some('\t')),
            '\\' => Ok(Some('\\')),
            '\'' => Ok(Some('\'')),
            '"' => Ok(Some('"')),
            '0' => Ok(Some('\0')),
            'x' => self.scan_hex_escape(escape_start),
            'u' => self.scan_unicode_escape(escape_start),
            other => {
                self.error_detail(
                    LexicalErrorKind::InvalidEscape,
                    escape_start,
                    format!("\\{}", other),
                )?;
                Ok(None)
            }
        }
    }

    /// `\xNN`: exactly two hex digits.
    fn scan_hex_escape(&mut self, escape_start: usize) -> LexResult<Option<char>> {
        let mut value: u32 = 0;
        for _ in 0..2 {
            let byte = self.cursor.first();
            match crate::classify::digit_value(byte) {
                Some(digit) => {
                    value = value * 16 + digit;
                    self.cursor.bump();
                }
                None => {
                    let text = self.cursor.slice_from(escape_start).to_string();
                    self.error_detail(LexicalErrorKind::InvalidEscape, escape_start, text)?;
                    return Ok(None);
                }
            }
        }
        // 0x00..=0xFF are all valid scalars.
        Ok(char::from_u32(value))
    }

    /// `\u{H+}`: one to six hex digits naming a Unicode scalar value.
    fn scan_unicode_escape(&mut self, escape_start: usize) -> LexResult<Option<char>> {
        if !self.cursor.match_byte(b'{') {
            self.error_detail(
                LexicalErrorKind::InvalidEscape,
                escape_start,
                "expected { after \\u",
            )?;
            return Ok(None);
        }

        let mut value: u32 = 0;
        let mut digits = 0usize;
        while let Some(digit) = crate::classify::digit_value(self.cursor.first()) {
            // Keep consuming even past six digits so recovery lands after
            // the escape; saturate rather than overflow.
            value = value.saturating_mul(16).saturating_add(digit);
            digits += 1;
            self.cursor.bump();
        }

        if !self.cursor.match_byte(b'}') {
            let text = self.cursor.slice_from(escape_start).to_string();
            self.error_detail(LexicalErrorKind::InvalidEscape, escape_start, text)?;
            return Ok(None);
        }
        if digits == 0 || digits > 6 {
            let text = self.cursor.slice_from(escape_start).to_string();
            self.error_detail(LexicalErrorKind::InvalidUnicode, escape_start, text)?;
            return Ok(None);
        }
        match char::from_u32(value) {
            Some(ch) => Ok(Some(ch)),
            None => {
                // Surrogate or beyond 0x10FFFF.
                let text = self.cursor.slice_from(escape_start).to_string();
                self.error_detail(LexicalErrorKind::InvalidUnicode, escape_start, text)?;
                Ok(None)
            }
        }
    }
}
