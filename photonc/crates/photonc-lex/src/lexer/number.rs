//! Numeric literal scanning.
//!
//! Recognizes the four integer radixes, decimal floats with optional
//! exponent, and hex floats with a binary exponent. Underscores are digit
//! separators: they are consumed only when more digits follow, so a
//! trailing `_u` in `0xFF_u` starts a fresh identifier token rather than
//! being swallowed by the literal (typed-literal suffixes are not part of
//! the literal grammar).

use crate::classify::{digit_value, is_digit_in_radix, is_ident_continue};
use crate::error::{LexicalErrorKind, LexResult};
use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

/// Accumulate digit bytes (separators already allowed in) into an i64.
/// `None` means the mathematical value exceeds the 64-bit signed range.
fn parse_int(digits: &[u8], radix: u32) -> Option<i64> {
    let mut value: u64 = 0;
    for &byte in digits {
        if byte == b'_' {
            continue;
        }
        let digit = digit_value(byte)? as u64;
        value = value
            .checked_mul(radix as u64)?
            .checked_add(digit)?;
    }
    if value <= i64::MAX as u64 {
        Some(value as i64)
    } else {
        None
    }
}

impl<'a> Lexer<'a> {
    /// Scan a numeric literal; the cursor sits on the lead digit.
    pub(crate) fn scan_number(&mut self) -> LexResult<Option<Token<'a>>> {
        let start = self.token_start;
        if self.cursor.first() == b'0' {
            match self.cursor.peek(1) {
                b'x' | b'X' => {
                    self.cursor.bump();
                    self.cursor.bump();
                    return self.scan_hex(start);
                }
                b'b' | b'B' => {
                    self.cursor.bump();
                    self.cursor.bump();
                    return self.scan_radix(start, 2);
                }
                b'o' | b'O' => {
                    self.cursor.bump();
                    self.cursor.bump();
                    return self.scan_radix(start, 8);
                }
                _ => {}
            }
        }
        self.scan_decimal(start)
    }

    /// Consume digits of `radix`, treating `_` as a separator that must
    /// be followed by another digit. Returns whether any digit was seen.
    fn eat_digits(&mut self, radix: u32) -> bool {
        let mut has_digit = false;
        loop {
            let byte = self.cursor.first();
            if is_digit_in_radix(byte, radix) {
                self.cursor.bump();
                has_digit = true;
            } else if byte == b'_' {
                let mut run = 1;
                while self.cursor.peek(run) == b'_' {
                    run += 1;
                }
                if !is_digit_in_radix(self.cursor.peek(run), radix) {
                    break;
                }
                for _ in 0..run {
                    self.cursor.bump();
                }
            } else {
                break;
            }
        }
        has_digit
    }

    /// Skip whatever is left of a broken numeric run so the scan resumes
    /// at a plausible token boundary.
    fn resync_number(&mut self) {
        self.cursor.eat_while(is_ident_continue);
    }

    fn scan_radix(&mut self, start: usize, radix: u32) -> LexResult<Option<Token<'a>>> {
        if !self.eat_digits(radix) {
            self.resync_number();
            let text = self.cursor.slice_from(start).to_string();
            self.error_detail(LexicalErrorKind::InvalidRadix, start, text)?;
            return Ok(None);
        }
        // A decimal digit past the run (`0b12`) is out of range for the
        // base, not the start of a new literal.
        if self.cursor.first().is_ascii_digit() {
            self.resync_number();
            let text = self.cursor.slice_from(start).to_string();
            self.error_detail(LexicalErrorKind::InvalidNumber, start, text)?;
            return Ok(None);
        }
        self.integer_token(start, radix)
    }

    fn scan_hex(&mut self, start: usize) -> LexResult<Option<Token<'a>>> {
        let has_digit = self.eat_digits(16);
        if !has_digit {
            self.resync_number();
            let text = self.cursor.slice_from(start).to_string();
            self.error_detail(LexicalErrorKind::InvalidRadix, start, text)?;
            return Ok(None);
        }
        let next = self.cursor.first();
        let is_float = matches!(next, b'p' | b'P')
            || (next == b'.' && is_digit_in_radix(self.cursor.peek(1), 16));
        if is_float {
            self.scan_hex_float(start)
        } else {
            self.integer_token(start, 16)
        }
    }

    /// Hex float: `0x<hex>(.<hex>)?[pP][+-]?<dec>` with a base-2 exponent.
    fn scan_hex_float(&mut self, start: usize) -> LexResult<Option<Token<'a>>> {
        let int_end = self.cursor.pos();
        if self.cursor.first() == b'.' {
            self.cursor.bump();
            self.eat_digits(16);
        }
        let frac_end = self.cursor.pos();

        if !matches!(self.cursor.first(), b'p' | b'P') {
            // A hex fraction is only a float with its binary exponent.
            self.resync_number();
            let text = self.cursor.slice_from(start).to_string();
            self.error_detail(LexicalErrorKind::InvalidFloat, start, text)?;
            return Ok(None);
        }
        self.cursor.bump();
        let negative = match self.cursor.first() {
            b'+' => {
                self.cursor.bump();
                false
            }
            b'-' => {
                self.cursor.bump();
                true
            }
            _ => false,
        };
        let exp_start = self.cursor.pos();
        if !self.eat_digits(10) {
            self.resync_number();
            let text = self.cursor.slice_from(start).to_string();
            self.error_detail(LexicalErrorKind::InvalidFloat, start, text)?;
            return Ok(None);
        }

        let source = self.cursor.source();
        let int_digits = &source[start + 2..int_end];
        let frac_digits = if frac_end > int_end {
            &source[int_end + 1..frac_end]
        } else {
            ""
        };
        let exp_digits = &source[exp_start..self.cursor.pos()];

        let mut mantissa = 0.0f64;
        for byte in int_digits.bytes() {
            if byte == b'_' {
                continue;
            }
            mantissa = mantissa * 16.0 + digit_value(byte).unwrap_or(0) as f64;
        }
        let mut scale = 1.0 / 16.0;
        for byte in frac_digits.bytes() {
            if byte == b'_' {
                continue;
            }
            mantissa += digit_value(byte).unwrap_or(0) as f64 * scale;
            scale /= 16.0;
        }
        let mut exponent: i32 = 0;
        for byte in exp_digits.bytes() {
            if byte == b'_' {
                continue;
            }
            exponent = exponent
                .saturating_mul(10)
                .saturating_add((byte - b'0') as i32);
        }
        // f64 exponents cap out far below this; clamping keeps powi sane.
        let exponent = exponent.min(20_000);
        let value = mantissa * 2f64.powi(if negative { -exponent } else { exponent });

        if !value.is_finite() {
            let text = self.cursor.slice_from(start).to_string();
            self.error_detail(LexicalErrorKind::InvalidFloat, start, text)?;
            return Ok(None);
        }
        Ok(Some(self.emit(TokenKind::FloatLiteral, TokenValue::Float(value))))
    }

    fn scan_decimal(&mut self, start: usize) -> LexResult<Option<Token<'a>>> {
        self.eat_digits(10);

        let mut is_float = false;
        if self.cursor.first() == b'.' && self.cursor.peek(1).is_ascii_digit() {
            is_float = true;
            self.cursor.bump();
            self.eat_digits(10);
        }
        if matches!(self.cursor.first(), b'e' | b'E') {
            // The exponent belongs to the literal only if digits follow;
            // otherwise the `e` starts an ordinary identifier token.
            let after_sign = if matches!(self.cursor.peek(1), b'+' | b'-') {
                2
            } else {
                1
            };
            if self.cursor.peek(after_sign).is_ascii_digit() {
                is_float = true;
                for _ in 0..after_sign {
                    self.cursor.bump();
                }
                self.eat_digits(10);
            }
        }

        if is_float {
            let text = self.cursor.slice_from(start);
            let cleaned: String = text.chars().filter(|c| *c != '_').collect();
            match cleaned.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    Ok(Some(self.emit(TokenKind::FloatLiteral, TokenValue::Float(value))))
                }
                _ => {
                    let text = text.to_string();
                    self.error_detail(LexicalErrorKind::InvalidFloat, start, text)?;
                    Ok(None)
                }
            }
        } else {
            self.integer_token(start, 10)
        }
    }

    /// Emit an integer token for the run at `start`, clamping to
    /// `i64::MAX` on overflow (the error is recorded, the token still
    /// carries a value).
    fn integer_token(&mut self, start: usize, radix: u32) -> LexResult<Option<Token<'a>>> {
        let text = self.cursor.slice_from(start);
        let digits = if radix == 10 { text } else { &text[2..] };
        match parse_int(digits.as_bytes(), radix) {
            Some(value) => Ok(Some(
                self.emit(TokenKind::IntegerLiteral, TokenValue::Integer(value)),
            )),
            None => {
                let text = text.to_string();
                self.error_detail(LexicalErrorKind::NumberTooLarge, start, text)?;
                Ok(Some(
                    self.emit(TokenKind::IntegerLiteral, TokenValue::Integer(i64::MAX)),
                ))
            }
        }
    }
}
