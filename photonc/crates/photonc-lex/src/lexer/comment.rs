//! Comment scanning.
//!
//! Line comments run to the end of the line; block comments nest, each
//! `/*` requiring its matching `*/`. Comments are dropped unless
//! `preserve_comments` asks for them as tokens.

use crate::error::{LexicalErrorKind, LexResult};
use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scan `//...` or `/*...*/`; the cursor sits on the first slash and
    /// the second byte is known to be `/` or `*`.
    pub(crate) fn scan_comment(&mut self) -> LexResult<Option<Token<'a>>> {
        self.cursor.bump();
        if self.cursor.match_byte(b'/') {
            self.cursor.eat_while(|b| b != b'\n');
        } else {
            self.cursor.match_byte(b'*');
            self.scan_block_comment()?;
        }

        if self.options.preserve_comments {
            let text = self.cursor.slice_from(self.token_start);
            Ok(Some(self.emit(TokenKind::Comment, TokenValue::Text(text))))
        } else {
            Ok(None)
        }
    }

    /// Consume a block comment body after `/*`, tracking nesting depth.
    fn scan_block_comment(&mut self) -> LexResult<()> {
        let mut depth: u32 = 1;
        while depth > 0 {
            if self.cursor.is_at_end() {
                return self.error(LexicalErrorKind::UnexpectedEof, self.token_start);
            }
            if self.cursor.first() == b'/' && self.cursor.peek(1) == b'*' {
                self.cursor.bump();
                self.cursor.bump();
                depth += 1;
            } else if self.cursor.first() == b'*' && self.cursor.peek(1) == b'/' {
                self.cursor.bump();
                self.cursor.bump();
                depth -= 1;
            } else {
                self.cursor.bump();
            }
        }
        Ok(())
    }
}
