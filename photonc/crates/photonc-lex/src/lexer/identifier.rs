//! Identifier and keyword scanning.

use crate::classify::is_ident_continue;
use crate::keyword::keyword_kind;
use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scan `[A-Za-z_][A-Za-z0-9_]*` starting at the current byte.
    ///
    /// With `optimize_identifiers` set, the text is checked against the
    /// keyword table first (reserved words carry no text payload;
    /// `true`/`false` become boolean literals) and identifier text is
    /// interned so equal identifiers share one arena slice. Without it,
    /// every identifier borrows straight from the source buffer.
    pub(crate) fn scan_identifier(&mut self) -> Token<'a> {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start);

        if !self.options.optimize_identifiers {
            return self.emit(TokenKind::Identifier, TokenValue::Text(text));
        }

        match keyword_kind(text) {
            Some(TokenKind::BoolLiteral) => {
                let value = TokenValue::Bool(text == "true");
                self.emit(TokenKind::BoolLiteral, value)
            }
            Some(kind) => self.emit(kind, TokenValue::None),
            None => {
                let interned = self.interner.intern(text);
                self.emit(TokenKind::Identifier, TokenValue::Text(interned))
            }
        }
    }
}
