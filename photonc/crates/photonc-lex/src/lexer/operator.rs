//! Operator scanning with maximal munch.
//!
//! Ties always break toward the longest operator at the cursor, so `<<=`
//! wins over `<<` and `<`, and `<=>` wins over `<=`.

use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scan one operator or the single-byte `.`/`:` punctuation; comment
    /// starts are routed to the comment scanner before this is called.
    pub(crate) fn scan_operator(&mut self) -> Token<'a> {
        let byte = self.cursor.first();
        self.cursor.bump();

        let kind = match byte {
            b'+' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::PlusAssign
                } else {
                    TokenKind::Plus
                }
            }
            b'-' => {
                if self.cursor.match_byte(b'>') {
                    TokenKind::Arrow
                } else if self.cursor.match_byte(b'=') {
                    TokenKind::MinusAssign
                } else {
                    TokenKind::Minus
                }
            }
            b'*' => {
                if self.cursor.match_byte(b'*') {
                    TokenKind::Power
                } else if self.cursor.match_byte(b'=') {
                    TokenKind::StarAssign
                } else {
                    TokenKind::Star
                }
            }
            b'/' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::SlashAssign
                } else {
                    TokenKind::Slash
                }
            }
            b'%' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::PercentAssign
                } else {
                    TokenKind::Percent
                }
            }
            b'=' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::Equal
                } else if self.cursor.match_byte(b'>') {
                    TokenKind::FatArrow
                } else {
                    TokenKind::Assign
                }
            }
            b'!' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::NotEqual
                } else {
                    TokenKind::Not
                }
            }
            b'<' => {
                if self.cursor.match_byte(b'<') {
                    if self.cursor.match_byte(b'=') {
                        TokenKind::LeftShiftAssign
                    } else {
                        TokenKind::ShiftLeft
                    }
                } else if self.cursor.match_byte(b'=') {
                    if self.cursor.match_byte(b'>') {
                        TokenKind::Spaceship
                    } else {
                        TokenKind::LessEqual
                    }
                } else {
                    TokenKind::Less
                }
            }
            b'>' => {
                if self.cursor.match_byte(b'>') {
                    if self.cursor.match_byte(b'=') {
                        TokenKind::RightShiftAssign
                    } else {
                        TokenKind::ShiftRight
                    }
                } else if self.cursor.match_byte(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            b'&' => {
                if self.cursor.match_byte(b'&') {
                    TokenKind::LogicalAnd
                } else if self.cursor.match_byte(b'=') {
                    TokenKind::AmpAssign
                } else {
                    TokenKind::Ampersand
                }
            }
            b'|' => {
                if self.cursor.match_byte(b'|') {
                    TokenKind::LogicalOr
                } else if self.cursor.match_byte(b'=') {
                    TokenKind::PipeAssign
                } else {
                    TokenKind::Pipe
                }
            }
            b'^' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::CaretAssign
                } else {
                    TokenKind::Caret
                }
            }
            b'~' => TokenKind::Tilde,
            b':' => {
                if self.cursor.match_byte(b':') {
                    TokenKind::PathSep
                } else {
                    TokenKind::Colon
                }
            }
            b'.' => {
                if self.cursor.match_byte(b'.') {
                    if self.cursor.match_byte(b'=') {
                        TokenKind::RangeInclusive
                    } else if self.cursor.match_byte(b'.') {
                        TokenKind::Ellipsis
                    } else {
                        TokenKind::Range
                    }
                } else {
                    TokenKind::Dot
                }
            }
            _ => unreachable!("operator dispatch on non-operator byte {byte}"),
        };

        self.emit(kind, TokenValue::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LexerOptions;
    use photonc_util::{Arena, FileId};

    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        let arena = Arena::new();
        let lexer = Lexer::new(source, FileId(0), &arena, LexerOptions::default());
        lexer.map(|r| r.unwrap().kind).collect()
    }

    fn lex_single(source: &str) -> TokenKind {
        let kinds = lex_kinds(source);
        assert_eq!(kinds.len(), 1, "{:?} should be one token", source);
        kinds[0]
    }

    #[test]
    fn test_single_byte_operators() {
        assert_eq!(lex_single("+"), TokenKind::Plus);
        assert_eq!(lex_single("-"), TokenKind::Minus);
        assert_eq!(lex_single("*"), TokenKind::Star);
        assert_eq!(lex_single("/"), TokenKind::Slash);
        assert_eq!(lex_single("%"), TokenKind::Percent);
        assert_eq!(lex_single("="), TokenKind::Assign);
        assert_eq!(lex_single("!"), TokenKind::Not);
        assert_eq!(lex_single("<"), TokenKind::Less);
        assert_eq!(lex_single(">"), TokenKind::Greater);
        assert_eq!(lex_single("&"), TokenKind::Ampersand);
        assert_eq!(lex_single("|"), TokenKind::Pipe);
        assert_eq!(lex_single("^"), TokenKind::Caret);
        assert_eq!(lex_single("~"), TokenKind::Tilde);
        assert_eq!(lex_single(":"), TokenKind::Colon);
        assert_eq!(lex_single("."), TokenKind::Dot);
    }

    #[test]
    fn test_two_byte_operators() {
        assert_eq!(lex_single("**"), TokenKind::Power);
        assert_eq!(lex_single("=="), TokenKind::Equal);
        assert_eq!(lex_single("!="), TokenKind::NotEqual);
        assert_eq!(lex_single("<="), TokenKind::LessEqual);
        assert_eq!(lex_single(">="), TokenKind::GreaterEqual);
        assert_eq!(lex_single("&&"), TokenKind::LogicalAnd);
        assert_eq!(lex_single("||"), TokenKind::LogicalOr);
        assert_eq!(lex_single("<<"), TokenKind::ShiftLeft);
        assert_eq!(lex_single(">>"), TokenKind::ShiftRight);
        assert_eq!(lex_single("->"), TokenKind::Arrow);
        assert_eq!(lex_single("=>"), TokenKind::FatArrow);
        assert_eq!(lex_single("::"), TokenKind::PathSep);
        assert_eq!(lex_single(".."), TokenKind::Range);
        assert_eq!(lex_single("+="), TokenKind::PlusAssign);
        assert_eq!(lex_single("-="), TokenKind::MinusAssign);
        assert_eq!(lex_single("*="), TokenKind::StarAssign);
        assert_eq!(lex_single("/="), TokenKind::SlashAssign);
        assert_eq!(lex_single("%="), TokenKind::PercentAssign);
        assert_eq!(lex_single("&="), TokenKind::AmpAssign);
        assert_eq!(lex_single("|="), TokenKind::PipeAssign);
        assert_eq!(lex_single("^="), TokenKind::CaretAssign);
    }

    #[test]
    fn test_three_byte_operators() {
        assert_eq!(lex_single("<=>"), TokenKind::Spaceship);
        assert_eq!(lex_single("<<="), TokenKind::LeftShiftAssign);
        assert_eq!(lex_single(">>="), TokenKind::RightShiftAssign);
        assert_eq!(lex_single("..."), TokenKind::Ellipsis);
        assert_eq!(lex_single("..="), TokenKind::RangeInclusive);
    }

    #[test]
    fn test_maximal_munch_sequences() {
        // `<<=` must lex as one token, never `<` `<=` or `<<` `=`.
        assert_eq!(lex_kinds("<<="), vec![TokenKind::LeftShiftAssign]);
        assert_eq!(lex_kinds("< <="), vec![TokenKind::Less, TokenKind::LessEqual]);
        assert_eq!(
            lex_kinds("**="),
            vec![TokenKind::Power, TokenKind::Assign]
        );
        assert_eq!(
            lex_kinds("...."),
            vec![TokenKind::Ellipsis, TokenKind::Dot]
        );
        assert_eq!(
            lex_kinds("=>>"),
            vec![TokenKind::FatArrow, TokenKind::Greater]
        );
        assert_eq!(
            lex_kinds("<=>="),
            vec![TokenKind::Spaceship, TokenKind::Assign]
        );
    }

    #[test]
    fn test_operator_spans() {
        let arena = Arena::new();
        let mut lexer = Lexer::new("a <<= b", FileId(0), &arena, LexerOptions::default());
        lexer.next_token().unwrap();
        let op = lexer.next_token().unwrap();
        assert_eq!(op.kind, TokenKind::LeftShiftAssign);
        assert_eq!(op.location.offset, 2);
        assert_eq!(op.location.len, 3);
    }
}
