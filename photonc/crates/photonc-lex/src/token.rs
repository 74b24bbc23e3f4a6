//! Token model: kinds, values, and the token record.
//!
//! Token kinds are partitioned into contiguous numeric ranges so that the
//! category predicates compile down to integer range checks:
//!
//! | Range | Category |
//! |---|---|
//! | [0, 10) | special (end of file, trivia) |
//! | [10, 20) | literals |
//! | [20, 30) | identifiers |
//! | [30, 100) | keywords |
//! | [100, 200) | operators |
//! | [200, 210) | delimiters |
//! | [210, 220) | punctuation |

use photonc_util::Span;

/// The kind of a lexed token.
///
/// Discriminants are explicit at each range boundary; variants inside a
/// range rely on sequential assignment. Adding a variant past the end of
/// its range is a bug the category tests catch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum TokenKind {
    // Special [0, 10)
    Eof = 0,
    Newline,
    Whitespace,
    Comment,

    // Literals [10, 20)
    IntegerLiteral = 10,
    FloatLiteral,
    StringLiteral,
    CharLiteral,
    BoolLiteral,

    // Identifiers [20, 30)
    Identifier = 20,

    // Keywords [30, 100)
    KwAs = 30,
    KwBreak,
    KwConst,
    KwContinue,
    KwCrate,
    KwElse,
    KwEnum,
    KwExtern,
    KwFn,
    KwFor,
    KwIf,
    KwImpl,
    KwIn,
    KwLet,
    KwLoop,
    KwMatch,
    KwMod,
    KwMut,
    KwPub,
    KwReturn,
    KwSelf,
    KwStatic,
    KwStruct,
    KwSuper,
    KwTrait,
    KwType,
    KwUnsafe,
    KwUse,
    KwWhere,
    KwWhile,

    // Operators [100, 200)
    Plus = 100,
    Minus,
    Star,
    Slash,
    Percent,
    Power,
    Assign,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Spaceship,
    Not,
    LogicalAnd,
    LogicalOr,
    Ampersand,
    Pipe,
    Caret,
    Tilde,
    ShiftLeft,
    ShiftRight,
    Arrow,
    FatArrow,
    PathSep,
    Range,
    RangeInclusive,
    Ellipsis,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    AmpAssign,
    PipeAssign,
    CaretAssign,
    LeftShiftAssign,
    RightShiftAssign,

    // Delimiters [200, 210)
    LeftParen = 200,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,

    // Punctuation [210, 220)
    Comma = 210,
    Semicolon,
    Colon,
    Dot,
    At,
    Hash,
    Dollar,
    Question,
}

impl TokenKind {
    #[inline]
    pub fn is_special(self) -> bool {
        (self as u16) < 10
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        (10..20).contains(&(self as u16))
    }

    #[inline]
    pub fn is_identifier(self) -> bool {
        (20..30).contains(&(self as u16))
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (30..100).contains(&(self as u16))
    }

    #[inline]
    pub fn is_operator(self) -> bool {
        (100..200).contains(&(self as u16))
    }

    #[inline]
    pub fn is_delimiter(self) -> bool {
        (200..210).contains(&(self as u16))
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        (210..220).contains(&(self as u16))
    }

    /// Trivia kinds are only emitted when the matching preserve option is
    /// set (newlines are always emitted; they are grammatically
    /// significant in Photon).
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Payload carried by a token.
///
/// The variant matches the kind's category: integer literals carry
/// `Integer`, float literals `Float`, identifiers and string/char
/// literals `Text` (a slice borrowed from the lexer's arena), boolean
/// literals `Bool`, and everything else `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenValue<'a> {
    None,
    Integer(i64),
    Float(f64),
    Text(&'a str),
    Bool(bool),
}

impl<'a> TokenValue<'a> {
    /// The text payload, if this value carries one.
    #[inline]
    pub fn as_text(self) -> Option<&'a str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_integer(self) -> Option<i64> {
        match self {
            TokenValue::Integer(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(self) -> Option<f64> {
        match self {
            TokenValue::Float(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(self) -> Option<bool> {
        match self {
            TokenValue::Bool(value) => Some(value),
            _ => None,
        }
    }
}

/// One lexed token: kind, payload, and byte-precise location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: TokenValue<'a>,
    pub location: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind, value: TokenValue<'a>, location: Span) -> Token<'a> {
        Token {
            kind,
            value,
            location,
        }
    }

    /// Shorthand for the common payload-free case.
    #[inline]
    pub fn bare(kind: TokenKind, location: Span) -> Token<'a> {
        Token::new(kind, TokenValue::None, location)
    }

    /// The text payload, if any.
    #[inline]
    pub fn text(&self) -> Option<&'a str> {
        self.value.as_text()
    }
}
