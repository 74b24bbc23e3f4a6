//! Keyword recognition via a compile-time perfect hash.
//!
//! The keyword set is fixed by the Photon grammar, which makes it a
//! perfect fit for a `phf` map: the hash function is generated at build
//! time (CHD), lookup is O(1), and there are no false positives to guard
//! against. `true` and `false` live in the table too but map to
//! [`TokenKind::BoolLiteral`] rather than a keyword kind.
//!
//! `Self` is deliberately absent: only lowercase `self` is reserved, and
//! `Self` lexes as an ordinary identifier.

use phf::phf_map;

use crate::token::TokenKind;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "as" => TokenKind::KwAs,
    "break" => TokenKind::KwBreak,
    "const" => TokenKind::KwConst,
    "continue" => TokenKind::KwContinue,
    "crate" => TokenKind::KwCrate,
    "else" => TokenKind::KwElse,
    "enum" => TokenKind::KwEnum,
    "extern" => TokenKind::KwExtern,
    "false" => TokenKind::BoolLiteral,
    "fn" => TokenKind::KwFn,
    "for" => TokenKind::KwFor,
    "if" => TokenKind::KwIf,
    "impl" => TokenKind::KwImpl,
    "in" => TokenKind::KwIn,
    "let" => TokenKind::KwLet,
    "loop" => TokenKind::KwLoop,
    "match" => TokenKind::KwMatch,
    "mod" => TokenKind::KwMod,
    "mut" => TokenKind::KwMut,
    "pub" => TokenKind::KwPub,
    "return" => TokenKind::KwReturn,
    "self" => TokenKind::KwSelf,
    "static" => TokenKind::KwStatic,
    "struct" => TokenKind::KwStruct,
    "super" => TokenKind::KwSuper,
    "trait" => TokenKind::KwTrait,
    "true" => TokenKind::BoolLiteral,
    "type" => TokenKind::KwType,
    "unsafe" => TokenKind::KwUnsafe,
    "use" => TokenKind::KwUse,
    "where" => TokenKind::KwWhere,
    "while" => TokenKind::KwWhile,
};

/// Look up the reserved-word kind for `text`.
///
/// Returns `None` for anything that is not a reserved word; the caller
/// emits an identifier in that case.
#[inline]
pub fn keyword_kind(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Number of reserved words (including `true`/`false`).
pub fn keyword_count() -> usize {
    KEYWORDS.len()
}

/// All reserved words, for exhaustive table checks.
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.entries().map(|(text, kind)| (*text, *kind))
}
