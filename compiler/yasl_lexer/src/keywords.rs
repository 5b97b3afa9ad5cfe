//! Keyword resolution for terminated identifier runs.
//!
//! Lookup is case-sensitive and length-bucketed: YASL keywords are 3, 5,
//! or 7 characters, so most identifiers are rejected on length alone.

use yasl_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is one of the seven
/// YASL keywords, `None` for a regular identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        3 => match text {
            "mod" => Some(TokenKind::Mod),
            "div" => Some(TokenKind::Div),
            "val" => Some(TokenKind::Val),
            "end" => Some(TokenKind::End),
            _ => None,
        },
        5 => match text {
            "print" => Some(TokenKind::Print),
            "begin" => Some(TokenKind::Begin),
            _ => None,
        },
        7 => match text {
            "program" => Some(TokenKind::Program),
            _ => None,
        },
        _ => None,
    }
}
