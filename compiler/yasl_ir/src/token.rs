//! Lexical tokens.
//!
//! A [`Token`] is an immutable value: the position of its first
//! significant character plus a [`TokenKind`]. The variable-text kinds
//! (`Num`, `Id`) carry their lexeme as an interned [`Name`] so tokens
//! stay `Copy`; every other kind has a fixed spelling.

use crate::{Name, Pos, StringInterner};
use std::fmt;

/// The closed set of YASL token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Returned forever once the source is exhausted.
    Eof,
    /// Numeric literal; the payload is the interned digit text.
    Num(Name),
    /// Identifier; the payload is the interned identifier text.
    Id(Name),
    // Keywords
    Program,
    Print,
    Mod,
    Div,
    Val,
    Begin,
    End,
    // Operators and punctuation
    Plus,
    Minus,
    Star,
    Semi,
    Period,
    Assign,
}

impl TokenKind {
    /// The lexeme text for variable-text kinds.
    ///
    /// `Some` only for [`Num`](Self::Num) and [`Id`](Self::Id); keywords
    /// and operators have a fixed spelling instead.
    pub fn text(self, interner: &StringInterner) -> Option<&'static str> {
        match self {
            TokenKind::Num(name) | TokenKind::Id(name) => Some(interner.lookup(name)),
            _ => None,
        }
    }

    /// The fixed source spelling for keyword/operator kinds.
    pub fn spelling(self) -> Option<&'static str> {
        match self {
            TokenKind::Eof | TokenKind::Num(_) | TokenKind::Id(_) => None,
            TokenKind::Program => Some("program"),
            TokenKind::Print => Some("print"),
            TokenKind::Mod => Some("mod"),
            TokenKind::Div => Some("div"),
            TokenKind::Val => Some("val"),
            TokenKind::Begin => Some("begin"),
            TokenKind::End => Some("end"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Semi => Some(";"),
            TokenKind::Period => Some("."),
            TokenKind::Assign => Some("="),
        }
    }

    /// The kind's name as it appears in token dumps.
    pub fn kind_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Num(_) => "NUM",
            TokenKind::Id(_) => "ID",
            TokenKind::Program => "PROGRAM",
            TokenKind::Print => "PRINT",
            TokenKind::Mod => "MOD",
            TokenKind::Div => "DIV",
            TokenKind::Val => "VAL",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Semi => "SEMI",
            TokenKind::Period => "PERIOD",
            TokenKind::Assign => "ASSIGN",
        }
    }
}

/// One lexical unit: kind plus source position.
///
/// The position is that of the token's first significant character,
/// captured before any lookahead or accumulation.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub pos: Pos,
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub const fn new(pos: Pos, kind: TokenKind) -> Self {
        Token { pos, kind }
    }

    /// Check whether this is the EOF token.
    #[inline]
    pub fn is_eof(self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Render the token for a dump: `line:col KIND "text"`.
    pub fn render(self, interner: &StringInterner) -> String {
        match self.kind.text(interner) {
            Some(text) => format!("{} {} \"{}\"", self.pos, self.kind.kind_name(), text),
            None => format!("{} {}", self.pos, self.kind.kind_name()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind.kind_name(), self.pos)
    }
}

// Size assertion to prevent accidental regressions
crate::static_assert_size!(Token, 16);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_only_for_num_and_id() {
        let interner = StringInterner::new();
        let num = TokenKind::Num(interner.intern("42"));
        let id = TokenKind::Id(interner.intern("x"));

        assert_eq!(num.text(&interner), Some("42"));
        assert_eq!(id.text(&interner), Some("x"));
        assert_eq!(TokenKind::Program.text(&interner), None);
        assert_eq!(TokenKind::Plus.text(&interner), None);
        assert_eq!(TokenKind::Eof.text(&interner), None);
    }

    #[test]
    fn fixed_spellings() {
        assert_eq!(TokenKind::Program.spelling(), Some("program"));
        assert_eq!(TokenKind::Assign.spelling(), Some("="));
        assert_eq!(TokenKind::Period.spelling(), Some("."));
        assert_eq!(TokenKind::Eof.spelling(), None);
    }

    #[test]
    fn render_includes_text_when_present() {
        let interner = StringInterner::new();
        let tok = Token::new(Pos::new(2, 5), TokenKind::Id(interner.intern("sum")));
        assert_eq!(tok.render(&interner), "2:5 ID \"sum\"");

        let kw = Token::new(Pos::new(1, 1), TokenKind::Begin);
        assert_eq!(kw.render(&interner), "1:1 BEGIN");
    }

    #[test]
    fn eof_check() {
        assert!(Token::new(Pos::START, TokenKind::Eof).is_eof());
        assert!(!Token::new(Pos::START, TokenKind::Semi).is_eof());
    }
}
