//! 1-based source positions.

use std::fmt;

/// A source position: 1-based line and column.
///
/// Carried by every token and diagnostic. Column counts characters, not
/// bytes; the lexer only ever advances one character at a time, so the
/// two never diverge in practice for ASCII-oriented YASL sources.
///
/// Layout: 8 bytes total.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    /// The start of any source: line 1, column 1.
    pub const START: Pos = Pos { line: 1, column: 1 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Pos { line, column }
    }
}

impl Default for Pos {
    fn default() -> Self {
        Pos::START
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// Size assertion to prevent accidental regressions
crate::static_assert_size!(Pos, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_one_one() {
        assert_eq!(Pos::START, Pos::new(1, 1));
        assert_eq!(Pos::default(), Pos::START);
    }

    #[test]
    fn ordering_is_line_major() {
        assert!(Pos::new(1, 99) < Pos::new(2, 1));
        assert!(Pos::new(3, 4) < Pos::new(3, 5));
    }

    #[test]
    fn display_and_debug() {
        let pos = Pos::new(12, 7);
        assert_eq!(format!("{pos}"), "12:7");
        assert_eq!(format!("{pos:?}"), "12:7");
    }
}
