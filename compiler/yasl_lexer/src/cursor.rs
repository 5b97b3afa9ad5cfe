//! Character cursor over a source string.
//!
//! The cursor holds exactly one character of lookahead: the current
//! character. `advance()` consumes it and loads the next, or sets the
//! end-of-input flag when none remains.
//!
//! # Invariants
//!
//! - Once end-of-input is reached the flag stays set permanently;
//!   further `advance()` calls are silent no-ops and the position stops
//!   moving.
//! - `current()` is `Some` exactly when end-of-input is false.
//! - Consuming `\n` moves to line+1, column 1; consuming any other
//!   character moves to column+1.

use std::str::Chars;
use yasl_ir::Pos;

/// Character stream with position tracking.
///
/// Borrows the source text, so the underlying storage is released when
/// the caller's scope ends, on every exit path.
#[derive(Clone, Debug)]
pub struct SourceCursor<'src> {
    chars: Chars<'src>,
    current: Option<char>,
    pos: Pos,
}

impl<'src> SourceCursor<'src> {
    /// Create a cursor positioned at the first character of `source`.
    pub fn new(source: &'src str) -> Self {
        let mut chars = source.chars();
        let current = chars.next();
        SourceCursor {
            chars,
            current,
            pos: Pos::START,
        }
    }

    /// The current character, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Position of the current character (1-based line and column).
    ///
    /// At end of input this is one column past the last character (or
    /// the start of the line following a trailing newline) and never
    /// moves again.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Whether the input is exhausted.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Consume the current character and load the next one.
    ///
    /// A silent no-op once end of input has been reached.
    pub fn advance(&mut self) {
        let Some(consumed) = self.current else {
            return;
        };
        if consumed == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        self.current = self.chars.next();
    }
}
