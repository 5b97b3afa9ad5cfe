//! Recoverable lexical error kinds.

use yasl_diagnostic::{Diagnostic, ErrorCode};
use yasl_ir::Pos;

/// The kinds of recoverable lexical errors.
///
/// None of these abort the scan: each is converted to a [`Diagnostic`],
/// reported to the caller's queue, and scanning continues.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LexErrorKind {
    /// A character no token can start with, or one that neither extends
    /// nor terminates an identifier run. The character is skipped.
    UnexpectedChar(char),
    /// `/` followed by something other than `/` or `*`.
    BadCommentMarker,
    /// End of input inside a block comment.
    UnterminatedComment,
}

impl LexErrorKind {
    /// The diagnostic code for this error kind.
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0001,
            LexErrorKind::BadCommentMarker => ErrorCode::E0002,
            LexErrorKind::UnterminatedComment => ErrorCode::E0003,
        }
    }

    /// Convert into a diagnostic at the given position.
    pub fn into_diagnostic(self, pos: Pos) -> Diagnostic {
        let message = match self {
            LexErrorKind::UnexpectedChar(c) => {
                format!("unexpected character '{c}', skipped")
            }
            LexErrorKind::BadCommentMarker => {
                "must use // for a single-line comment".to_string()
            }
            LexErrorKind::UnterminatedComment => {
                "block comment not closed with '*/' before end of input".to_string()
            }
        };
        Diagnostic::error(self.code()).with_message(message).at(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_kinds() {
        assert_eq!(LexErrorKind::UnexpectedChar('?').code(), ErrorCode::E0001);
        assert_eq!(LexErrorKind::BadCommentMarker.code(), ErrorCode::E0002);
        assert_eq!(LexErrorKind::UnterminatedComment.code(), ErrorCode::E0003);
    }

    #[test]
    fn diagnostic_carries_position_and_message() {
        let diag = LexErrorKind::UnexpectedChar('?').into_diagnostic(Pos::new(3, 8));
        assert_eq!(diag.pos, Pos::new(3, 8));
        assert_eq!(diag.code, ErrorCode::E0001);
        assert!(diag.message.contains('?'));
        assert!(diag.is_error());
    }
}
