//! The lexer's state machine as data.
//!
//! The original dense if/else dispatch is re-expressed as an explicit
//! [`State`] enumeration plus a pure transition function
//! [`step`]`(state, input) -> `[`Step`]. The function performs no I/O
//! and touches no cursor: it maps one `(state, current character)` pair
//! to the next state and the action to take on that transition, which
//! makes every transition independently testable and lets the compiler
//! check the dispatch for exhaustiveness.
//!
//! The driver ([`Scanner`](crate::Scanner)) owns the impure half:
//! consuming characters, accumulating the lexeme, resolving keywords,
//! and reporting errors.

use crate::lex_error::LexErrorKind;
use yasl_ir::TokenKind;

/// Lexer states.
///
/// `Start` dispatches on the current character; the remaining states are
/// the in-progress accumulations and the comment sub-machine.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    /// Between tokens.
    Start,
    /// Saw a leading `0`. Emits a single-digit NUM no matter what
    /// follows: `0` never continues into a longer number.
    LeadingZero,
    /// Inside a digit run (first digit was not `0`).
    Num,
    /// Inside an identifier/keyword run.
    Word,
    /// Saw `/`; disambiguating comment vs. error.
    Slash,
    /// Inside `//...`, consuming through end of line.
    LineComment,
    /// Inside `/*...`, consuming the body.
    BlockComment,
    /// Saw `*` inside a block comment; a `/` closes it.
    BlockCommentStar,
}

/// What kind of buffered token to emit.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EmitClass {
    /// Emit the buffered lexeme as a NUM token.
    Num,
    /// Resolve the buffered lexeme against the keyword table and emit
    /// the keyword token or an ID.
    Word,
}

/// The action taken on a transition.
///
/// Emission and consumption are transition outputs (Mealy machine), so
/// each variant states explicitly whether the current character is
/// consumed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Action {
    /// Consume the current character without recording it.
    Skip,
    /// Consume the current character into the lexeme buffer.
    Buffer,
    /// Change state without consuming.
    Hold,
    /// Emit a buffered token. Does not consume: the terminating
    /// character is left for the next `next()` call.
    Emit(EmitClass),
    /// Consume the current character, then emit this fixed-spelling
    /// token positioned at the consumed character.
    EmitAdvance(TokenKind),
    /// Emit the EOF token at the final position. Terminal: end of input
    /// maps here forever.
    EmitEof,
    /// Report a recoverable error; `consume` says whether the offending
    /// character is skipped.
    Error { kind: LexErrorKind, consume: bool },
}

/// One step of the machine: next state plus the transition's action.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Step {
    pub next: State,
    pub action: Action,
}

impl Step {
    const fn new(next: State, action: Action) -> Self {
        Step { next, action }
    }
}

/// Characters that terminate an identifier/keyword run.
///
/// Fixed set from the language definition; anything outside it that is
/// not an identifier character is an error inside a Word run.
fn is_word_delimiter(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | ';' | '.' | '=' | '/' | ' ' | '\t' | '\n'
    )
}

/// A character that may extend an identifier/keyword run.
fn is_word_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The pure transition function: `(state, current character) -> step`.
///
/// `input` is `None` at end of input.
pub fn step(state: State, input: Option<char>) -> Step {
    match state {
        State::Start => start(input),
        State::LeadingZero => Step::new(State::Start, Action::Emit(EmitClass::Num)),
        State::Num => match input {
            Some(c) if c.is_ascii_digit() => Step::new(State::Num, Action::Buffer),
            _ => Step::new(State::Start, Action::Emit(EmitClass::Num)),
        },
        State::Word => word(input),
        State::Slash => slash(input),
        State::LineComment => match input {
            Some('\n') => Step::new(State::Start, Action::Skip),
            None => Step::new(State::Start, Action::Hold),
            Some(_) => Step::new(State::LineComment, Action::Skip),
        },
        State::BlockComment => match input {
            Some('*') => Step::new(State::BlockCommentStar, Action::Skip),
            None => unterminated(),
            Some(_) => Step::new(State::BlockComment, Action::Skip),
        },
        State::BlockCommentStar => match input {
            Some('/') => Step::new(State::Start, Action::Skip),
            Some('*') => Step::new(State::BlockCommentStar, Action::Skip),
            None => unterminated(),
            Some(_) => Step::new(State::BlockComment, Action::Skip),
        },
    }
}

fn start(input: Option<char>) -> Step {
    let Some(c) = input else {
        return Step::new(State::Start, Action::EmitEof);
    };
    match c {
        '0' => Step::new(State::LeadingZero, Action::Buffer),
        _ if c.is_ascii_digit() => Step::new(State::Num, Action::Buffer),
        _ if c.is_alphabetic() => Step::new(State::Word, Action::Buffer),
        '/' => Step::new(State::Slash, Action::Skip),
        '+' => Step::new(State::Start, Action::EmitAdvance(TokenKind::Plus)),
        '-' => Step::new(State::Start, Action::EmitAdvance(TokenKind::Minus)),
        '*' => Step::new(State::Start, Action::EmitAdvance(TokenKind::Star)),
        ';' => Step::new(State::Start, Action::EmitAdvance(TokenKind::Semi)),
        '.' => Step::new(State::Start, Action::EmitAdvance(TokenKind::Period)),
        '=' => Step::new(State::Start, Action::EmitAdvance(TokenKind::Assign)),
        _ if c.is_whitespace() => Step::new(State::Start, Action::Skip),
        _ => Step::new(
            State::Start,
            Action::Error {
                kind: LexErrorKind::UnexpectedChar(c),
                consume: true,
            },
        ),
    }
}

fn word(input: Option<char>) -> Step {
    match input {
        Some(c) if is_word_continue(c) => Step::new(State::Word, Action::Buffer),
        // End of input terminates the run like a delimiter would.
        None => Step::new(State::Start, Action::Emit(EmitClass::Word)),
        Some(c) if is_word_delimiter(c) => Step::new(State::Start, Action::Emit(EmitClass::Word)),
        // Neither extends nor terminates: report, skip, keep
        // accumulating. See DESIGN.md for the resolution of this case.
        Some(c) => Step::new(
            State::Word,
            Action::Error {
                kind: LexErrorKind::UnexpectedChar(c),
                consume: true,
            },
        ),
    }
}

fn slash(input: Option<char>) -> Step {
    match input {
        Some('/') => Step::new(State::LineComment, Action::Skip),
        Some('*') => Step::new(State::BlockComment, Action::Skip),
        // The offending character is NOT consumed: it is re-dispatched
        // from Start on the next iteration.
        _ => Step::new(
            State::Start,
            Action::Error {
                kind: LexErrorKind::BadCommentMarker,
                consume: false,
            },
        ),
    }
}

fn unterminated() -> Step {
    Step::new(
        State::Start,
        Action::Error {
            kind: LexErrorKind::UnterminatedComment,
            consume: false,
        },
    )
}
