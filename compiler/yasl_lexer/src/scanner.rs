//! The scanner: drives the state machine and produces tokens.

use crate::cursor::SourceCursor;
use crate::keywords;
use crate::machine::{self, Action, EmitClass, State, Step};
use yasl_diagnostic::DiagnosticQueue;
use yasl_ir::{Pos, StringInterner, Token, TokenKind};

/// Pull-based lexical analyzer.
///
/// Each call to [`next()`](Self::next) runs the Mealy machine from
/// `Start` until a transition emits, and returns exactly one token.
/// Recoverable errors go to the caller's [`DiagnosticQueue`]; there is
/// no fatal lexer path. Once the input is exhausted, every call returns
/// an EOF token at the same final position.
///
/// The scanner is restartable only by constructing a fresh instance
/// over the source.
pub struct Scanner<'src, 'i> {
    cursor: SourceCursor<'src>,
    interner: &'i StringInterner,
}

impl<'src, 'i> Scanner<'src, 'i> {
    /// Create a scanner over `source`, interning lexemes in `interner`.
    pub fn new(source: &'src str, interner: &'i StringInterner) -> Self {
        Scanner {
            cursor: SourceCursor::new(source),
            interner,
        }
    }

    /// Extract the next token.
    ///
    /// Returns exactly one token per call. The token's position is that
    /// of its first significant character, captured before any
    /// accumulation.
    pub fn next(&mut self, diags: &mut DiagnosticQueue) -> Token {
        let mut state = State::Start;
        let mut lexeme = String::new();
        let mut start = self.cursor.pos();

        loop {
            let input = self.cursor.current();
            let Step { next, action } = machine::step(state, input);

            match action {
                Action::Skip => self.cursor.advance(),
                Action::Hold => {}
                Action::Buffer => {
                    if lexeme.is_empty() {
                        start = self.cursor.pos();
                    }
                    if let Some(c) = input {
                        lexeme.push(c);
                    }
                    self.cursor.advance();
                }
                Action::EmitAdvance(kind) => {
                    let pos = self.cursor.pos();
                    self.cursor.advance();
                    return Token::new(pos, kind);
                }
                Action::EmitEof => {
                    return Token::new(self.cursor.pos(), TokenKind::Eof);
                }
                Action::Emit(EmitClass::Num) => {
                    let name = self.interner.intern_owned(std::mem::take(&mut lexeme));
                    return Token::new(start, TokenKind::Num(name));
                }
                Action::Emit(EmitClass::Word) => {
                    let kind = keywords::lookup(&lexeme)
                        .unwrap_or_else(|| TokenKind::Id(self.interner.intern(&lexeme)));
                    return Token::new(start, kind);
                }
                Action::Error { kind, consume } => {
                    diags.add(kind.into_diagnostic(self.cursor.pos()));
                    if consume {
                        self.cursor.advance();
                    }
                }
            }

            state = next;
        }
    }

    /// Position of the next unconsumed character.
    pub fn pos(&self) -> Pos {
        self.cursor.pos()
    }

    /// Lex an entire source, collecting tokens through the first EOF.
    ///
    /// The returned vector always ends with exactly one EOF token.
    pub fn tokenize(
        source: &str,
        interner: &StringInterner,
        diags: &mut DiagnosticQueue,
    ) -> Vec<Token> {
        let mut scanner = Scanner::new(source, interner);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next(diags);
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }
}

#[cfg(test)]
mod tests;
