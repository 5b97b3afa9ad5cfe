//! Command-line driver for the YASL front end.
//!
//! `yaslc <file.yasl>` lexes the file, dumps one token per line to
//! stdout, and reports diagnostics on stderr.
//!
//! Exit codes: 0 clean, 1 when errors were reported, 2 for bad usage or
//! an unreadable file.

use std::fs;

use tracing::debug;
use yasl_diagnostic::{Diagnostic, DiagnosticQueue};
use yasl_ir::StringInterner;
use yasl_lexer::Scanner;

/// The result of lexing one source: the rendered token dump plus the
/// flushed diagnostics.
pub struct LexReport {
    pub dump: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl LexReport {
    /// Whether any reported diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Lex a source completely and render the token dump.
///
/// Each token becomes one `line:col KIND ["text"]` line; the dump always
/// ends with the EOF token.
pub fn lex_source(source: &str) -> LexReport {
    let interner = StringInterner::new();
    let mut diags = DiagnosticQueue::new();
    let tokens = Scanner::tokenize(source, &interner, &mut diags);
    debug!(tokens = tokens.len(), "lexed");

    let mut dump = String::new();
    for token in &tokens {
        dump.push_str(&token.render(&interner));
        dump.push('\n');
    }
    LexReport {
        dump,
        diagnostics: diags.flush(),
    }
}

/// Run the driver with OS-style arguments; returns the exit code.
pub fn run(args: &[String]) -> i32 {
    init_tracing();

    let [_, path] = args else {
        eprintln!("Usage: yaslc <file.yasl>");
        return 2;
    };

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            return 2;
        }
    };

    let report = lex_source(&source);
    print!("{}", report.dump);
    for diag in &report.diagnostics {
        eprintln!("{diag}");
    }

    i32::from(report.has_errors())
}

/// Install the `RUST_LOG`-filtered subscriber, writing to stderr so the
/// token dump on stdout stays machine-readable.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        let filter = tracing_subscriber::EnvFilter::from_default_env();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
