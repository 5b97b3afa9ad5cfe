//! Diagnostic queue: the explicit sink for recoverable diagnostics.
//!
//! Collects, limits, deduplicates, and sorts diagnostics. The queue is
//! passed into each operation that can report (the scanner takes
//! `&mut DiagnosticQueue` on every `next()` call); nothing in the
//! workspace writes diagnostics to a shared global stream.

use crate::Diagnostic;
use yasl_ir::Pos;

/// Configuration for diagnostic processing.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before further ones are dropped
    /// (0 = unlimited).
    pub error_limit: usize,
    /// Drop diagnostics with the same code at the same position.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// A config with no limits, for testing.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Ordered collection of diagnostics with limiting and deduplication.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    /// Last reported (position, code) pair, for dedup.
    last_reported: Option<(Pos, crate::ErrorCode)>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a queue with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue with a custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if it was queued, `false` if the error limit was
    /// reached or it duplicated the previous report.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.config.error_limit > 0 && self.error_count >= self.config.error_limit {
            return false;
        }
        if self.config.deduplicate && self.last_reported == Some((diag.pos, diag.code)) {
            return false;
        }

        self.last_reported = Some((diag.pos, diag.code));
        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Number of errors (not warnings/notes) collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Whether any errors were collected.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Whether the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Number of queued diagnostics of any severity.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate the queued diagnostics without clearing.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Sort diagnostics by position and return them, clearing the queue.
    ///
    /// Skips sorting when already in order, the common case for a single
    /// left-to-right scan.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self.diagnostics.windows(2).all(|w| w[0].pos <= w[1].pos);
        if !already_sorted {
            self.diagnostics.sort_by_key(|d| d.pos);
        }

        let result = std::mem::take(&mut self.diagnostics);
        self.error_count = 0;
        self.last_reported = None;
        result
    }
}
