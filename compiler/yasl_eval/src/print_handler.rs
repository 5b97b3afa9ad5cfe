//! Print handler for configurable `print` output.
//!
//! Enum dispatch rather than a trait object; there are exactly three
//! destinations and `print` sits on the interpreter's hot path.
//! - `Stdout`: normal program runs
//! - `Buffer`: tests and embedders that capture output
//! - `Silent`: token-dump and analysis runs that discard output

use parking_lot::Mutex;
use std::sync::Arc;

/// Destination for program output.
pub enum PrintHandler {
    Stdout,
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandler {
    /// Write one line of program output.
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandler::Stdout => println!("{msg}"),
            PrintHandler::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// All captured output. Empty for non-capturing handlers.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.lock().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    /// Discard captured output.
    pub fn clear(&self) {
        if let PrintHandler::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Shared handle passed to the interpreter and kept by the caller.
pub type SharedPrintHandler = Arc<PrintHandler>;

/// Handler that writes to stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

/// Handler that captures output for later inspection.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

/// Handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_lines_in_order() {
        let handler = buffer_handler();
        handler.println("1");
        handler.println("2");
        assert_eq!(handler.output(), "1\n2\n");

        handler.clear();
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn silent_discards_everything() {
        let handler = silent_handler();
        handler.println("gone");
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn handle_clones_share_the_buffer() {
        let handler = buffer_handler();
        let clone = Arc::clone(&handler);
        clone.println("shared");
        assert_eq!(handler.output(), "shared\n");
    }
}
