//! Destination for `println` output.
//!
//! - `Stdout`: writes each value on its own line (default)
//! - `Buffer`: captures lines for tests and embedders
//! - `Silent`: discards everything

use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Output {
    /// Writes to the process stdout. Write failures, such as a closed pipe,
    /// are ignored and never fail the running program.
    #[default]
    Stdout,
    Buffer(String),
    Silent,
}

impl Output {
    /// A sink that captures output, read back with [`Output::take`].
    pub fn buffer() -> Self {
        Output::Buffer(String::new())
    }

    /// Emits one value followed by a newline.
    pub fn println(&mut self, value: i64) {
        match self {
            Output::Stdout => {
                let mut stdout = std::io::stdout().lock();
                let _ = writeln!(stdout, "{}", value);
            }
            Output::Buffer(buffer) => {
                buffer.push_str(&value.to_string());
                buffer.push('\n');
            }
            Output::Silent => {}
        }
    }

    /// Returns everything captured so far and clears the buffer.
    ///
    /// Always empty for sinks that do not capture.
    pub fn take(&mut self) -> String {
        match self {
            Output::Buffer(buffer) => std::mem::take(buffer),
            Output::Stdout | Output::Silent => String::new(),
        }
    }
}
