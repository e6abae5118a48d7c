//! Builder-style helper for composing prompt text.
//!
//! Writing multi-line prompt strings inline is tedious and error-prone.
//! `PromptBuilder` offers a small fluent API; every method returns `self`,
//! enabling call-chaining:
//!
//! ```rust
//! use hadid_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_line("Convert the page below.")
//!     .add_blank_line()
//!     .add_quoted_block("raw page text")
//!     .finalize();
//!
//! assert!(text.starts_with("Convert the page below."));
//! ```
//!
//! The builder performs no validation besides `expect`ing that writing to the
//! internal `String` never fails (which it shouldn't). It refrains from
//! smart-formatting to stay predictable — newlines are emitted exactly as
//! requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce prompt text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you're done, call [`Self::finalize`] to obtain the assembled text.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a key–value line: `Key: Value`.
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "{key}: {value}").expect("failed to write buffer");
        self
    }

    /// Embed content between triple-quote delimiters, the quoting style the
    /// consistency prompt uses for prior-page text.
    pub fn add_quoted_block(self, content: impl Display) -> Self {
        self.add_line("\"\"\"").add_line(content).add_line("\"\"\"")
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
