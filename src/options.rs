//! Output formatting options.
//!
//! ```rust
//! use jo::Options;
//!
//! let options = Options::new().with_indent(4);
//! assert_eq!(options.indent, 4);
//! assert_eq!(Options::default().indent, 2);
//! ```

/// Controls how a [`Document`](crate::Document) is rendered as JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Spaces per nesting level. `0` renders compact single-line JSON.
    pub indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { indent: 2 }
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
