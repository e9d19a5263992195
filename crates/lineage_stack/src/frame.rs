//! A single resolved stack frame.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One frame of a captured call stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Frame {
    /// Source file, trimmed of the working directory when configured
    file: String,
    /// Line number within `file` (0 when unknown)
    line: u32,
    /// Demangled routine name, empty when the symbol could not be resolved
    function: String,
}

impl Frame {
    /// Create a frame from its parts.
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.function.is_empty() {
            write!(f, "{}:{}", self.file, self.line)
        } else {
            write!(f, "{}:{} {}()", self.file, self.line, self.function)
        }
    }
}
