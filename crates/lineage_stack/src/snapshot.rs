//! Immutable call-stack snapshot.

use crate::Frame;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time capture of the call sequence active when an error was built.
///
/// Rendering via [`Display`](fmt::Display) produces one line per frame, each
/// prefixed with a newline and `"    at "`, so the text can be appended
/// directly after an error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StackSnapshot {
    /// Frames, innermost first
    frames: Vec<Frame>,
}

impl StackSnapshot {
    /// Create a snapshot from already-resolved frames.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Number of frames in the snapshot.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no frame survived filtering.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for StackSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            write!(f, "\n    at {}", frame)?;
        }
        Ok(())
    }
}
