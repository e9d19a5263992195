//! Stack capture errors.

/// Specific stack capture error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StackErrorKind {
    /// The process-wide capture was already installed (or already used).
    #[display("Global stack capture already set")]
    GlobalAlreadySet,
}

/// Stack capture error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stack Error: {} at line {} in {}", kind, line, file)]
pub struct StackError {
    kind: StackErrorKind,
    line: u32,
    file: &'static str,
}

impl StackError {
    /// Create a new stack error with caller location tracking.
    #[track_caller]
    pub fn new(kind: StackErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StackErrorKind {
        &self.kind
    }
}
