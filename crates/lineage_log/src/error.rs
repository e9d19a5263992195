//! Logging setup errors.

/// Specific logging setup error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LogErrorKind {
    /// The configured level is not a valid filter directive.
    #[display("Invalid log filter '{}': {}", _0, _1)]
    InvalidFilter(String, String),
    /// Another global subscriber was installed first.
    #[display("Failed to install subscriber: {}", _0)]
    Install(String),
}

/// Logging setup error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Log Error: {} at line {} in {}", kind, line, file)]
pub struct LogError {
    kind: LogErrorKind,
    line: u32,
    file: &'static str,
}

impl LogError {
    /// Create a new logging error with caller location tracking.
    #[track_caller]
    pub fn new(kind: LogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LogErrorKind {
        &self.kind
    }
}
