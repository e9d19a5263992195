//! Errors raised while setting the toolkit up.

use lineage_log::LogError;
use lineage_stack::StackError;

/// A configuration source that could not be read or parsed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error in {}: {} at line {} in {}", origin, message, line, file)]
pub struct ConfigError {
    /// The source that failed: a file path, or `bundled defaults` and
    /// `layered sources` for the built-in loaders
    pub origin: String,
    /// What went wrong
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError for `origin` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineage::ConfigError;
    ///
    /// let err = ConfigError::new("./lineage.toml", "invalid type for stack.max_depth");
    /// assert_eq!(err.origin, "./lineage.toml");
    /// assert!(err.to_string().starts_with("Configuration Error in ./lineage.toml"));
    /// ```
    #[track_caller]
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            origin: origin.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

/// The ways toolkit setup can fail.
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LineageErrorKind {
    /// Configuration could not be read or parsed
    #[from(ConfigError)]
    Config(ConfigError),
    /// The global stack capture could not be installed
    #[from(StackError)]
    Stack(StackError),
    /// The tracing subscriber could not be installed
    #[from(LogError)]
    Log(LogError),
}

/// Setup error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lineage::{ConfigError, LineageErrorKind, LineageResult};
///
/// fn load() -> LineageResult<()> {
///     Err(ConfigError::new("lineage.toml", "missing [stack] table"))?
/// }
///
/// let err = load().unwrap_err();
/// assert!(matches!(err.kind(), LineageErrorKind::Config(_)));
/// assert!(err.to_string().starts_with("Lineage Error: Configuration Error"));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lineage Error: {}", _0)]
pub struct LineageError(Box<LineageErrorKind>);

impl LineageError {
    /// Create a new error from a kind.
    pub fn new(kind: LineageErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LineageErrorKind {
        &self.0
    }
}

impl<T> From<T> for LineageError
where
    T: Into<LineageErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for toolkit setup.
pub type LineageResult<T> = std::result::Result<T, LineageError>;
