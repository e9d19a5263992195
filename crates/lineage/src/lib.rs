//! Coded, tagged, stack-aware error chains.
//!
//! This crate gathers the lineage toolkit behind one import:
//!
//! - [`CodedError`] nodes with data, tags and a wrapped cause
//!   (from `lineage_error`)
//! - chain matching with [`find`], [`find_as`] and [`has_code`]
//! - stack snapshots via [`StackCapture`] (from `lineage_stack`)
//! - structured tracing output via [`ErrorLogExt`] (from `lineage_log`)
//! - file-based [`LineageConfig`] and a one-call [`init`]
//!
//! # Examples
//!
//! ```
//! use lineage::{CodedError, ErrorLogExt, has_code};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
//! enum Auth {
//!     #[display("unauthorized")]
//!     Unauthorized,
//! }
//!
//! let err = CodedError::new(Auth::Unauthorized)
//!     .with_tags(["iam"])
//!     .with_message("token expired");
//!
//! assert!(has_code(&err, &Auth::Unauthorized));
//! err.log_at(tracing::Level::WARN);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod init;

pub use config::{LineageConfig, LineageConfigBuilder};
pub use error::{ConfigError, LineageError, LineageErrorKind, LineageResult};
pub use init::init;

pub use lineage_error::{
    BoxError, Chain, Code, CodedError, CodedResult, PlainError, Project, Projection, Tagged,
    Wrapped, chain, find, find_as, has_code, projection_of, register_projection, register_tagged,
    root_cause, tags_of,
};
pub use lineage_log::{
    ErrorLogExt, LogConfig, LogConfigBuilder, LogError, LogErrorKind, init_subscriber, log_error,
    test_utils,
};
pub use lineage_stack::{
    BacktraceCapture, CaptureGuard, DisabledCapture, FixedCapture, Frame, StackCapture,
    StackConfig, StackConfigBuilder, StackError, StackErrorKind, StackSnapshot, capture,
    set_default, set_global_capture,
};
