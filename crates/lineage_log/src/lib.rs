//! Tracing output for lineage coded errors.
//!
//! Errors are written as single `tracing` events whose fields mirror the
//! error's projection:
//!
//! | field        | content                                              |
//! |--------------|------------------------------------------------------|
//! | `code`       | the outermost node's code                            |
//! | `error`      | the full chain message                               |
//! | `data`       | the node's data as a JSON object, when not empty     |
//! | `tags`       | the node's tags as a JSON list, when not empty       |
//! | `wrapped`    | the cause's projection as JSON, or its plain message |
//! | `stack`      | the rendered stack snapshot, when one was captured   |
//! | `projection` | the whole projection as compact JSON                 |
//!
//! Errors without a projection are logged with their message only.
//!
//! # Examples
//!
//! ```
//! use lineage_error::CodedError;
//! use lineage_log::ErrorLogExt;
//! use tracing::Level;
//!
//! let err = CodedError::new("not_found").with_tags(["iam"]);
//! err.log_at(Level::WARN);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod emit;
mod error;
mod subscriber;
pub mod test_utils;

pub use config::{LogConfig, LogConfigBuilder};
pub use emit::{ErrorLogExt, log_error};
pub use error::{LogError, LogErrorKind};
pub use subscriber::init_subscriber;
