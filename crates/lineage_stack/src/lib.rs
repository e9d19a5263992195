//! Call-stack snapshots for the lineage error toolkit.
//!
//! Every coded error captures a [`StackSnapshot`] when it is constructed. The
//! snapshot is opaque to the error itself: it is stored once and rendered on
//! demand, one line per frame.
//!
//! Acquisition sits behind the [`StackCapture`] trait so that tests (and
//! applications that do not want the cost of symbol resolution) can swap in
//! [`FixedCapture`] or [`DisabledCapture`]:
//!
//! - [`set_global_capture`] installs the process-wide capture
//! - [`set_default`] installs a thread-scoped override, restored on drop
//! - [`capture`] asks whichever capture is active
//!
//! # Examples
//!
//! ```
//! use lineage_stack::{capture, set_default, Frame, FixedCapture};
//!
//! let _guard = set_default(FixedCapture::new(vec![
//!     Frame::new("src/handlers.rs", 42, "handlers::create_user"),
//! ]));
//!
//! let snapshot = capture(0).unwrap();
//! assert_eq!(
//!     snapshot.to_string(),
//!     "\n    at src/handlers.rs:42 handlers::create_user()"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capture;
mod config;
mod error;
mod frame;
mod snapshot;

pub use capture::{
    BacktraceCapture, CaptureGuard, DisabledCapture, FixedCapture, StackCapture, capture,
    set_default, set_global_capture, short_name,
};
pub use config::{StackConfig, StackConfigBuilder};
pub use error::{StackError, StackErrorKind};
pub use frame::Frame;
pub use snapshot::StackSnapshot;
