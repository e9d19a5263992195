//! Coded error values for the lineage toolkit.
//!
//! A [`CodedError<C>`] is one node of a causal chain. It carries:
//! - a symbolic code of the caller's choosing (any [`Code`] type)
//! - an optional wrapped cause (any `std::error::Error`)
//! - key/value data local to the node
//! - tags, which flow from a cause into its wrapper when it is attached
//! - a [`StackSnapshot`](lineage_stack::StackSnapshot) taken at construction
//!
//! Each node in a chain may use a different code type. The matcher functions
//! ([`find`], [`find_as`], [`has_code`]) walk `source()` links and downcast
//! at each position, so new domains add code types without touching them.
//!
//! # Examples
//!
//! ```
//! use lineage_error::{CodedError, find_as, has_code};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
//! enum Api {
//!     #[display("not_found")]
//!     NotFound,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
//! enum Db {
//!     #[display("zero_rows")]
//!     ZeroRows,
//! }
//!
//! let db = CodedError::new(Db::ZeroRows)
//!     .with_data("req_id", 10)
//!     .with_message("db returned no rows");
//! let err = CodedError::new(Api::NotFound)
//!     .with_data("user_id", 123)
//!     .with_cause(db);
//!
//! assert_eq!(err.to_string(), "not_found: zero_rows: db returned no rows");
//! assert!(has_code(&err, &Db::ZeroRows));
//!
//! let req_id = find_as(&err, |db: &CodedError<Db>| db.get("req_id").cloned());
//! assert_eq!(req_id, Some(Some(serde_json::json!(10))));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capability;
mod chain;
mod code;
mod node;
mod projection;

pub use capability::{
    Project, Tagged, projection_of, register_projection, register_tagged, tags_of,
};
pub use chain::{Chain, chain, find, find_as, has_code, root_cause};
pub use code::Code;
pub use node::{BoxError, CodedError, CodedResult, PlainError};
pub use projection::{Projection, Wrapped};
