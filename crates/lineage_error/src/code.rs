//! Error classification codes.

use std::fmt;

/// A symbolic, comparable classification value.
///
/// Implemented for every type that can be displayed, debugged, compared and
/// shared across threads. The display form is the code's text in messages
/// and projections. Each distinct Rust type is its own code space: two codes
/// with the same text under different types never match each other.
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
/// enum Auth {
///     #[display("unauthorized")]
///     Unauthorized,
/// }
///
/// fn assert_code<C: lineage_error::Code>() {}
/// assert_code::<Auth>();
/// assert_code::<&'static str>();
/// ```
pub trait Code: fmt::Display + fmt::Debug + PartialEq + Send + Sync + 'static {}

impl<T> Code for T where T: fmt::Display + fmt::Debug + PartialEq + Send + Sync + 'static {}
