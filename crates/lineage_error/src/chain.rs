//! Type-directed traversal of causal chains.
//!
//! All functions follow `Error::source` until it returns `None`. A chain
//! that loops back on itself never terminates; building one is a caller bug.

use crate::{Code, CodedError};
use std::error::Error;

/// Iterator over an error and its causes, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate `err` and every error behind it.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// The innermost error reachable from `err`.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    chain(err).last().unwrap_or(err)
}

/// First node in the chain whose code type is `C`.
///
/// ```
/// use lineage_error::{CodedError, find};
///
/// let err = CodedError::new("outer").with_cause(CodedError::new(404_u16));
/// assert_eq!(find::<u16>(&err).map(|node| *node.code()), Some(404));
/// assert!(find::<bool>(&err).is_none());
/// ```
pub fn find<'a, C: Code>(err: &'a (dyn Error + 'static)) -> Option<&'a CodedError<C>> {
    chain(err).find_map(|node| node.downcast_ref::<CodedError<C>>())
}

/// Apply `project` to the first node whose code type is `C`.
///
/// Returns `None` when no node of that type is in the chain, however deep
/// the chain is.
pub fn find_as<C, R>(err: &(dyn Error + 'static), project: impl FnOnce(&CodedError<C>) -> R) -> Option<R>
where
    C: Code,
{
    find::<C>(err).map(project)
}

/// True if any node of code type `C` in the chain carries `code`.
pub fn has_code<C: Code>(err: &(dyn Error + 'static), code: &C) -> bool {
    chain(err)
        .filter_map(|node| node.downcast_ref::<CodedError<C>>())
        .any(|node| node.code() == code)
}
