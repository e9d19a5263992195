//! The coded error node and its builder surface.

use crate::capability::{self, Project, Tagged};
use crate::{Chain, Code, Projection, Wrapped};
use lineage_stack::StackSnapshot;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use std::error::Error;
use std::fmt;
use std::panic::Location;

/// Owned, type-erased cause.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Result type for operations failing with a single code type.
pub type CodedResult<T, C> = std::result::Result<T, CodedError<C>>;

/// One node of a causal error chain, classified by a code of type `C`.
///
/// Nodes are built by a single owner through chained builder calls, then
/// handed off and treated as read-only. Builder calls take `self` by value
/// (`with_*`) or `&mut self` (`insert_data`, `add_tags`, `set_cause`); none
/// of them synchronize.
///
/// The display form is the full chain message: `"<code>"` for a leaf, or
/// `"<code>: <cause>"` when a cause is attached.
///
/// # Examples
///
/// ```
/// use lineage_error::CodedError;
///
/// let err = CodedError::new("unauthorized")
///     .with_tags(["iam"])
///     .with_data("user_id", 7)
///     .with_formatted_cause(format_args!("token expired {} seconds ago", 30));
///
/// assert_eq!(err.to_string(), "unauthorized: token expired 30 seconds ago");
/// assert!(err.has_tags(["iam"]));
/// assert_eq!(err.get("user_id"), Some(&serde_json::json!(7)));
/// ```
#[derive(Debug)]
pub struct CodedError<C: Code> {
    code: C,
    cause: Option<BoxError>,
    tags: BTreeSet<String>,
    data: HashMap<String, Value>,
    stack: Option<StackSnapshot>,
    location: &'static Location<'static>,
}

impl<C: Code> CodedError<C> {
    /// Create a leaf error with the given code.
    ///
    /// Records the caller's location and captures a stack snapshot with the
    /// active [`StackCapture`](lineage_stack::StackCapture). The snapshot
    /// starts at the caller; toolkit frames are never recorded.
    #[track_caller]
    pub fn new(code: C) -> Self {
        capability::register_node::<C>();
        Self {
            code,
            cause: None,
            tags: BTreeSet::new(),
            data: HashMap::new(),
            stack: lineage_stack::capture(0),
            location: Location::caller(),
        }
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_data(key, value);
        self
    }

    /// In-place form of [`with_data`](Self::with_data).
    pub fn insert_data(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Look up a data value on this node only. Causes are not consulted.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// All data local to this node.
    pub fn data(&self) -> &HashMap<String, Value> {
        &self.data
    }

    /// Add tags to this node.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_tags(tags);
        self
    }

    /// In-place form of [`with_tags`](Self::with_tags).
    pub fn add_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// True if every given tag is present. An empty list is trivially present.
    pub fn has_tags<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().all(|tag| self.tags.contains(tag.as_ref()))
    }

    /// Snapshot of the current tags.
    pub fn tags(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }

    /// Attach `cause` as the wrapped predecessor, replacing any previous one.
    ///
    /// If the cause exposes tags (see [`Tagged`]), they are copied into this
    /// node now. Tags added to the cause later are not seen here.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.set_cause(cause);
        self
    }

    /// In-place form of [`with_cause`](Self::with_cause).
    pub fn set_cause<E>(&mut self, cause: E) -> &mut Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.attach(Box::new(cause))
    }

    /// Attach an already boxed cause, with the same tag propagation as
    /// [`with_cause`](Self::with_cause).
    pub fn with_boxed_cause(mut self, cause: BoxError) -> Self {
        self.attach(cause);
        self
    }

    /// Attach a plain-text cause built from format arguments.
    pub fn with_formatted_cause(self, args: fmt::Arguments<'_>) -> Self {
        self.with_cause(PlainError::new(fmt::format(args)))
    }

    /// Attach a plain-text cause.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.with_cause(PlainError::new(message))
    }

    fn attach(&mut self, cause: BoxError) -> &mut Self {
        if let Some(tags) = capability::tags_of(cause.as_ref()) {
            self.tags.extend(tags);
        }
        self.cause = Some(cause);
        self
    }

    /// The classification code.
    pub fn code(&self) -> &C {
        &self.code
    }

    /// The code rendered as text.
    pub fn code_string(&self) -> String {
        self.code.to_string()
    }

    /// The direct cause, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Mutable access to the direct cause.
    pub fn cause_mut(&mut self) -> Option<&mut (dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref_mut()
    }

    /// Detach and return the direct cause.
    pub fn take_cause(&mut self) -> Option<BoxError> {
        self.cause.take()
    }

    /// The stack snapshot taken at construction, if capture was available.
    pub fn stack(&self) -> Option<&StackSnapshot> {
        self.stack.as_ref()
    }

    /// Source location of the `new` call that built this node.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Identity comparison against an arbitrary error.
    ///
    /// True only when `other` is a `CodedError` of this same code type with
    /// an equal code. The chain behind `other` is not searched; use
    /// [`has_code`](crate::has_code) for that.
    pub fn is(&self, other: &(dyn Error + 'static)) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| other.code == self.code)
    }

    /// Structured view of this node and, recursively, its causes.
    ///
    /// `data`, `tags` and `stack` are left empty when the node has none;
    /// they are omitted when the projection is serialized.
    pub fn projection(&self) -> Projection {
        let wrapped = self.cause.as_deref().map(|cause| {
            match capability::projection_of(cause) {
                Some(projection) => Wrapped::Node(Box::new(projection)),
                None => Wrapped::Message(cause.to_string()),
            }
        });

        Projection {
            code: self.code_string(),
            message: self.to_string(),
            data: self
                .data
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            tags: self.tags.iter().cloned().collect(),
            wrapped,
            stack: self
                .stack
                .as_ref()
                .filter(|stack| !stack.is_empty())
                .map(ToString::to_string),
        }
    }

    /// Iterate this node and its causes, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        crate::chain(self)
    }

    /// The innermost error of the chain (this node when there is no cause).
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        crate::root_cause(self)
    }
}

impl<C: Code> From<C> for CodedError<C> {
    #[track_caller]
    fn from(code: C) -> Self {
        Self::new(code)
    }
}

impl<C: Code> PartialEq for CodedError<C> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl<C: Code> fmt::Display for CodedError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.code, cause),
            None => write!(f, "{}", self.code),
        }
    }
}

impl<C: Code> Error for CodedError<C> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl<C: Code> Tagged for CodedError<C> {
    fn tags(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }
}

impl<C: Code> Project for CodedError<C> {
    fn projection(&self) -> Projection {
        CodedError::projection(self)
    }
}

/// Terminal, uncoded cause carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
#[display("{}", message)]
pub struct PlainError {
    message: String,
}

impl PlainError {
    /// Create a plain error from its message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}
