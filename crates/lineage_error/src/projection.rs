//! Structured, read-only view of an error chain for logging collaborators.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Nested attribute view of a coded error.
///
/// Serialized field names are the log contract: `code`, `error` (the full
/// chain message), `data`, `tags`, `wrapped`, `stack`. Empty `data`, empty
/// `tags`, a missing cause and a missing stack are omitted.
///
/// ```
/// use lineage_error::CodedError;
///
/// let json = CodedError::new("timeout").projection().to_json();
/// assert_eq!(json["code"], "timeout");
/// assert_eq!(json["error"], "timeout");
/// assert!(json.get("data").is_none());
/// assert!(json.get("tags").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// The node's code as text
    pub code: String,

    /// Full rendered chain message
    #[serde(rename = "error")]
    pub message: String,

    /// Data local to the node
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,

    /// The node's tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// The direct cause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<Wrapped>,

    /// Rendered stack snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// How a wrapped cause appears in a [`Projection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Wrapped {
    /// The cause renders its own projection
    Node(Box<Projection>),
    /// The cause only has a message
    Message(String),
}

impl Projection {
    /// The projection as a JSON object.
    pub fn to_json(&self) -> Value {
        // Plain strings, maps and vectors only; conversion cannot fail.
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Projections of this node and every projected cause below it.
    pub fn nodes(&self) -> Vec<&Projection> {
        let mut nodes = vec![self];
        let mut current = self;
        while let Some(Wrapped::Node(next)) = &current.wrapped {
            current = next.as_ref();
            nodes.push(current);
        }
        nodes
    }
}
