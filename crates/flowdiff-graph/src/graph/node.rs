use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ChangeStatus;

/// Free-form node attributes, kept in source key order
pub type Attributes = Map<String, Value>;

/// Display name used when a node's `name` attribute is missing or blank
pub const UNNAMED: &str = "(No name)";

/// A single entity of a flow graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Stable identifier, unique within one document
    pub id: String,

    /// Domain-defined attributes
    #[serde(default)]
    pub data: Attributes,

    /// Change classification, unset until the node has been through a diff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ChangeStatus>,

    /// Attributes before the change, set only on modified nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_data: Option<Attributes>,
}

impl Node {
    /// Create an untagged node
    pub fn new(id: impl Into<String>, data: Attributes) -> Self {
        Self {
            id: id.into(),
            data,
            status: None,
            old_data: None,
        }
    }

    /// The `name` attribute as display text.
    ///
    /// A missing name, `null`, `false`, `0` and `""` all read as `"(No name)"`.
    /// Strings are shown as they are and any other value as its JSON text.
    pub fn display_name(&self) -> Cow<'_, str> {
        match self.data.get("name") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Cow::Borrowed(UNNAMED),
            Some(Value::String(name)) if name.is_empty() => Cow::Borrowed(UNNAMED),
            Some(Value::String(name)) => Cow::Borrowed(name.as_str()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Cow::Borrowed(UNNAMED),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// Return this node tagged with `status`
    pub fn with_status(mut self, status: ChangeStatus) -> Self {
        self.status = Some(status);
        self
    }
}
