use serde::{Deserialize, Serialize};

use super::ChangeStatus;

/// A directed edge between two node ids
///
/// Identity is the `(source_port, target_port)` pair; two connections with the
/// same pair are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Id of the node the edge leaves
    pub source_port: String,

    /// Id of the node the edge enters
    pub target_port: String,

    /// Change classification, unset until the connection has been through a diff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ChangeStatus>,
}

impl Connection {
    /// Create an untagged connection
    pub fn new(source_port: impl Into<String>, target_port: impl Into<String>) -> Self {
        Self {
            source_port: source_port.into(),
            target_port: target_port.into(),
            status: None,
        }
    }

    /// The identity pair used for matching across graphs
    pub fn key(&self) -> (&str, &str) {
        (self.source_port.as_str(), self.target_port.as_str())
    }

    /// Return this connection tagged with `status`
    pub fn with_status(mut self, status: ChangeStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_status() {
        let plain = Connection::new("a", "b");
        let tagged = Connection::new("a", "b").with_status(ChangeStatus::Added);
        assert_eq!(plain.key(), tagged.key());
        assert_ne!(plain, tagged);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Connection::new("a", "b")).unwrap();
        assert_eq!(json, serde_json::json!({"sourcePort": "a", "targetPort": "b"}));
    }
}
