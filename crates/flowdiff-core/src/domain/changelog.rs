use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use flowdiff_graph::{ChangeStatus, GraphDocument};
use serde::Serialize;

/// Human-readable summary of what changed in a combined status graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Changelog {
    /// Display names of added nodes
    pub added_nodes: Vec<String>,
    /// Display names of removed nodes
    pub removed_nodes: Vec<String>,
    /// Display names of modified nodes
    pub modified_nodes: Vec<String>,
    /// Added connections as `"<source> → <target>"`
    pub added_connections: Vec<String>,
    /// Removed connections as `"<source> → <target>"`
    pub removed_connections: Vec<String>,
}

impl Changelog {
    /// Summarize a combined graph. Unmodified and untagged elements are skipped.
    pub fn from_graph(graph: &GraphDocument) -> Self {
        let names: HashMap<&str, Cow<'_, str>> = graph
            .nodes()
            .iter()
            .map(|node| (node.id.as_str(), node.display_name()))
            .collect();
        let name_of = |id: &str| match names.get(id) {
            Some(name) => name.to_string(),
            None => id.to_string(),
        };

        let mut changelog = Changelog::default();

        for node in graph.nodes() {
            let bucket = match node.status {
                Some(ChangeStatus::Added) => &mut changelog.added_nodes,
                Some(ChangeStatus::Removed) => &mut changelog.removed_nodes,
                Some(ChangeStatus::Modified) => &mut changelog.modified_nodes,
                _ => continue,
            };
            bucket.push(name_of(&node.id));
        }

        for connection in graph.connections() {
            let bucket = match connection.status {
                Some(ChangeStatus::Added) => &mut changelog.added_connections,
                Some(ChangeStatus::Removed) => &mut changelog.removed_connections,
                _ => continue,
            };
            bucket.push(format!(
                "{} → {}",
                name_of(&connection.source_port),
                name_of(&connection.target_port)
            ));
        }

        changelog
    }

    /// True if nothing changed
    pub fn is_empty(&self) -> bool {
        self.added_nodes.is_empty()
            && self.removed_nodes.is_empty()
            && self.modified_nodes.is_empty()
            && self.added_connections.is_empty()
            && self.removed_connections.is_empty()
    }
}

impl fmt::Display for Changelog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No change.");
        }

        let sections = [
            ("Added nodes", &self.added_nodes),
            ("Removed nodes", &self.removed_nodes),
            ("Modified nodes", &self.modified_nodes),
            ("Added connections", &self.added_connections),
            ("Removed connections", &self.removed_connections),
        ];
        for (title, entries) in sections {
            if entries.is_empty() {
                continue;
            }
            writeln!(f, "{}:", title)?;
            for entry in entries {
                writeln!(f, "  - {}", entry)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdiff_graph::{Attributes, Connection, Node};
    use serde_json::json;

    fn named(id: &str, name: Option<&str>, status: ChangeStatus) -> Node {
        let mut data = Attributes::new();
        if let Some(name) = name {
            data.insert("name".to_string(), json!(name));
        }
        Node::new(id, data).with_status(status)
    }

    #[test]
    fn test_lists_changes_by_name() {
        let graph = GraphDocument::from_parts(
            vec![
                named("e", Some("Emu"), ChangeStatus::Added),
                named("b", None, ChangeStatus::Removed),
                named("a", Some("Forest"), ChangeStatus::Modified),
                named("c", Some("Cat"), ChangeStatus::Unmodified),
            ],
            vec![
                Connection::new("c", "e").with_status(ChangeStatus::Added),
                Connection::new("a", "b").with_status(ChangeStatus::Removed),
                Connection::new("a", "c").with_status(ChangeStatus::Unmodified),
            ],
        );

        let changelog = Changelog::from_graph(&graph);
        assert_eq!(changelog.added_nodes, vec!["Emu"]);
        assert_eq!(changelog.removed_nodes, vec!["(No name)"]);
        assert_eq!(changelog.modified_nodes, vec!["Forest"]);
        assert_eq!(changelog.added_connections, vec!["Cat → Emu"]);
        assert_eq!(changelog.removed_connections, vec!["Forest → (No name)"]);
    }

    #[test]
    fn test_unknown_endpoint_uses_raw_id() {
        let graph = GraphDocument::from_parts(
            vec![],
            vec![Connection::new("x", "y").with_status(ChangeStatus::Added)],
        );
        let changelog = Changelog::from_graph(&graph);
        assert_eq!(changelog.added_connections, vec!["x → y"]);
    }

    #[test]
    fn test_blank_and_numeric_names() {
        let mut blank = Attributes::new();
        blank.insert("name".to_string(), json!(""));
        let mut numeric = Attributes::new();
        numeric.insert("name".to_string(), json!(7));

        let graph = GraphDocument::from_parts(
            vec![
                Node::new("x", blank).with_status(ChangeStatus::Added),
                Node::new("y", numeric).with_status(ChangeStatus::Added),
            ],
            vec![Connection::new("x", "y").with_status(ChangeStatus::Added)],
        );

        let changelog = Changelog::from_graph(&graph);
        assert_eq!(changelog.added_nodes, vec!["(No name)", "7"]);
        assert_eq!(changelog.added_connections, vec!["(No name) → 7"]);
    }

    #[test]
    fn test_no_change() {
        let graph = GraphDocument::from_parts(
            vec![named("a", Some("A"), ChangeStatus::Unmodified)],
            vec![],
        );
        let changelog = Changelog::from_graph(&graph);
        assert!(changelog.is_empty());
        assert_eq!(changelog.to_string(), "No change.\n");
    }

    #[test]
    fn test_display_sections() {
        let changelog = Changelog {
            added_nodes: vec!["Emu".to_string()],
            removed_connections: vec!["A → B".to_string()],
            ..Changelog::default()
        };
        assert_eq!(
            changelog.to_string(),
            "Added nodes:\n  - Emu\nRemoved connections:\n  - A → B\n"
        );
    }
}
