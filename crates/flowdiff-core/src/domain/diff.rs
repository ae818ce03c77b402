use std::collections::{HashMap, HashSet};

use flowdiff_graph::{Connection, GraphDocument, Node};
use tracing::debug;

use crate::error::DiffError;

/// Nodes and connections of two graphs, partitioned by how they changed
///
/// Elements are owned copies of the input elements and carry no status yet;
/// tagging happens in [`StatusGraphBuilder`](crate::StatusGraphBuilder).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffResult {
    /// Nodes only in the compare graph, in compare order
    pub added_nodes: Vec<Node>,
    /// Nodes only in the base graph, in base order. Their base attributes
    /// stay in `data`; `old_data` is left unset.
    pub removed_nodes: Vec<Node>,
    /// Nodes in both graphs with different attributes, compare version with `old_data` from base
    pub modified_nodes: Vec<Node>,
    /// Nodes in both graphs with equal attributes, in compare order
    pub unmodified_nodes: Vec<Node>,
    /// Connections whose endpoint pair is only in the compare graph
    pub added_connections: Vec<Connection>,
    /// Connections whose endpoint pair is only in the base graph
    pub removed_connections: Vec<Connection>,
    /// Compare connections whose endpoint pair also exists in the base graph
    pub unmodified_connections: Vec<Connection>,
}

impl DiffResult {
    /// True if anything was added, removed or modified
    pub fn has_changes(&self) -> bool {
        !(self.added_nodes.is_empty()
            && self.removed_nodes.is_empty()
            && self.modified_nodes.is_empty()
            && self.added_connections.is_empty()
            && self.removed_connections.is_empty())
    }

    /// Total number of classified nodes
    pub fn node_count(&self) -> usize {
        self.added_nodes.len()
            + self.removed_nodes.len()
            + self.modified_nodes.len()
            + self.unmodified_nodes.len()
    }

    /// Total number of classified connections
    pub fn connection_count(&self) -> usize {
        self.added_connections.len()
            + self.removed_connections.len()
            + self.unmodified_connections.len()
    }
}

/// Classifies the nodes and connections of a base and a compare graph
///
/// Nodes are matched strictly by id and connections strictly by their
/// `(source, target)` pair. Matched nodes are compared by deep, key-order
/// insensitive equality of their attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralDiffEngine;

impl StructuralDiffEngine {
    /// Create a new diff engine
    pub fn new() -> Self {
        StructuralDiffEngine
    }

    /// Compare two graphs, either of which may be absent.
    ///
    /// An absent base means everything in `compare` was added; an absent
    /// compare means everything in `base` was removed.
    ///
    /// # Errors
    ///
    /// Returns `DiffError::NoGraphsToCompare` when both sides are absent.
    pub fn diff(
        &self,
        base: Option<&GraphDocument>,
        compare: Option<&GraphDocument>,
    ) -> Result<DiffResult, DiffError> {
        let result = match (base, compare) {
            (None, None) => return Err(DiffError::NoGraphsToCompare),
            (None, Some(compare)) => DiffResult {
                added_nodes: compare.nodes().to_vec(),
                added_connections: compare.connections().to_vec(),
                ..DiffResult::default()
            },
            (Some(base), None) => DiffResult {
                removed_nodes: base.nodes().to_vec(),
                removed_connections: base.connections().to_vec(),
                ..DiffResult::default()
            },
            (Some(base), Some(compare)) => Self::diff_both(base, compare),
        };

        debug!(
            added_nodes = result.added_nodes.len(),
            removed_nodes = result.removed_nodes.len(),
            modified_nodes = result.modified_nodes.len(),
            unmodified_nodes = result.unmodified_nodes.len(),
            added_connections = result.added_connections.len(),
            removed_connections = result.removed_connections.len(),
            unmodified_connections = result.unmodified_connections.len(),
            "Classified graph difference"
        );

        Ok(result)
    }

    fn diff_both(base: &GraphDocument, compare: &GraphDocument) -> DiffResult {
        let mut result = DiffResult::default();

        let base_nodes: HashMap<&str, &Node> = base
            .nodes()
            .iter()
            .map(|node| (node.id.as_str(), node))
            .collect();
        let compare_ids: HashSet<&str> = compare
            .nodes()
            .iter()
            .map(|node| node.id.as_str())
            .collect();

        for node in compare.nodes() {
            match base_nodes.get(node.id.as_str()) {
                None => result.added_nodes.push(node.clone()),
                Some(previous) if previous.data == node.data => {
                    result.unmodified_nodes.push(node.clone())
                }
                Some(previous) => {
                    let mut modified = node.clone();
                    modified.old_data = Some(previous.data.clone());
                    result.modified_nodes.push(modified);
                }
            }
        }

        result.removed_nodes = base
            .nodes()
            .iter()
            .filter(|node| !compare_ids.contains(node.id.as_str()))
            .cloned()
            .collect();

        let base_pairs: HashSet<(&str, &str)> =
            base.connections().iter().map(Connection::key).collect();
        let compare_pairs: HashSet<(&str, &str)> =
            compare.connections().iter().map(Connection::key).collect();

        for connection in compare.connections() {
            if base_pairs.contains(&connection.key()) {
                result.unmodified_connections.push(connection.clone());
            } else {
                result.added_connections.push(connection.clone());
            }
        }

        result.removed_connections = base
            .connections()
            .iter()
            .filter(|connection| !compare_pairs.contains(&connection.key()))
            .cloned()
            .collect();

        result
    }
}
