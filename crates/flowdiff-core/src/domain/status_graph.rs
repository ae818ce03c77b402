use std::ops::Range;

use flowdiff_graph::{ChangeStatus, Connection, GraphDocument, Node};
use serde::Serialize;
use tracing::debug;

use super::diff::DiffResult;

/// The combined graph of a comparison, every element tagged with its status
///
/// Nodes are laid out Added, Removed, Modified, Unmodified and connections
/// Added, Removed, Unmodified. Downstream layout iterates in this order, so it
/// is part of the contract. Each classified sequence is a contiguous slice of
/// the combined graph rather than a separate copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusGraph {
    #[serde(rename = "combinedGraph")]
    combined: GraphDocument,
    #[serde(skip)]
    node_ranges: [Range<usize>; 4],
    #[serde(skip)]
    connection_ranges: [Range<usize>; 3],
}

impl StatusGraph {
    /// The union of base and compare elements
    pub fn combined_graph(&self) -> &GraphDocument {
        &self.combined
    }

    /// Give up the classified slices and keep only the combined graph
    pub fn into_combined_graph(self) -> GraphDocument {
        self.combined
    }

    /// Nodes classified Added
    pub fn added_nodes(&self) -> &[Node] {
        self.node_slice(0)
    }

    /// Nodes classified Removed
    pub fn removed_nodes(&self) -> &[Node] {
        self.node_slice(1)
    }

    /// Nodes classified Modified
    pub fn modified_nodes(&self) -> &[Node] {
        self.node_slice(2)
    }

    /// Nodes classified Unmodified
    pub fn unmodified_nodes(&self) -> &[Node] {
        self.node_slice(3)
    }

    /// Connections classified Added
    pub fn added_connections(&self) -> &[Connection] {
        self.connection_slice(0)
    }

    /// Connections classified Removed
    pub fn removed_connections(&self) -> &[Connection] {
        self.connection_slice(1)
    }

    /// Connections classified Unmodified
    pub fn unmodified_connections(&self) -> &[Connection] {
        self.connection_slice(2)
    }

    /// Nodes carrying `status`
    pub fn nodes(&self, status: ChangeStatus) -> &[Node] {
        match status {
            ChangeStatus::Added => self.added_nodes(),
            ChangeStatus::Removed => self.removed_nodes(),
            ChangeStatus::Modified => self.modified_nodes(),
            ChangeStatus::Unmodified => self.unmodified_nodes(),
        }
    }

    /// Connections carrying `status`; always empty for Modified
    pub fn connections(&self, status: ChangeStatus) -> &[Connection] {
        match status {
            ChangeStatus::Added => self.added_connections(),
            ChangeStatus::Removed => self.removed_connections(),
            ChangeStatus::Modified => &[],
            ChangeStatus::Unmodified => self.unmodified_connections(),
        }
    }

    /// Check that filtering the combined graph by status reproduces every
    /// classified slice, element for element and in order
    pub fn is_consistent(&self) -> bool {
        ChangeStatus::ALL.iter().all(|&status| {
            self.combined.nodes_with_status(status).eq(self.nodes(status).iter())
                && self
                    .combined
                    .connections_with_status(status)
                    .eq(self.connections(status).iter())
        }) && self.combined.nodes().iter().all(|node| node.status.is_some())
            && self
                .combined
                .connections()
                .iter()
                .all(|connection| connection.status.is_some())
    }

    fn node_slice(&self, index: usize) -> &[Node] {
        &self.combined.nodes()[self.node_ranges[index].clone()]
    }

    fn connection_slice(&self, index: usize) -> &[Connection] {
        &self.combined.connections()[self.connection_ranges[index].clone()]
    }
}

/// Tags diff output with statuses and assembles the combined graph
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusGraphBuilder;

impl StatusGraphBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        StatusGraphBuilder
    }

    /// Consume a diff result, tag every element and concatenate the classes.
    ///
    /// The diff result owns its elements, so tagging cannot leak into the
    /// graphs the diff was computed from.
    pub fn build(&self, diff: DiffResult) -> StatusGraph {
        let DiffResult {
            added_nodes,
            removed_nodes,
            modified_nodes,
            unmodified_nodes,
            added_connections,
            removed_connections,
            unmodified_connections,
        } = diff;

        let mut nodes = Vec::with_capacity(
            added_nodes.len() + removed_nodes.len() + modified_nodes.len() + unmodified_nodes.len(),
        );
        let node_ranges = [
            append_tagged(&mut nodes, added_nodes, ChangeStatus::Added, tag_node),
            append_tagged(&mut nodes, removed_nodes, ChangeStatus::Removed, tag_node),
            append_tagged(&mut nodes, modified_nodes, ChangeStatus::Modified, tag_node),
            append_tagged(&mut nodes, unmodified_nodes, ChangeStatus::Unmodified, tag_node),
        ];

        let mut connections = Vec::with_capacity(
            added_connections.len() + removed_connections.len() + unmodified_connections.len(),
        );
        let connection_ranges = [
            append_tagged(&mut connections, added_connections, ChangeStatus::Added, tag_connection),
            append_tagged(
                &mut connections,
                removed_connections,
                ChangeStatus::Removed,
                tag_connection,
            ),
            append_tagged(
                &mut connections,
                unmodified_connections,
                ChangeStatus::Unmodified,
                tag_connection,
            ),
        ];

        let status_graph = StatusGraph {
            combined: GraphDocument::from_parts(nodes, connections),
            node_ranges,
            connection_ranges,
        };
        debug_assert!(status_graph.is_consistent());

        debug!(
            nodes = status_graph.combined.nodes().len(),
            connections = status_graph.combined.connections().len(),
            "Built combined status graph"
        );

        status_graph
    }
}

fn tag_node(node: &mut Node, status: ChangeStatus) {
    node.status = Some(status);
}

fn tag_connection(connection: &mut Connection, status: ChangeStatus) {
    connection.status = Some(status);
}

fn append_tagged<T>(
    pool: &mut Vec<T>,
    items: Vec<T>,
    status: ChangeStatus,
    tag: fn(&mut T, ChangeStatus),
) -> Range<usize> {
    let start = pool.len();
    pool.extend(items.into_iter().map(|mut item| {
        tag(&mut item, status);
        item
    }));
    start..pool.len()
}
