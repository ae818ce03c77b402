//! Nodes, connections, change statuses and the document that holds them.

mod connection;
mod node;
mod status;

pub use connection::Connection;
pub use node::{Attributes, Node, UNNAMED};
pub use status::ChangeStatus;

use serde::Serialize;
use serde_json::Value;

use crate::error::GraphError;
use crate::parser;

/// An ordered set of nodes and the connections between them
///
/// Built either by parsing a serialized flow document, which validates shape
/// and referential integrity, or by assembling already-built parts, which
/// validates nothing. The structure is never changed after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphDocument {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<Value>,
}

impl GraphDocument {
    /// Parse and validate a serialized flow document.
    ///
    /// # Errors
    ///
    /// * `GraphError::MalformedInput` if the text is not JSON
    /// * `GraphError::Schema` if `nodes`, `connections` or `parameters` is missing or mis-shaped
    /// * `GraphError::DanglingEndpoint` if a connection names an unknown node
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        parser::parse_graph_document(text)
    }

    /// Assemble a document from parts without any validation.
    ///
    /// Connections may reference ids that are not among `nodes`; this is how
    /// combined graphs mixing two sources and test fixtures are built.
    pub fn from_parts(nodes: Vec<Node>, connections: Vec<Connection>) -> Self {
        Self {
            nodes,
            connections,
            parameters: None,
        }
    }

    pub(crate) fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Nodes in document order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Connections in document order
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The `parameters` value of a parsed document
    pub fn parameters(&self) -> Option<&Value> {
        self.parameters.as_ref()
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// True when the document has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes tagged with `status`, in document order
    pub fn nodes_with_status(&self, status: ChangeStatus) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .iter()
            .filter(move |node| node.status == Some(status))
    }

    /// Connections tagged with `status`, in document order
    pub fn connections_with_status(
        &self,
        status: ChangeStatus,
    ) -> impl Iterator<Item = &Connection> + '_ {
        self.connections
            .iter()
            .filter(move |connection| connection.status == Some(status))
    }

    /// Take the nodes and connections out of the document
    pub fn into_parts(self) -> (Vec<Node>, Vec<Connection>) {
        (self.nodes, self.connections)
    }
}
