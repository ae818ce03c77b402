use serde_json::Value;
use tracing::debug;

use crate::error::GraphError;
use crate::graph::{GraphDocument, Node};
use crate::validation::{read_connection, EndpointValidator};

/// Top-level fields every flow document must carry
const REQUIRED_FIELDS: [&str; 3] = ["nodes", "connections", "parameters"];

/// Parse a JSON string into a GraphDocument.
///
/// Nodes are materialized in the key order of the `nodes` mapping, then each
/// connection is read and checked against those nodes, in array order. The
/// first failure aborts the whole parse.
pub fn parse_graph_document(text: &str) -> Result<GraphDocument, GraphError> {
    let json: Value = serde_json::from_str(text).map_err(GraphError::MalformedInput)?;

    let root = match json.as_object() {
        Some(root) => root,
        None => return Err(GraphError::schema("document root is not an object")),
    };

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|field| !root.contains_key(**field)) {
        return Err(GraphError::schema(format!("missing top-level field '{}'", missing)));
    }

    let raw_nodes = root["nodes"]
        .as_object()
        .ok_or_else(|| GraphError::schema("'nodes' is not a mapping"))?;
    let raw_connections = root["connections"]
        .as_array()
        .ok_or_else(|| GraphError::schema("'connections' is not a sequence"))?;

    let mut nodes = Vec::with_capacity(raw_nodes.len());
    for (id, attributes) in raw_nodes {
        let data = attributes.as_object().ok_or_else(|| {
            GraphError::schema(format!("attributes of node '{}' are not a mapping", id))
        })?;
        nodes.push(Node::new(id.clone(), data.clone()));
    }

    let validator = EndpointValidator::new(&nodes);
    let mut connections = Vec::with_capacity(raw_connections.len());
    for (index, entry) in raw_connections.iter().enumerate() {
        let connection = read_connection(entry, index)?;
        validator.validate(&connection, index)?;
        connections.push(connection);
    }

    debug!(
        nodes = nodes.len(),
        connections = connections.len(),
        "Parsed graph document"
    );

    Ok(GraphDocument::from_parts(nodes, connections).with_parameters(root["parameters"].clone()))
}
