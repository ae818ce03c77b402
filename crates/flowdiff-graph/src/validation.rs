use std::collections::HashSet;

use serde_json::Value;

use crate::error::{Endpoint, GraphError};
use crate::graph::{Connection, Node};

/// Resolves connection endpoints against the nodes materialized so far
pub struct EndpointValidator<'a> {
    node_ids: HashSet<&'a str>,
}

impl<'a> EndpointValidator<'a> {
    /// Create a validator over the given nodes
    pub fn new(nodes: &'a [Node]) -> Self {
        Self {
            node_ids: nodes.iter().map(|node| node.id.as_str()).collect(),
        }
    }

    /// Check that both ends of a connection exist, source first
    pub fn validate(&self, connection: &Connection, index: usize) -> Result<(), GraphError> {
        if !self.node_ids.contains(connection.source_port.as_str()) {
            return Err(GraphError::DanglingEndpoint {
                endpoint: Endpoint::Source,
                node_id: connection.source_port.clone(),
                index,
            });
        }
        if !self.node_ids.contains(connection.target_port.as_str()) {
            return Err(GraphError::DanglingEndpoint {
                endpoint: Endpoint::Target,
                node_id: connection.target_port.clone(),
                index,
            });
        }
        Ok(())
    }
}

/// Read one serialized connection entry: `{"sourcePort": {"node": ..}, "targetPort": {"node": ..}}`
pub fn read_connection(entry: &Value, index: usize) -> Result<Connection, GraphError> {
    let entry = entry.as_object().ok_or_else(|| {
        GraphError::schema(format!("connections[{}] is not an object", index))
    })?;

    let port_node = |field: &str| -> Result<String, GraphError> {
        entry
            .get(field)
            .and_then(|port| port.get("node"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                GraphError::schema(format!("connections[{}].{}.node is missing", index, field))
            })
    };

    Ok(Connection::new(port_node("sourcePort")?, port_node("targetPort")?))
}
