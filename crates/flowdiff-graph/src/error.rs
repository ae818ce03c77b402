use std::fmt;
use thiserror::Error;

/// Which end of a connection failed to resolve to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The `sourcePort` end
    Source,
    /// The `targetPort` end
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

/// All possible errors that can occur while reading a graph document
#[derive(Error, Debug)]
pub enum GraphError {
    /// The raw text is not well-formed JSON
    #[error("Not a valid JSON string")]
    MalformedInput(#[source] serde_json::Error),

    /// Well-formed JSON that does not have the expected document shape
    #[error("JSON file is not formatted correctly")]
    Schema {
        /// What exactly was wrong with the document
        detail: String,
    },

    /// A connection references a node id that does not exist in the document
    #[error("Not valid {endpoint} port")]
    DanglingEndpoint {
        /// The end of the connection that dangles
        endpoint: Endpoint,
        /// The node id that could not be found
        node_id: String,
        /// Position of the connection in the `connections` array
        index: usize,
    },
}

impl GraphError {
    /// Create a schema error with a detail message
    pub fn schema(detail: impl Into<String>) -> Self {
        GraphError::Schema { detail: detail.into() }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GraphError::MalformedInput(_) => "ERR_GRAPH_MALFORMED_INPUT",
            GraphError::Schema { .. } => "ERR_GRAPH_SCHEMA",
            GraphError::DanglingEndpoint { endpoint: Endpoint::Source, .. } => {
                "ERR_GRAPH_DANGLING_SOURCE"
            }
            GraphError::DanglingEndpoint { endpoint: Endpoint::Target, .. } => {
                "ERR_GRAPH_DANGLING_TARGET"
            }
        }
    }
}
