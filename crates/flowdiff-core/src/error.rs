use flowdiff_graph::GraphError;
use thiserror::Error;

/// Core error type for comparing flow graphs
#[derive(Error, Debug)]
pub enum DiffError {
    /// Neither a base nor a compare graph was supplied
    #[error("No graphs to compare")]
    NoGraphsToCompare,

    /// One side could not be read as a graph document
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl DiffError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DiffError::NoGraphsToCompare => "ERR_DIFF_NO_GRAPHS",
            DiffError::Graph(err) => err.error_code(),
        }
    }
}
