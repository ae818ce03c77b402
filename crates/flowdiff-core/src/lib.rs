//!
//! Flowdiff Core - structural comparison of flow graphs
//!
//! This crate classifies the nodes and connections of two versions of a flow
//! graph as added, removed, modified or unmodified, and synthesizes one
//! combined graph in which every element carries its change status.
//!
//! ```
//! use flowdiff_core::{StatusGraphBuilder, StructuralDiffEngine};
//! use flowdiff_graph::GraphDocument;
//!
//! let base = GraphDocument::parse(r#"{"nodes": {"a": {}}, "connections": [], "parameters": {}}"#).unwrap();
//! let compare = GraphDocument::parse(r#"{"nodes": {"a": {}, "b": {}}, "connections": [], "parameters": {}}"#).unwrap();
//!
//! let diff = StructuralDiffEngine::new().diff(Some(&base), Some(&compare)).unwrap();
//! let status_graph = StatusGraphBuilder::new().build(diff);
//!
//! assert_eq!(status_graph.added_nodes()[0].id, "b");
//! assert_eq!(status_graph.combined_graph().nodes().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - diffing, status tagging and summaries
pub mod domain;

/// Application services built on the domain layer
pub mod application;

/// Error types
pub mod error;

// Re-export main API types for easy use
pub use application::comparison_service::{ComparisonService, NodeDetail};
pub use domain::changelog::Changelog;
pub use domain::diff::{DiffResult, StructuralDiffEngine};
pub use domain::status_graph::{StatusGraph, StatusGraphBuilder};
pub use error::DiffError;

/// Diff two graphs and build the combined status graph in one call
pub fn compare(
    base: Option<&flowdiff_graph::GraphDocument>,
    compare: Option<&flowdiff_graph::GraphDocument>,
) -> Result<StatusGraph, DiffError> {
    let diff = StructuralDiffEngine::new().diff(base, compare)?;
    Ok(StatusGraphBuilder::new().build(diff))
}
