/// Structural diffing of two graphs
pub mod diff;

/// Status tagging and the combined graph
pub mod status_graph;

/// Text summary of a combined graph
pub mod changelog;
