//! # Flowdiff Graph
//!
//! The graph model shared by every flowdiff crate. A flow document is a JSON
//! object with a `nodes` mapping, a `connections` sequence and a `parameters`
//! field; this crate parses such documents into a [`GraphDocument`],
//! validates that every connection points at existing nodes, and decomposes
//! graphs into forests of [`RootedTree`]s for hierarchical layout.
//!
//! ## Example
//!
//! ```
//! use flowdiff_graph::{stratify, GraphDocument};
//!
//! let json = r#"{
//!     "nodes": {
//!         "a": {"name": "Read sensor"},
//!         "b": {"name": "Filter"},
//!         "c": {"name": "Publish"}
//!     },
//!     "connections": [
//!         {"sourcePort": {"node": "a"}, "targetPort": {"node": "b"}},
//!         {"sourcePort": {"node": "b"}, "targetPort": {"node": "c"}}
//!     ],
//!     "parameters": {}
//! }"#;
//!
//! let graph = GraphDocument::parse(json).unwrap();
//! assert_eq!(graph.nodes().len(), 3);
//!
//! let forest = stratify(&graph);
//! assert_eq!(forest.len(), 1);
//! assert_eq!(forest[0].layout_size(), (3, 1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod parser;
mod validation;

pub mod graph;
pub mod layout;

pub use error::{Endpoint, GraphError};
pub use graph::{Attributes, ChangeStatus, Connection, GraphDocument, Node, UNNAMED};
pub use layout::{stratify, RootedTree};
