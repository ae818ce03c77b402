//! Hierarchical layout support: rooted trees and graph stratification.

mod stratify;
mod tree;

pub use stratify::stratify;
pub use tree::RootedTree;
