use std::borrow::Cow;

use flowdiff_graph::{stratify, Attributes, ChangeStatus, GraphDocument, RootedTree};
use once_cell::unsync::OnceCell;
use serde::Serialize;

use crate::domain::changelog::Changelog;
use crate::domain::diff::StructuralDiffEngine;
use crate::domain::status_graph::{StatusGraph, StatusGraphBuilder};
use crate::error::DiffError;

/// Everything a details panel needs to show about one node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetail<'a> {
    /// Node id
    pub id: &'a str,
    /// Human-readable name
    pub name: Cow<'a, str>,
    /// Classification of the node
    pub status: Option<ChangeStatus>,
    /// Attributes as they are now (as they were, for a removed node)
    pub data: &'a Attributes,
    /// Attributes before the change, for modified nodes
    pub old_data: Option<&'a Attributes>,
}

/// A single comparison of a base and a compare graph
///
/// The diff and the combined graph are computed once on construction; the
/// changelog and the layout forest are derived lazily on first use and
/// cached for the lifetime of the service.
#[derive(Debug)]
pub struct ComparisonService {
    base: Option<GraphDocument>,
    compare: Option<GraphDocument>,
    status_graph: StatusGraph,
    changelog: OnceCell<Changelog>,
    forest: OnceCell<Vec<RootedTree>>,
}

impl ComparisonService {
    /// Compare two already-parsed graphs
    pub fn new(
        base: Option<GraphDocument>,
        compare: Option<GraphDocument>,
    ) -> Result<Self, DiffError> {
        let diff = StructuralDiffEngine::new().diff(base.as_ref(), compare.as_ref())?;
        let status_graph = StatusGraphBuilder::new().build(diff);

        tracing::info!(
            nodes = status_graph.combined_graph().nodes().len(),
            added = status_graph.added_nodes().len(),
            removed = status_graph.removed_nodes().len(),
            modified = status_graph.modified_nodes().len(),
            "Flow comparison computed"
        );

        Ok(Self {
            base,
            compare,
            status_graph,
            changelog: OnceCell::new(),
            forest: OnceCell::new(),
        })
    }

    /// Parse both sides and compare them. An absent side stays absent.
    pub fn from_texts(base: Option<&str>, compare: Option<&str>) -> Result<Self, DiffError> {
        let base = base.map(GraphDocument::parse).transpose()?;
        let compare = compare.map(GraphDocument::parse).transpose()?;
        Self::new(base, compare)
    }

    /// The base graph, if one was supplied
    pub fn base_graph(&self) -> Option<&GraphDocument> {
        self.base.as_ref()
    }

    /// The compare graph, if one was supplied
    pub fn compare_graph(&self) -> Option<&GraphDocument> {
        self.compare.as_ref()
    }

    /// The tagged combined graph and its classified slices
    pub fn status_graph(&self) -> &StatusGraph {
        &self.status_graph
    }

    /// Text summary of the comparison
    pub fn changelog(&self) -> &Changelog {
        self.changelog
            .get_or_init(|| Changelog::from_graph(self.status_graph.combined_graph()))
    }

    /// Layout forest of the combined graph
    pub fn forest(&self) -> &[RootedTree] {
        self.forest
            .get_or_init(|| stratify(self.status_graph.combined_graph()))
    }

    /// Look up one node of the combined graph
    pub fn detail(&self, id: &str) -> Option<NodeDetail<'_>> {
        self.status_graph.combined_graph().node(id).map(|node| NodeDetail {
            id: &node.id,
            name: node.display_name(),
            status: node.status,
            data: &node.data,
            old_data: node.old_data.as_ref(),
        })
    }
}
