//! Rendering of a comparison for stdout

use std::fmt::Write;

use anyhow::Context;
use flowdiff_core::{ComparisonService, StatusGraph};
use flowdiff_graph::RootedTree;
use serde::Serialize;

use crate::config::OutputFormat;

/// Viewport size of one tree of the layout forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeLayout<'a> {
    /// Id of the tree's root node
    pub root: &'a str,
    /// Number of levels
    pub depth: usize,
    /// Most nodes on any one level
    pub max_width: usize,
    /// Total number of nodes
    pub size: usize,
}

impl<'a> TreeLayout<'a> {
    fn of(tree: &'a RootedTree) -> Self {
        let (depth, max_width) = tree.layout_size();
        Self {
            root: &tree.data.id,
            depth,
            max_width,
            size: tree.size(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    status_graph: &'a StatusGraph,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<Vec<TreeLayout<'a>>>,
}

/// Layout sizes of every tree in the comparison's forest
pub fn tree_layouts(service: &ComparisonService) -> Vec<TreeLayout<'_>> {
    service.forest().iter().map(TreeLayout::of).collect()
}

/// Render a comparison in the requested format
pub fn render(
    service: &ComparisonService,
    format: OutputFormat,
    layout: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(service, layout)),
        OutputFormat::Json => {
            let report = JsonReport {
                status_graph: service.status_graph(),
                layout: layout.then(|| tree_layouts(service)),
            };
            let mut out =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(service: &ComparisonService, layout: bool) -> String {
    let mut out = service.changelog().to_string();

    if layout {
        out.push_str("Layout:\n");
        for tree in tree_layouts(service) {
            // writing to a String cannot fail
            let _ = writeln!(
                out,
                "  {} (depth {}, width {}, {} nodes)",
                tree.root, tree.depth, tree.max_width, tree.size
            );
        }
    }

    out
}
