use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::RootedTree;
use crate::graph::{GraphDocument, Node};

/// Decompose a graph into a forest of rooted trees for hierarchical layout.
///
/// Roots are tried in ascending `(in-degree, id)` order, so nodes without
/// incoming edges come first. From each unvisited root a depth-first walk
/// follows successors in ascending id order; an edge into an already visited
/// node contributes no tree edge, which lets cycles and shared targets
/// stratify into a spanning forest. Connections naming ids that are not in the
/// graph are ignored.
pub fn stratify(graph: &GraphDocument) -> Vec<RootedTree> {
    let mut lookup: HashMap<&str, &Node> = HashMap::with_capacity(graph.nodes().len());
    let mut in_degree: HashMap<&str, usize> = HashMap::with_capacity(graph.nodes().len());
    let mut successors: HashMap<&str, Vec<&str>> = HashMap::with_capacity(graph.nodes().len());

    for node in graph.nodes() {
        let id = node.id.as_str();
        lookup.insert(id, node);
        in_degree.insert(id, 0);
        successors.insert(id, Vec::new());
    }

    for connection in graph.connections() {
        let (source, target) = connection.key();
        if !lookup.contains_key(source) || !lookup.contains_key(target) {
            continue;
        }
        if let Some(degree) = in_degree.get_mut(target) {
            *degree += 1;
        }
        if let Some(targets) = successors.get_mut(source) {
            targets.push(target);
        }
    }
    for targets in successors.values_mut() {
        targets.sort_unstable();
    }

    let mut candidates: Vec<(usize, &str)> = in_degree
        .iter()
        .map(|(&id, &degree)| (degree, id))
        .collect();
    candidates.sort_unstable();

    let mut visited: HashSet<&str> = HashSet::with_capacity(lookup.len());
    let mut forest = Vec::new();

    for (_, root) in candidates {
        if !visited.insert(root) {
            continue;
        }

        // Pre-order arena of the tree being grown: (node id, child slots).
        let mut arena: Vec<(&str, Vec<usize>)> = vec![(root, Vec::new())];
        let mut stack: Vec<(&str, usize)> = Vec::new();
        push_successors(&mut stack, &successors, root, 0);

        while let Some((id, parent)) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let slot = arena.len();
            arena.push((id, Vec::new()));
            arena[parent].1.push(slot);
            push_successors(&mut stack, &successors, id, slot);
        }

        forest.extend(assemble(arena, &lookup));
    }

    debug!(
        nodes = graph.nodes().len(),
        trees = forest.len(),
        "Stratified graph into forest"
    );

    forest
}

/// Push successors in descending id order so they pop in ascending order
fn push_successors<'a>(
    stack: &mut Vec<(&'a str, usize)>,
    successors: &HashMap<&'a str, Vec<&'a str>>,
    id: &'a str,
    slot: usize,
) {
    if let Some(targets) = successors.get(id) {
        stack.extend(targets.iter().rev().map(|&target| (target, slot)));
    }
}

/// Build the tree bottom-up; every child slot is greater than its parent's.
fn assemble(arena: Vec<(&str, Vec<usize>)>, lookup: &HashMap<&str, &Node>) -> Option<RootedTree> {
    let mut built: Vec<Option<RootedTree>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (slot, (id, child_slots)) in arena.into_iter().enumerate().rev() {
        let children = child_slots
            .into_iter()
            .filter_map(|child| built[child].take())
            .collect();
        let node = (*lookup.get(id)?).clone();
        built[slot] = Some(RootedTree::new(node, children));
    }

    built.into_iter().next().flatten()
}
