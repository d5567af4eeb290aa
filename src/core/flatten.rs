//! Leaf path flattening.
//!
//! Turns a parsed document into dot-joined paths to every leaf. Traversal
//! uses an explicit stack so deeply nested documents cannot exhaust the
//! call stack.

use crate::core::data::{LeafPaths, LeafValue, Node};

/// Collect the dot-joined path of every leaf under `root`.
///
/// Scalars and empty mappings are leaves. The root itself never produces a
/// path: an empty document yields an empty set.
pub fn flatten(root: &Node) -> LeafPaths {
    let mut paths = LeafPaths::new();
    walk_leaves(root, |path, _| {
        paths.insert(path);
    });
    paths
}

/// Like `flatten`, but also returns the value found at each leaf.
///
/// Entries come out in document order. A path produced twice (a dotted key
/// colliding with a nested one) is reported each time it occurs.
pub fn flatten_entries(root: &Node) -> Vec<(String, LeafValue<'_>)> {
    let mut entries = Vec::new();
    walk_leaves(root, |path, node| {
        let value = match node {
            Node::Scalar(value) => LeafValue::Scalar(value.as_str()),
            Node::Mapping(_) => LeafValue::EmptyMapping,
        };
        entries.push((path, value));
    });
    entries
}

fn walk_leaves<'a>(root: &'a Node, mut visit: impl FnMut(String, &'a Node)) {
    let Some(mapping) = root.as_mapping() else {
        return;
    };

    // Children are pushed in reverse so they pop in document order.
    let mut stack: Vec<(String, &'a Node)> = mapping
        .iter()
        .rev()
        .map(|(key, node)| (key.to_string(), node))
        .collect();

    while let Some((path, node)) = stack.pop() {
        match node {
            Node::Mapping(children) if !children.is_empty() => {
                stack.extend(
                    children
                        .iter()
                        .rev()
                        .map(|(key, child)| (format!("{}.{}", path, key), child)),
                );
            }
            _ => visit(path, node),
        }
    }
}
