//! Structural compaction of a built forest.
//!
//! Two passes over owned nodes:
//! 1. Bottom-up: a node with exactly one child is replaced by that child, so
//!    `a/b/c/leaf.js` with no siblings becomes a single node.
//! 2. Top-down: every name is recomputed relative to the surviving parent.
//!
//! Collapsing must finish before relabelling; a name computed earlier would
//! be relative to an ancestor that pass 1 removes.

use super::TreeNode;
use log::debug;

/// Compact a forest
///
/// **Public** - main entry point for compaction
///
/// Leaf values and the forest total are preserved, and no node in the
/// result has exactly one child. Top-level nodes are labelled with their
/// full path.
pub fn compact(forest: Vec<TreeNode>) -> Vec<TreeNode> {
    let collapsed: Vec<TreeNode> = forest.into_iter().map(collapse).collect();

    debug!("Compacted forest: {} top-level nodes", collapsed.len());

    collapsed
        .into_iter()
        .map(|node| relabel(node, None))
        .collect()
}

/// Pass 1: children first, then replace a single-child node with its child
fn collapse(node: TreeNode) -> TreeNode {
    let TreeNode {
        name,
        path,
        value,
        children,
    } = node;

    let children: Vec<TreeNode> = children.into_iter().map(collapse).collect();

    match <[TreeNode; 1]>::try_from(children) {
        Ok([only]) => only,
        Err(children) => TreeNode {
            name,
            path,
            value,
            children,
        },
    }
}

/// Pass 2: parent first, then children against the parent's path
fn relabel(mut node: TreeNode, parent_path: Option<&str>) -> TreeNode {
    node.name = relative_name(&node.path, parent_path);

    let children = std::mem::take(&mut node.children);
    node.children = children
        .into_iter()
        .map(|child| relabel(child, Some(&node.path)))
        .collect();

    node
}

fn relative_name(path: &str, parent_path: Option<&str>) -> String {
    parent_path
        .and_then(|parent| path.strip_prefix(parent))
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
        .to_string()
}
