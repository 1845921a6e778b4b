//! Build a nested forest from slash-delimited module paths.
//!
//! Example: `["src/a.js", "src/lib/b.js"]` becomes
//! `src -> [src/a.js, src/lib -> [src/lib/b.js]]`.

use super::TreeNode;
use crate::aggregator::ModuleIndex;
use log::{debug, warn};
use std::collections::HashMap;

/// Trie node used during construction only
///
/// Keeps an ordered child list plus a segment -> position map so repeated
/// prefixes resolve to the same node.
#[derive(Debug, Default)]
struct BuilderNode {
    segment: String,
    path: String,
    value: Option<u64>,
    children: Vec<BuilderNode>,
    positions: HashMap<String, usize>,
}

impl BuilderNode {
    fn child(&mut self, segment: &str, path: &str, index: &ModuleIndex) -> &mut BuilderNode {
        let position = match self.positions.get(segment) {
            Some(&position) => position,
            None => {
                self.children.push(BuilderNode {
                    segment: segment.to_string(),
                    path: path.to_string(),
                    value: index.size_for_path(path),
                    ..Default::default()
                });
                let position = self.children.len() - 1;
                self.positions.insert(segment.to_string(), position);
                position
            }
        };
        &mut self.children[position]
    }

    fn into_tree_node(self) -> TreeNode {
        if self.children.is_empty() && self.value.is_none() {
            warn!("No module matches {}; rendering without a size", self.path);
        }

        TreeNode {
            name: self.segment,
            path: self.path,
            value: self.value,
            children: self
                .children
                .into_iter()
                .map(BuilderNode::into_tree_node)
                .collect(),
        }
    }
}

/// Build the forest for a set of module paths
///
/// **Public** - main entry point for tree construction
///
/// # Arguments
/// * `paths` - Slash-delimited module paths, any order, without `./`
/// * `index` - Size lookup; each node's value is resolved on first visit
///
/// # Returns
/// Top-level nodes in sorted path order. Names are the last path segment
/// until [`compact`](super::compact) relabels them.
pub fn build_tree<S: AsRef<str>>(paths: &[S], index: &ModuleIndex) -> Vec<TreeNode> {
    let mut sorted: Vec<&str> = paths.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    let mut root = BuilderNode::default();

    for path in &sorted {
        let mut current = &mut root;
        let mut prefix = String::with_capacity(path.len());

        for (i, segment) in path.split('/').enumerate() {
            if i > 0 {
                prefix.push('/');
            }
            prefix.push_str(segment);
            current = current.child(segment, &prefix, index);
        }
    }

    debug!(
        "Built tree from {} paths: {} top-level nodes",
        sorted.len(),
        root.children.len()
    );

    root.children
        .into_iter()
        .map(BuilderNode::into_tree_node)
        .collect()
}
