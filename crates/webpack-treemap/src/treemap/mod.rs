//! Treemap hierarchy construction.
//!
//! Module paths are turned into a directory-like forest, then compacted so
//! chains of single-child directories collapse into one level with labels
//! relative to the nearest surviving ancestor.
//!
//! The serialized form (`{ name, path, value, children }`) is what chart
//! libraries consume as treemap data.

pub mod builder;
pub mod compactor;

pub use builder::build_tree;
pub use compactor::compact;

use serde::{Deserialize, Serialize};

/// A directory-like grouping or a leaf module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Label relative to the parent node
    pub name: String,

    /// Full slash-joined path from the tree root
    pub path: String,

    /// Size in bytes; `None` when the path matched no module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,

    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(path: impl Into<String>, value: Option<u64>) -> Self {
        let path = path.into();
        Self {
            name: path.clone(),
            path,
            value,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Sum of leaf values below (and including) this node
    ///
    /// Leaves without a value count as zero.
    pub fn total_value(&self) -> u64 {
        if self.is_leaf() {
            self.value.unwrap_or(0)
        } else {
            self.children.iter().map(TreeNode::total_value).sum()
        }
    }

    /// Number of leaves below (and including) this node
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(TreeNode::leaf_count).sum()
        }
    }

    /// Depth-first search for a node by full path
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(path))
    }
}

/// Sum of leaf values over a forest
pub fn forest_total(forest: &[TreeNode]) -> u64 {
    forest.iter().map(TreeNode::total_value).sum()
}
