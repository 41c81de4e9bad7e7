//! Sideways ASCII rendering of the tree shape.
//!
//! The right subtree is printed above its node and the left subtree below,
//! so the output reads like the tree rotated 90° counter-clockwise. Branch
//! connectors (`┌── `, `└── `) and continuation prefixes (`│   `) encode
//! nesting depth and which side a subtree hangs from.

use crate::domain::tree::{AvlTree, Node};

/// Rendering of an empty tree.
pub const EMPTY_TREE: &str = "(empty tree)";

impl AvlTree {
    /// Human-readable rendering; every node appears exactly once.
    pub fn render(&self) -> String {
        match &self.root {
            None => format!("{EMPTY_TREE}\n"),
            Some(root) => {
                let mut out = String::new();
                render_node(root, "", true, &mut out);
                out
            }
        }
    }
}

fn render_node(node: &Node, prefix: &str, is_left: bool, out: &mut String) {
    if let Some(right) = &node.right {
        let above = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        render_node(right, &above, false, out);
    }

    out.push_str(prefix);
    out.push_str(if is_left { "└── " } else { "┌── " });
    out.push_str(&node.key.to_string());
    out.push('\n');

    if let Some(left) = &node.left {
        let below = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        render_node(left, &below, true, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[i64]) -> AvlTree {
        let mut tree = AvlTree::new();
        for &k in keys {
            tree.insert(k);
        }
        tree
    }

    #[test]
    fn empty_tree_renders_distinct_indicator() {
        assert_eq!(AvlTree::new().render(), "(empty tree)\n");
    }

    #[test]
    fn single_node_renders_as_root_line() {
        assert_eq!(tree_of(&[42]).render(), "└── 42\n");
    }

    #[test]
    fn balanced_triple_puts_right_subtree_on_top() {
        let rendered = tree_of(&[10, 20, 30]).render();
        assert_eq!(rendered, "│   ┌── 30\n└── 20\n    └── 10\n");
    }

    #[test]
    fn every_key_appears_exactly_once() {
        let keys = [50, 20, 70, 10, 30, 60, 80];
        let rendered = tree_of(&keys).render();
        for key in keys {
            assert_eq!(
                rendered.matches(&key.to_string()).count(),
                1,
                "key {key} should appear once in:\n{rendered}"
            );
        }
    }
}
