//! Pre-order-with-nulls snapshot codec.
//!
//! One token per line: the decimal key of a present node, or [`SENTINEL`]
//! for an absent child, written pre-order (node, left, right) from the
//! root. The stream encodes shape and values exactly, so no length or
//! count metadata is needed; an empty tree is a single sentinel line.

use std::io::{self, BufRead, Write};

use crate::domain::error::{SnapshotError, SnapshotResult};
use crate::domain::tree::{AvlTree, Key, Link, Node};

/// Token marking an absent child position.
pub const SENTINEL: &str = "#";

/// Write `tree` to `sink` as a pre-order token stream.
pub fn write_preorder<W: Write>(tree: &AvlTree, sink: &mut W) -> io::Result<()> {
    fn write_link<W: Write>(link: &Link, sink: &mut W) -> io::Result<()> {
        match link {
            None => writeln!(sink, "{SENTINEL}"),
            Some(node) => {
                writeln!(sink, "{}", node.key)?;
                write_link(&node.left, sink)?;
                write_link(&node.right, sink)
            }
        }
    }
    write_link(&tree.root, sink)
}

/// Rebuild a tree from a pre-order token stream.
///
/// Strict by choice: a stream that ends before the tree is complete is
/// rejected with [`SnapshotError::UnexpectedEof`] rather than silently
/// padding the remaining positions with absent subtrees, and any non-blank
/// token left over once the root subtree is complete is rejected with
/// [`SnapshotError::TrailingTokens`]. Node heights are recomputed
/// bottom-up from the children as they are built.
pub fn read_preorder<R: BufRead>(source: R) -> SnapshotResult<AvlTree> {
    let mut lines = source.lines();
    let mut line_no = 0;
    let root = read_link(&mut lines, &mut line_no)?;

    // Blank tail lines are tolerated (hand-edited files often end with
    // one); anything else after the root subtree is an error.
    for line in lines {
        line_no += 1;
        if !line?.trim().is_empty() {
            return Err(SnapshotError::TrailingTokens { line: line_no });
        }
    }

    Ok(AvlTree { root })
}

fn read_link<I>(lines: &mut I, line_no: &mut usize) -> SnapshotResult<Link>
where
    I: Iterator<Item = io::Result<String>>,
{
    *line_no += 1;
    let line = match lines.next() {
        None => return Err(SnapshotError::UnexpectedEof { line: *line_no }),
        Some(line) => line?,
    };

    let token = line.trim();
    if token == SENTINEL {
        return Ok(None);
    }

    let key: Key = token.parse().map_err(|_| SnapshotError::MalformedToken {
        line: *line_no,
        token: token.to_string(),
    })?;

    let mut node = Node::new(key);
    node.left = read_link(lines, line_no)?;
    node.right = read_link(lines, line_no)?;
    node.update_height();
    Ok(Some(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tree_of(keys: &[Key]) -> AvlTree {
        let mut tree = AvlTree::new();
        for &k in keys {
            tree.insert(k);
        }
        tree
    }

    fn encode(tree: &AvlTree) -> String {
        let mut buf = Vec::new();
        write_preorder(tree, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_tree_encodes_as_single_sentinel() {
        assert_eq!(encode(&AvlTree::new()), "#\n");
    }

    #[test]
    fn balanced_triple_encodes_preorder() {
        // 10,20,30 rotates to root 20
        assert_eq!(encode(&tree_of(&[10, 20, 30])), "20\n10\n#\n#\n30\n#\n#\n");
    }

    #[test]
    fn decoding_single_sentinel_yields_empty_tree() {
        let tree = read_preorder(Cursor::new("#\n")).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn round_trip_preserves_shape_and_keys() {
        let original = tree_of(&[50, 20, 70, 10, 30, 60, 80, 30]);
        let decoded = read_preorder(Cursor::new(encode(&original))).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.keys_inorder(), original.keys_inorder());
    }

    #[test]
    fn negative_keys_survive_the_round_trip() {
        let original = tree_of(&[-5, 0, -100, 42]);
        let decoded = read_preorder(Cursor::new(encode(&original))).unwrap();
        assert_eq!(decoded.keys_inorder(), original.keys_inorder());
    }

    #[test]
    fn malformed_token_is_rejected_with_position() {
        let err = read_preorder(Cursor::new("20\nten\n#\n#\n#\n")).unwrap_err();
        match err {
            SnapshotError::MalformedToken { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "ten");
            }
            other => panic!("expected MalformedToken, got {other:?}"),
        }
    }

    #[test]
    fn truncated_stream_is_rejected() {
        // Root with a left leaf but the stream stops mid-shape
        let err = read_preorder(Cursor::new("20\n10\n#\n")).unwrap_err();
        assert!(matches!(err, SnapshotError::UnexpectedEof { .. }));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = read_preorder(Cursor::new("#\n99\n")).unwrap_err();
        assert!(matches!(err, SnapshotError::TrailingTokens { line: 2 }));
    }

    #[test]
    fn trailing_blank_lines_are_tolerated() {
        let tree = read_preorder(Cursor::new("7\n#\n#\n\n")).unwrap();
        assert_eq!(tree.keys_inorder(), vec![7]);
    }

    #[test]
    fn decoded_heights_match_the_encoded_shape() {
        let original = tree_of(&(1..=15).collect::<Vec<_>>());
        let decoded = read_preorder(Cursor::new(encode(&original))).unwrap();
        assert_eq!(decoded.height(), original.height());
    }
}
