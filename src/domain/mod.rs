//! Domain layer: the AVL tree, its snapshot codec, and rendering
//!
//! This layer is independent of external concerns (no files, no CLI, no
//! config loading); the codec works against generic `Read`/`Write` sinks.

pub mod codec;
pub mod error;
pub mod render;
pub mod tree;

pub use codec::{read_preorder, write_preorder, SENTINEL};
pub use error::{SnapshotError, SnapshotResult};
pub use render::EMPTY_TREE;
pub use tree::{AvlTree, Key};
