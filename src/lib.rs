//! avlkit: an AVL tree workbench.
//!
//! The core lives in [`domain`]: a height-balanced binary search tree over
//! `i64` keys with a newline-delimited pre-order snapshot format. The
//! [`infrastructure`] layer handles snapshot files, and [`cli`] provides
//! the interactive session plus scriptable subcommands.
//!
//! A single [`domain::AvlTree`] is not safe for simultaneous use from
//! multiple threads of control; callers needing shared access must
//! serialize it externally. The tree performs no internal locking.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
