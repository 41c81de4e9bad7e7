//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::Key;

/// Interactive AVL tree workbench: balanced inserts and removals, ASCII
/// rendering, snapshot persistence. Without a subcommand, starts the
/// interactive session.
#[derive(Parser, Debug)]
#[command(name = "avlkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Snapshot file to preload into the interactive session
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree stored in a snapshot file
    Show {
        /// Snapshot file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Insert keys into a snapshot (created if missing)
    Insert {
        /// Snapshot file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Keys to insert
        #[arg(required = true)]
        keys: Vec<Key>,
    },

    /// Remove keys from a snapshot (absent keys are ignored)
    Remove {
        /// Snapshot file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Keys to remove
        #[arg(required = true)]
        keys: Vec<Key>,
    },

    /// Show effective configuration
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
