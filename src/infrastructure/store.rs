//! Snapshot files: the only place the core touches external storage.
//!
//! Handles are scoped to these functions and released on every exit path,
//! including mid-parse failures. Errors propagate without retries.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::domain::{self, AvlTree};
use crate::infrastructure::error::{InfraError, InfraResult};

/// Write `tree` to the snapshot file at `path`, creating or truncating it.
#[instrument(skip(tree))]
pub fn save(tree: &AvlTree, path: &Path) -> InfraResult<()> {
    let file = File::create(path)
        .map_err(|e| InfraError::io(format!("create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    domain::write_preorder(tree, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    debug!(path = %path.display(), "snapshot saved");
    Ok(())
}

/// Load a tree from the snapshot file at `path`.
///
/// All-or-nothing: returns a fully decoded tree or an error; never a
/// partial structure.
#[instrument]
pub fn load(path: &Path) -> InfraResult<AvlTree> {
    let file =
        File::open(path).map_err(|e| InfraError::io(format!("open {}", path.display()), e))?;
    let tree = domain::read_preorder(BufReader::new(file))?;
    debug!(path = %path.display(), "snapshot loaded");
    Ok(tree)
}
