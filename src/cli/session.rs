//! Interactive session: a numbered menu loop that owns the tree state.
//!
//! The session holds the single long-lived [`AvlTree`]; there is no global
//! mutable state. Key parsing happens here, so parse failures never reach
//! the core: invalid input is reported and re-prompted. Snapshot errors are
//! reported and the session continues with its current tree (loads are
//! all-or-nothing, so a failed load never clobbers state).

use std::io::BufRead;
use std::path::PathBuf;

use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{AvlTree, Key};
use crate::infrastructure::store;

pub struct Session<R> {
    tree: AvlTree,
    settings: Settings,
    input: R,
}

impl<R: BufRead> Session<R> {
    pub fn new(settings: Settings, input: R) -> Self {
        Session {
            tree: AvlTree::new(),
            settings,
            input,
        }
    }

    /// Replace the session tree (used to preload a snapshot).
    pub fn set_tree(&mut self, tree: AvlTree) {
        self.tree = tree;
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.print_menu();
            let Some(choice) = self.read_line()? else {
                break;
            };
            match choice.trim() {
                "" => continue,
                "0" => break,
                "1" => self.insert_one()?,
                "2" => self.remove_one()?,
                "3" => self.display(),
                "4" => self.insert_many()?,
                "5" => self.remove_many()?,
                "6" => self.save()?,
                "7" => self.load()?,
                other => output::warning(&format!("unknown option: {other}")),
            }
        }
        Ok(())
    }

    fn print_menu(&self) {
        println!();
        output::header("avlkit");
        println!("  [1] insert a key");
        println!("  [2] remove a key");
        println!("  [3] display the tree");
        println!("  [4] insert a sequence of keys");
        println!("  [5] remove a sequence of keys");
        println!("  [6] save snapshot");
        println!("  [7] load snapshot");
        println!("  [0] quit");
        output::prompt("choice:");
    }

    fn display(&self) {
        print!("{}", self.tree.render());
    }

    fn insert_one(&mut self) -> CliResult<()> {
        if let Some(key) = self.read_key("key to insert (blank to cancel):")? {
            self.tree.insert(key);
            debug!(key, "inserted");
            self.display();
        }
        Ok(())
    }

    fn remove_one(&mut self) -> CliResult<()> {
        if let Some(key) = self.read_key("key to remove (blank to cancel):")? {
            self.tree.remove(key);
            debug!(key, "removed");
            self.display();
        }
        Ok(())
    }

    fn insert_many(&mut self) -> CliResult<()> {
        loop {
            match self.read_key("key to insert ('done' to finish):")? {
                None => break,
                Some(key) => {
                    self.tree.insert(key);
                    self.display();
                }
            }
        }
        Ok(())
    }

    fn remove_many(&mut self) -> CliResult<()> {
        loop {
            match self.read_key("key to remove ('done' to finish):")? {
                None => break,
                Some(key) => {
                    self.tree.remove(key);
                    self.display();
                }
            }
        }
        Ok(())
    }

    fn save(&mut self) -> CliResult<()> {
        let Some(path) = self.read_snapshot_path()? else {
            return Ok(());
        };
        match store::save(&self.tree, &path) {
            Ok(()) => output::success(&format!("saved to {}", path.display())),
            Err(e) => output::error(&e),
        }
        Ok(())
    }

    fn load(&mut self) -> CliResult<()> {
        let Some(path) = self.read_snapshot_path()? else {
            return Ok(());
        };
        match store::load(&path) {
            Ok(tree) => {
                self.tree = tree;
                output::success(&format!("loaded from {}", path.display()));
                self.display();
            }
            // current tree stays as-is
            Err(e) => output::error(&e),
        }
        Ok(())
    }

    /// Prompt until a valid integer arrives; `None` on blank/'done'/EOF.
    fn read_key(&mut self, label: &str) -> CliResult<Option<Key>> {
        loop {
            output::prompt(label);
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let text = line.trim();
            if text.is_empty() || text.eq_ignore_ascii_case("done") {
                return Ok(None);
            }
            match text.parse::<Key>() {
                Ok(key) => return Ok(Some(key)),
                Err(_) => output::warning(&format!("not an integer: {text:?}")),
            }
        }
    }

    fn read_snapshot_path(&mut self) -> CliResult<Option<PathBuf>> {
        let default = self.settings.snapshot_path.clone();
        output::prompt(&format!("snapshot path [{}]:", default.display()));
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let text = line.trim();
        if text.is_empty() {
            return Ok(Some(default));
        }
        Ok(Some(PathBuf::from(text)))
    }

    /// One line of input; `None` once the stream is exhausted.
    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(CliError::Stdin)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
