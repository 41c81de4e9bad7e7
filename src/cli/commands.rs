//! Command dispatch: subcommands plus the default interactive session

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::cli::session::Session;
use crate::config::Settings;
use crate::domain::{AvlTree, Key};
use crate::infrastructure::store;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => run_session(cli),
        Some(Commands::Show { file }) => show(file),
        Some(Commands::Insert { file, keys }) => insert(file, keys),
        Some(Commands::Remove { file, keys }) => remove(file, keys),
        Some(Commands::Config) => show_config(),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell);
            Ok(())
        }
    }
}

#[instrument(skip(cli))]
fn run_session(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let stdin = io::stdin();
    let mut session = Session::new(settings, stdin.lock());
    if let Some(path) = &cli.snapshot {
        session.set_tree(store::load(path)?);
        debug!(path = %path.display(), "preloaded snapshot");
    }
    session.run()
}

#[instrument]
fn show(file: &Path) -> CliResult<()> {
    let tree = store::load(file)?;
    print!("{}", tree.render());
    Ok(())
}

#[instrument]
fn insert(file: &Path, keys: &[Key]) -> CliResult<()> {
    let mut tree = if file.exists() {
        store::load(file)?
    } else {
        debug!(file = %file.display(), "starting a fresh snapshot");
        AvlTree::new()
    };
    for &key in keys {
        tree.insert(key);
    }
    store::save(&tree, file)?;
    output::success(&format!("inserted {} key(s) into {}", keys.len(), file.display()));
    print!("{}", tree.render());
    Ok(())
}

#[instrument]
fn remove(file: &Path, keys: &[Key]) -> CliResult<()> {
    let mut tree = store::load(file)?;
    for &key in keys {
        tree.remove(key);
    }
    store::save(&tree, file)?;
    output::success(&format!("removed {} key(s) from {}", keys.len(), file.display()));
    print!("{}", tree.render());
    Ok(())
}

#[instrument]
fn show_config() -> CliResult<()> {
    let settings = Settings::load()?;
    print!("{}", settings.to_toml()?);
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
