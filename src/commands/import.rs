use crate::libs::{config::Config, messages::Message, session::Session};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// File to read (canonical or legacy format)
    path: PathBuf,
}

/// Loads a task file and writes it over the working file.
///
/// Legacy `daily_tasks` files come out in the canonical format.
pub fn cmd(import_args: ImportArgs, file: Option<&Path>) -> Result<()> {
    let config = Config::read()?;
    let target = config.tasks_file(file)?;

    let mut session = Session::new();
    if !session.load_from(&import_args.path) {
        msg_bail_anyhow!(Message::ImportFailed(import_args.path.display().to_string()));
    }
    if !session.save_as(&target) {
        msg_bail_anyhow!(Message::ImportFailed(import_args.path.display().to_string()));
    }

    msg_success!(Message::TasksImported(import_args.path.display().to_string()));
    Ok(())
}
