use super::open_working_session;
use crate::libs::{config::Config, messages::Message};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file
    path: PathBuf,
}

/// Writes the working tasks to another file in the canonical format.
///
/// The working file stays the same; the export is a one-off copy.
pub fn cmd(export_args: ExportArgs, file: Option<&Path>) -> Result<()> {
    let config = Config::read()?;
    let mut session = open_working_session(&config, file)?;
    if !session.save_as(&export_args.path) {
        msg_bail_anyhow!(Message::ExportFailed(export_args.path.display().to_string()));
    }
    Ok(())
}
