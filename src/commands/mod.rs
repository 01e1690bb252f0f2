pub mod add;
pub mod done;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod shell;
pub mod view;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task to a day")]
    Add(add::AddArgs),
    #[command(about = "Rename a task")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as done")]
    Done(done::StatusArgs),
    #[command(about = "Mark a task as pending again")]
    Undo(done::StatusArgs),
    #[command(about = "Show tasks for one day or for the whole week")]
    View(view::ViewArgs),
    #[command(about = "Save the tasks to another file")]
    Export(export::ExportArgs),
    #[command(about = "Load tasks from a file into the working file")]
    Import(import::ImportArgs),
    #[command(about = "Interactive prompt (add/edit/done/view/save/load/quit)")]
    Shell,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Task file to work with (overrides the configured one)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let file = cli.file.as_deref();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args, file),
            Commands::Edit(args) => edit::cmd(args, file),
            Commands::Done(args) => done::cmd(args, file, true),
            Commands::Undo(args) => done::cmd(args, file, false),
            Commands::View(args) => view::cmd(args, file),
            Commands::Export(args) => export::cmd(args, file),
            Commands::Import(args) => import::cmd(args, file),
            Commands::Shell => shell::cmd(file),
        }
    }
}

/// Opens the working task file for a one-shot command.
///
/// An existing file is loaded; a missing one is created from the empty
/// session. Either way the returned session autosaves to that file.
pub fn open_working_session(config: &Config, file: Option<&Path>) -> Result<Session> {
    let path = config.tasks_file(file)?;
    let mut session = Session::new();
    if path.exists() {
        session
            .load(&path)
            .map_err(|error| msg_error_anyhow!(Message::TasksLoadFailed(error.to_string())))?;
    } else {
        session
            .save(&path)
            .map_err(|error| msg_error_anyhow!(Message::TasksSaveFailed(error.to_string())))?;
    }
    Ok(session)
}
