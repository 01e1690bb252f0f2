//! Interactive prompt loop.
//!
//! Reads one command at a time (`add`, `edit`, `done`, `view`, `save`,
//! `load`, `quit`) and asks for whatever that command needs. The session
//! starts empty; once `save` or `load` succeeds, every change is autosaved
//! to that file.
//!
//! Prompting goes through [`ShellInput`] so the loop can be driven by a
//! script in tests. [`TerminalInput`] is the `dialoguer` implementation.

use crate::libs::{
    bucket::{self, CANONICAL_BUCKETS},
    data_storage::DEFAULT_TASKS_FILE,
    messages::Message,
    session::Session,
    view::View,
};
use crate::{msg_error, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, Write};
use std::path::Path;

pub const COMMANDS: [&str; 7] = ["add", "edit", "done", "view", "save", "load", "quit"];

/// Source of answers for the shell prompts.
pub trait ShellInput {
    /// Next command, lowercased.
    fn command(&mut self) -> Result<String>;
    /// A canonical bucket name, or an empty string.
    fn day(&mut self) -> Result<String>;
    fn index(&mut self) -> Result<u32>;
    fn task_name(&mut self) -> Result<String>;
    /// File name, already defaulted when left blank.
    fn filename(&mut self, default: &str) -> Result<String>;
}

pub struct TerminalInput {
    theme: ColorfulTheme,
}

impl Default for TerminalInput {
    fn default() -> Self {
        TerminalInput {
            theme: ColorfulTheme::default(),
        }
    }
}

impl ShellInput for TerminalInput {
    fn command(&mut self) -> Result<String> {
        let command: String = Input::with_theme(&self.theme)
            .with_prompt(format!("{} ({})", Message::PromptCommand, COMMANDS.join("/")))
            .allow_empty(true)
            .interact_text()?;
        Ok(command.trim().to_lowercase())
    }

    fn day(&mut self) -> Result<String> {
        let day: String = Input::with_theme(&self.theme)
            .with_prompt(Message::PromptDay.to_string())
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                let day = bucket::lookup_key(input);
                if day.is_empty() || CANONICAL_BUCKETS.contains(&day.as_str()) {
                    Ok(())
                } else {
                    Err(Message::InvalidDay(input.clone()).to_string())
                }
            })
            .interact_text()?;
        Ok(bucket::lookup_key(&day))
    }

    fn index(&mut self) -> Result<u32> {
        let index: u32 = Input::with_theme(&self.theme)
            .with_prompt(Message::PromptTaskIndex.to_string())
            .interact_text()?;
        Ok(index)
    }

    fn task_name(&mut self) -> Result<String> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt(Message::PromptTaskName.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(name.trim().to_string())
    }

    fn filename(&mut self, default: &str) -> Result<String> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt(Message::PromptFilename(default.to_string()).to_string())
            .allow_empty(true)
            .interact_text()?;
        let name = name.trim();
        Ok(if name.is_empty() { default.to_string() } else { name.to_string() })
    }
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<I, W> {
    session: Session,
    input: I,
    out: W,
}

impl<I: ShellInput, W: Write> Shell<I, W> {
    pub fn new(session: Session, input: I, out: W) -> Self {
        Shell { session, input, out }
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.out)
    }

    /// Runs commands until `quit`.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    /// Reads and executes a single command.
    pub fn step(&mut self) -> Result<Flow> {
        let command = self.input.command()?;
        match command.as_str() {
            "add" => {
                let day = self.input.day()?;
                let name = self.input.task_name()?;
                self.session.add(&day, &name);
            }
            "edit" => {
                let day = self.input.day()?;
                let index = self.input.index()?;
                let name = self.input.task_name()?;
                self.session.rename(&day, index, &name);
            }
            "done" => {
                let day = self.input.day()?;
                let index = self.input.index()?;
                self.session.mark_done(&day, index);
            }
            "view" => {
                let day = self.input.day()?;
                let listing = if day.is_empty() {
                    View::all(&self.session.view_all())
                } else {
                    View::bucket(self.session.view_one(&day))
                };
                self.out.write_all(listing.as_bytes())?;
                self.out.flush()?;
            }
            "save" => {
                let filename = self.input.filename(DEFAULT_TASKS_FILE)?;
                self.session.save_as(&filename);
            }
            "load" => {
                let filename = self.input.filename(DEFAULT_TASKS_FILE)?;
                self.session.load_from(&filename);
            }
            "quit" => {
                msg_print!(Message::ShellGoodbye);
                return Ok(Flow::Quit);
            }
            _ => msg_error!(Message::InvalidCommand),
        }
        Ok(Flow::Continue)
    }
}

/// Starts the interactive loop. An existing `--file` is loaded first.
pub fn cmd(file: Option<&Path>) -> Result<()> {
    let mut session = Session::new();
    if let Some(path) = file.filter(|path| path.exists()) {
        session.load_from(path);
    }

    Shell::new(session, TerminalInput::default(), io::stdout()).run()
}
