use super::open_working_session;
use crate::libs::{bucket, config::Config, messages::Message};
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Day holding the task
    day: String,

    /// Task ID as shown by `view`
    id: u32,

    /// New task text
    #[arg(required = true, num_args = 1..)]
    name: Vec<String>,
}

pub fn cmd(edit_args: EditArgs, file: Option<&Path>) -> Result<()> {
    let config = Config::read()?;
    let mut session = open_working_session(&config, file)?;
    let day = bucket::lookup_key(&edit_args.day);

    if session.rename(&day, edit_args.id, &edit_args.name.join(" ")) {
        msg_success!(Message::TaskRenamed { bucket: day, id: edit_args.id });
    } else {
        msg_warning!(Message::TaskNotFoundWithId { bucket: day, id: edit_args.id });
    }
    Ok(())
}
