use super::open_working_session;
use crate::libs::{bucket, config::Config, messages::Message, task::TaskStatus};
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::Path;

/// Arguments shared by `done` and `undo`.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Day holding the task
    day: String,

    /// Task ID as shown by `view`
    id: u32,
}

pub fn cmd(status_args: StatusArgs, file: Option<&Path>, done: bool) -> Result<()> {
    let config = Config::read()?;
    let mut session = open_working_session(&config, file)?;
    let day = bucket::lookup_key(&status_args.day);
    let id = status_args.id;

    let status = if done { TaskStatus::Done } else { TaskStatus::Pending };
    if !session.set_status(&day, id, status) {
        msg_warning!(Message::TaskNotFoundWithId { bucket: day, id });
        return Ok(());
    }

    match status {
        TaskStatus::Done => msg_success!(Message::TaskMarkedDone { bucket: day, id }),
        TaskStatus::Pending => msg_success!(Message::TaskMarkedPending { bucket: day, id }),
    }
    Ok(())
}
