use super::open_working_session;
use crate::libs::{bucket, config::Config, messages::Message};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Day to add the task to (defaults to the configured day, or general)
    #[arg(short, long)]
    day: Option<String>,

    /// Task text
    #[arg(required = true, num_args = 1..)]
    name: Vec<String>,
}

pub fn cmd(add_args: AddArgs, file: Option<&Path>) -> Result<()> {
    let config = Config::read()?;
    let mut session = open_working_session(&config, file)?;

    let day = match add_args.day {
        Some(day) => bucket::normalize(&day),
        None => config.default_day(),
    };
    if session.store().bucket(&day).is_none() {
        msg_info!(Message::BucketCreated(day.clone()));
    }

    let task = session.add(&day, &add_args.name.join(" "));
    msg_success!(Message::TaskAdded {
        bucket: day,
        id: task.id,
        name: task.name,
    });
    Ok(())
}
