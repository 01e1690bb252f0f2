use super::open_working_session;
use crate::libs::{bucket, config::Config, messages::Message, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Day to show; all days when omitted
    day: Option<String>,

    /// Render as a table
    #[arg(short, long)]
    table: bool,
}

pub fn cmd(view_args: ViewArgs, file: Option<&Path>) -> Result<()> {
    let config = Config::read()?;
    let session = open_working_session(&config, file)?;

    match view_args.day.as_deref().map(bucket::lookup_key).filter(|day| !day.is_empty()) {
        Some(day) => {
            let tasks = session.view_one(&day);
            if tasks.is_empty() {
                msg_info!(Message::BucketEmpty(day));
            } else if view_args.table {
                View::bucket_table(tasks).printstd();
            } else {
                print!("{}", View::bucket(tasks));
            }
        }
        None => {
            let buckets = session.view_all();
            if view_args.table {
                if session.store().task_count() == 0 {
                    msg_info!(Message::NoTasks);
                } else {
                    View::all_table(&buckets).printstd();
                }
            } else {
                print!("{}", View::all(&buckets));
            }
        }
    }

    if let Some(path) = session.current_file() {
        msg_print!(Message::WorkingFile(path.display().to_string()));
    }
    Ok(())
}
