//! Configuration initialization command.
//!
//! Runs an interactive wizard that asks for the working task file and the
//! default day for new tasks, or removes the configuration with `--delete`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmDeleteConfig.to_string())
            .default(false)
            .interact()?;
        if confirmed {
            if Config::delete()? {
                msg_success!(Message::ConfigDeleted);
            } else {
                msg_info!(Message::ConfigNotFound);
            }
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
