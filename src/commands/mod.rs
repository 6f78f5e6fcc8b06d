pub mod check;
pub mod init;
pub mod mods;
pub mod status;
pub mod watch;

use crate::libs::coordinator::UpdateCoordinator;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::presenter::ConsolePresenter;
use crate::libs::runner::UpdaterRunner;
use crate::libs::settings::UpdateSettings;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure automatic update checks")]
    Init,
    #[command(about = "Check for launcher updates now")]
    Check,
    #[command(about = "Show update preferences and schedule")]
    Status,
    #[command(about = "Watch for updates on the configured interval")]
    Watch,
    #[command(about = "Build mod repository query URLs")]
    Mods(mods::ModsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Check => check::cmd().await,
            Commands::Status => status::cmd(),
            Commands::Watch => watch::cmd().await,
            Commands::Mods(args) => mods::cmd(args),
        }
    }
}

// Wires a coordinator to the directory layout of a launcher install:
// binaries next to the running executable, data in the platform data dir.
pub(crate) fn build_coordinator(settings: Arc<UpdateSettings>) -> Result<UpdateCoordinator> {
    let exe = std::env::current_exe()?;
    let app_dir = exe
        .parent()
        .ok_or_else(|| msg_error_anyhow!(Message::FailedToResolveAppDir))?
        .to_path_buf();
    let data_dir = DataStorage::new().dir()?;
    let runner = UpdaterRunner::new(app_dir, data_dir, APP_METADATA_LAUNCHER);
    let presenter = Box::new(ConsolePresenter::new(APP_METADATA_VERSION));
    Ok(UpdateCoordinator::new(settings, runner, presenter))
}
