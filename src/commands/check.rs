use crate::libs::messages::Message;
use crate::libs::settings::UpdateSettings;
use crate::msg_print;
use anyhow::Result;
use std::sync::Arc;

/// Runs a single user-requested update check.
///
/// The coordinator and its presenter handle all outcome reporting. When
/// the user chooses to install, the detached updater is already running
/// by the time this returns, and the process exits to let it take over.
pub async fn cmd() -> Result<()> {
    let settings = Arc::new(UpdateSettings::new()?);
    let coordinator = super::build_coordinator(settings)?;

    msg_print!(Message::CheckingForUpdates);
    coordinator.run_check(true).await?;
    Ok(())
}
