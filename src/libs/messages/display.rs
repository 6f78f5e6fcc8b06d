//! Display implementation for uplift application messages.
//!
//! All user-facing text lives in this one place, so wording stays
//! consistent and the `Message` enum remains the single source of truth
//! for everything the CLI prints.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Update settings saved".to_string(),
            Message::SettingsFileCorrupt(err) => format!("Stored update settings could not be parsed, falling back to defaults: {}", err),
            Message::SettingsFlushFailed(err) => format!("Failed to write update settings, continuing with in-memory state: {}", err),
            Message::PromptAutoCheck => "Check for launcher updates automatically?".to_string(),
            Message::PromptCheckInterval => "Seconds between automatic checks".to_string(),
            Message::PromptBetaChannel => "Include beta (pre-release) versions?".to_string(),

            // === UPDATE CHECK MESSAGES ===
            Message::CheckingForUpdates => "Checking for updates...".to_string(),
            Message::NoUpdateAvailable => "You are running the latest version".to_string(),
            Message::UpdateCheckFailed(err) => format!("There was an error running the update check: {}", err),
            Message::UpdaterUnknownExit(code) => format!("Updater exited with unknown code {}", code),
            Message::CheckAlreadyRunning => "An update check is already in progress".to_string(),
            Message::UpdateAvailable { name, tag } => format!("Update available: {} ({})", name, tag),

            // === OFFER MESSAGES ===
            Message::OfferHeader { current, name } => {
                format!("A new version of the launcher is available: {} (you have {})", name, current)
            }
            Message::PromptUpdateDecision => "What would you like to do?".to_string(),
            Message::VersionSkipRecorded(tag) => format!("Version {} will not be offered again", tag),
            Message::VersionSkipped(tag) => format!("Version {} is marked as skipped, not offering", tag),
            Message::UpdateDeclined => "Update postponed, you will be asked again after the next check".to_string(),
            Message::InstallHandoff(tag) => format!("Starting the updater for version {}. The launcher will restart when it finishes", tag),
            Message::InstallSpawnFailed(err) => format!("Failed to start the updater for installation: {}", err),

            // === SUBPROCESS MESSAGES ===
            Message::UpdaterStartFailed(err) => format!("Failed to start updater: {}", err),
            Message::UpdaterTimedOut(secs) => format!("Updater failed to finish after {} seconds", secs),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted => "Update watcher started".to_string(),
            Message::WatcherAutoCheckDisabled => "Automatic update checks are disabled. Enable them with 'uplift init'".to_string(),
            Message::WatcherStopped => "Update watcher stopped".to_string(),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down gracefully...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down gracefully...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down gracefully...".to_string(),
            Message::WatcherCtrlCListenFailed(err) => format!("Failed to listen for Ctrl+C: {}", err),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::SchedulerArmed(secs) => format!("Next automatic check in {} seconds", secs),
            Message::SchedulerDisarmed => "Automatic check timer disarmed".to_string(),
            Message::CheckError(err) => format!("Update check failed: {}", err),

            // === MOD QUERY MESSAGES ===
            Message::UnknownModLoader(name) => format!("Unknown mod loader '{}'. Expected forge, fabric, quilt or neoforge", name),
            Message::UnknownResourceType(name) => format!("Unknown resource type '{}'. Expected mod or resourcepack", name),

            // === GENERIC ERROR MESSAGES ===
            Message::FailedToResolveAppDir => "Failed to resolve the application directory".to_string(),
        };
        write!(f, "{}", message)
    }
}
