//! Presentation collaborator consumed by the update coordinator.
//!
//! The coordinator never talks to the terminal directly; it hands every
//! outcome and every decision request to an [`UpdatePresenter`]. The
//! console implementation below is what the CLI uses. Tests substitute a
//! scripted one.

use crate::libs::messages::Message;
use crate::libs::protocol::{ReleaseInfo, UpdateOutcome};
use crate::{msg_debug, msg_error, msg_info, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

/// The user's answer to an update offer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateDecision {
    /// Install the offered version and restart through the updater.
    Install,
    /// Never offer this exact version again.
    Skip,
    /// Do nothing now; the same version may be offered after the next check.
    DontInstall,
}

/// Synchronous decision interface between the coordinator and whatever
/// surface talks to the user.
pub trait UpdatePresenter: Send + Sync {
    /// Surfaces a terminal, no-action outcome of a check.
    ///
    /// `manual` tells the presenter whether the user asked for this
    /// check explicitly. Scheduled checks are expected to stay silent
    /// for anything that is not an actual update.
    fn notify(&self, outcome: &UpdateOutcome, manual: bool);

    /// Asks the user what to do about an offered release. Blocks until
    /// a decision is returned.
    fn prompt_decision(&self, release: &ReleaseInfo) -> Result<UpdateDecision>;
}

/// Terminal presenter used by the CLI commands.
pub struct ConsolePresenter {
    /// Version of the running launcher, shown next to the offer.
    current_version: String,
}

impl ConsolePresenter {
    pub fn new(current_version: &str) -> Self {
        ConsolePresenter {
            current_version: current_version.to_string(),
        }
    }
}

impl UpdatePresenter for ConsolePresenter {
    fn notify(&self, outcome: &UpdateOutcome, manual: bool) {
        match outcome {
            UpdateOutcome::NoUpdate => {
                if manual {
                    msg_info!(Message::NoUpdateAvailable);
                } else {
                    msg_debug!(Message::NoUpdateAvailable);
                }
            }
            UpdateOutcome::CheckFailed { error_text } => {
                let message = Message::UpdateCheckFailed(error_text.trim_end().to_string());
                if manual {
                    msg_error!(message);
                } else {
                    msg_debug!(message);
                }
            }
            UpdateOutcome::UnknownExit { code } => {
                let code = code.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string());
                let message = Message::UpdaterUnknownExit(code);
                if manual {
                    msg_error!(message);
                } else {
                    msg_debug!(message);
                }
            }
            UpdateOutcome::UpdateAvailable(release) => {
                msg_info!(Message::UpdateAvailable {
                    name: release.version_name.clone(),
                    tag: release.version_tag.clone(),
                });
            }
        }
    }

    fn prompt_decision(&self, release: &ReleaseInfo) -> Result<UpdateDecision> {
        msg_print!(
            Message::OfferHeader {
                current: self.current_version.clone(),
                name: release.version_name.clone(),
            },
            true
        );
        let notes = release.release_notes.trim();
        if !notes.is_empty() {
            println!("{}\n", notes);
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUpdateDecision.to_string())
            .items(&["Install and restart", "Skip this version", "Not now"])
            .default(0)
            .interact()?;

        Ok(match choice {
            0 => UpdateDecision::Install,
            1 => UpdateDecision::Skip,
            _ => UpdateDecision::DontInstall,
        })
    }
}
