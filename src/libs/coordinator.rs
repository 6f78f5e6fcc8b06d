//! Top-level orchestration of the check → offer → install workflow.
//!
//! The coordinator ties the runner, the protocol parser, the settings
//! store and the presenter together behind one state machine:
//!
//! ```text
//! Idle → Checking → Offering → Installing   (handoff to the updater)
//!   ↑       │           │
//!   └───────┴───────────┘   (every non-install path returns to Idle)
//! ```
//!
//! Only one check may be in flight per coordinator. A `run_check` call
//! while the machine is not `Idle` is rejected without spawning a second
//! subprocess. The last-check timestamp is recorded exactly once per
//! completed check attempt, before the outcome is acted on, so failed
//! and unknown outcomes consume their scheduling slot just like
//! successful ones.

use crate::libs::messages::Message;
use crate::libs::presenter::{UpdateDecision, UpdatePresenter};
use crate::libs::protocol::{self, ReleaseInfo, UpdateOutcome};
use crate::libs::runner::UpdaterRunner;
use crate::libs::settings::UpdateSettings;
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinatorState {
    Idle,
    Checking,
    Offering,
    Installing,
}

/// How one `run_check` invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckConclusion {
    /// Rejected: another check was already in flight.
    AlreadyRunning,
    UpToDate,
    Failed,
    UnknownOutcome,
    /// An update existed but its tag is in the skip registry; the user
    /// was not bothered.
    VersionSkipped(String),
    /// The user chose to skip this version; the tag is now persisted.
    SkipRecorded(String),
    /// The user declined without skipping.
    Declined,
    /// The detached installer is running; the caller should exit and
    /// let the updater take over.
    InstallStarted(String),
}

pub struct UpdateCoordinator {
    settings: Arc<UpdateSettings>,
    runner: UpdaterRunner,
    presenter: Box<dyn UpdatePresenter>,
    state: Mutex<CoordinatorState>,
}

impl UpdateCoordinator {
    pub fn new(settings: Arc<UpdateSettings>, runner: UpdaterRunner, presenter: Box<dyn UpdatePresenter>) -> Self {
        UpdateCoordinator {
            settings,
            runner,
            presenter,
            state: Mutex::new(CoordinatorState::Idle),
        }
    }

    pub fn state(&self) -> CoordinatorState {
        *self.state.lock()
    }

    /// Runs one complete check attempt.
    ///
    /// `manual` marks checks the user asked for explicitly; it only
    /// affects how outcomes are surfaced, never what the coordinator
    /// does with them.
    pub async fn run_check(&self, manual: bool) -> Result<CheckConclusion> {
        {
            let mut state = self.state.lock();
            if *state != CoordinatorState::Idle {
                msg_debug!(Message::CheckAlreadyRunning);
                return Ok(CheckConclusion::AlreadyRunning);
            }
            *state = CoordinatorState::Checking;
        }

        let allow_beta = self.settings.beta_allowed();
        let result = self.runner.run_check_only(allow_beta).await;
        let outcome = protocol::classify(&result);

        // One completed check attempt, one recorded timestamp - success,
        // failure and unknown outcomes all consume their slot.
        self.settings.record_check_time(Utc::now());

        match outcome {
            UpdateOutcome::UpdateAvailable(release) => self.offer(release, allow_beta),
            terminal => {
                self.presenter.notify(&terminal, manual);
                *self.state.lock() = CoordinatorState::Idle;
                Ok(match terminal {
                    UpdateOutcome::NoUpdate => CheckConclusion::UpToDate,
                    UpdateOutcome::CheckFailed { .. } => CheckConclusion::Failed,
                    _ => CheckConclusion::UnknownOutcome,
                })
            }
        }
    }

    /// Offers a release to the user, honoring the skip registry.
    fn offer(&self, release: ReleaseInfo, allow_beta: bool) -> Result<CheckConclusion> {
        *self.state.lock() = CoordinatorState::Offering;

        if self.settings.is_version_skipped(&release.version_tag) {
            msg_debug!(Message::VersionSkipped(release.version_tag.clone()));
            *self.state.lock() = CoordinatorState::Idle;
            return Ok(CheckConclusion::VersionSkipped(release.version_tag));
        }

        let decision = match self.presenter.prompt_decision(&release) {
            Ok(decision) => decision,
            Err(e) => {
                *self.state.lock() = CoordinatorState::Idle;
                return Err(e);
            }
        };

        match decision {
            UpdateDecision::Install => {
                *self.state.lock() = CoordinatorState::Installing;
                match self.runner.run_install(&release.version_tag, allow_beta) {
                    Ok(()) => {
                        msg_info!(Message::InstallHandoff(release.version_tag.clone()));
                        Ok(CheckConclusion::InstallStarted(release.version_tag))
                    }
                    Err(e) => {
                        // Exiting now would leave no updater running, so
                        // surface the failure and stay alive instead.
                        msg_error!(Message::InstallSpawnFailed(e.to_string()));
                        *self.state.lock() = CoordinatorState::Idle;
                        Ok(CheckConclusion::Failed)
                    }
                }
            }
            UpdateDecision::Skip => {
                self.settings.mark_version_skipped(&release.version_tag);
                msg_info!(Message::VersionSkipRecorded(release.version_tag.clone()));
                *self.state.lock() = CoordinatorState::Idle;
                Ok(CheckConclusion::SkipRecorded(release.version_tag))
            }
            UpdateDecision::DontInstall => {
                msg_debug!(Message::UpdateDeclined);
                *self.state.lock() = CoordinatorState::Idle;
                Ok(CheckConclusion::Declined)
            }
        }
    }
}
