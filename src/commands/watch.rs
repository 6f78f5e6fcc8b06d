//! Foreground watcher running the automatic check scheduler.
//!
//! Arms the single-shot timer, waits for it to fire, runs the check, and
//! re-arms from the freshly recorded last-check timestamp. Scheduled
//! checks stay silent unless an update is found. The loop ends on a
//! shutdown signal, or when an accepted update hands the process over to
//! the updater.

use crate::libs::coordinator::CheckConclusion;
use crate::libs::messages::Message;
use crate::libs::scheduler::CheckScheduler;
use crate::libs::settings::UpdateSettings;
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn cmd() -> Result<()> {
    let settings = Arc::new(UpdateSettings::new()?);
    if !settings.auto_check() {
        msg_warning!(Message::WatcherAutoCheckDisabled);
        return Ok(());
    }

    let coordinator = super::build_coordinator(settings.clone())?;

    // Set up a channel to handle shutdown signals
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel();

    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = signal(SignalKind::terminate()).expect(&Message::FailedToCreateSigtermHandler.to_string());
            let mut sigint = signal(SignalKind::interrupt()).expect(&Message::FailedToCreateSigintHandler.to_string());

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        // For other platforms, just run without signal handling
        msg_warning!(Message::WatcherSignalHandlingNotSupported);
        let _ = shutdown_tx;
    }

    let (trigger_tx, mut trigger_rx) = mpsc::channel::<()>(4);
    let mut scheduler = CheckScheduler::new(trigger_tx);
    scheduler.recompute(&settings);
    msg_info!(Message::WatcherStarted);

    loop {
        tokio::select! {
            Some(()) = trigger_rx.recv() => {
                match coordinator.run_check(false).await {
                    Ok(CheckConclusion::InstallStarted(_)) => {
                        // The updater owns the restart from here.
                        return Ok(());
                    }
                    Ok(_) => {}
                    Err(e) => {
                        msg_error!(Message::CheckError(e.to_string()));
                    }
                }
                // The next interval is anchored to the timestamp the
                // check just recorded.
                scheduler.recompute(&settings);
            }
            _ = &mut shutdown_rx => {
                msg_info!(Message::WatcherStopped);
                return Ok(());
            }
        }
    }
}
