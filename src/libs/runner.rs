//! Launch and supervision of the external updater process.
//!
//! The updater ships next to the launcher binaries as
//! `<launcher>_updater` (plus the platform executable suffix) and is
//! driven in two modes:
//!
//! - **check-only**: a bounded, blocking run that captures the exit code
//!   and both output streams for protocol classification;
//! - **install**: a detached fire-and-forget spawn, after which the
//!   calling process is expected to exit so the updater can replace it.
//!
//! The runner performs no retries. If a check run misbehaves, the next
//! scheduled cycle is the retry policy.

use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::time::{timeout, Duration};

/// Ceiling on how long a check-mode run may take before the subprocess
/// is killed and the outcome treated as indeterminate.
pub const FINISH_TIMEOUT_SECS: u64 = 60;

/// Raw result of one check-mode updater run.
///
/// Owned by the call that produced it and consumed immediately by the
/// protocol parser; nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct SubprocessResult {
    /// Exit code, when the process ran to completion and exited
    /// normally. `None` after a start failure, a timeout, or a
    /// signal-terminated exit.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// The process could not be started at all.
    pub start_failed: bool,
    /// The process started but did not exit within the bounded wait.
    pub finish_timed_out: bool,
}

/// Spawns the updater executable on behalf of the coordinator.
pub struct UpdaterRunner {
    /// Directory holding the launcher and updater binaries.
    app_dir: PathBuf,
    /// Data directory handed to the updater as `--dir`.
    data_dir: PathBuf,
    /// Launcher binary name the updater name is derived from. An
    /// explicit value rather than ambient build state so hosts and tests
    /// can point the runner anywhere.
    launcher_name: String,
}

impl UpdaterRunner {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(app_dir: P, data_dir: Q, launcher_name: &str) -> Self {
        UpdaterRunner {
            app_dir: app_dir.as_ref().to_path_buf(),
            data_dir: data_dir.as_ref().to_path_buf(),
            launcher_name: launcher_name.to_string(),
        }
    }

    /// Full path of the updater executable for this platform.
    pub fn updater_path(&self) -> PathBuf {
        self.app_dir.join(format!("{}_updater{}", self.launcher_name, EXE_SUFFIX))
    }

    /// Runs the updater in check-only mode and captures its result.
    ///
    /// Never returns an error: a spawn failure is recorded as
    /// `start_failed` and a blown deadline as `finish_timed_out`, both of
    /// which the parser maps to an indeterminate outcome. The subprocess
    /// is killed if it outlives the wait.
    pub async fn run_check_only(&self, allow_beta: bool) -> SubprocessResult {
        let mut args = vec![
            "--check-only".to_string(),
            "--dir".to_string(),
            self.data_dir.display().to_string(),
            "--debug".to_string(),
        ];
        if allow_beta {
            args.push("--pre-release".to_string());
        }

        let mut result = SubprocessResult::default();

        let child = tokio::process::Command::new(self.updater_path())
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => {
                msg_debug!(Message::UpdaterStartFailed(e.to_string()));
                result.start_failed = true;
                return result;
            }
        };

        match timeout(Duration::from_secs(FINISH_TIMEOUT_SECS), child.wait_with_output()).await {
            Ok(Ok(output)) => {
                result.exit_code = output.status.code();
                result.stdout = output.stdout;
                result.stderr = output.stderr;
            }
            Ok(Err(e)) => {
                // Waiting itself failed; there is no exit code to trust.
                msg_debug!(Message::UpdaterStartFailed(e.to_string()));
            }
            Err(_) => {
                msg_debug!(Message::UpdaterTimedOut(FINISH_TIMEOUT_SECS));
                result.finish_timed_out = true;
            }
        }

        result
    }

    /// Launches the updater in install mode, detached.
    ///
    /// Does not wait for completion: the caller is expected to exit
    /// right after this returns, handing the process lifecycle over to
    /// the updater.
    pub fn run_install(&self, version_tag: &str, allow_beta: bool) -> Result<()> {
        let mut args = vec![
            "--dir".to_string(),
            self.data_dir.display().to_string(),
            "--install-version".to_string(),
            version_tag.to_string(),
        ];
        if allow_beta {
            args.push("--pre-release".to_string());
        }

        let mut command = std::process::Command::new(self.updater_path());
        command.args(&args).stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            unsafe {
                command.pre_exec(|| {
                    // Detach from the current session so the updater
                    // survives the launcher's exit.
                    nix::unistd::setsid()?;
                    Ok(())
                });
            }
        }

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const DETACHED_PROCESS: u32 = 0x00000008;
            const CREATE_NO_WINDOW: u32 = 0x08000000;
            command.creation_flags(DETACHED_PROCESS | CREATE_NO_WINDOW);
        }

        command.spawn()?;
        Ok(())
    }
}
