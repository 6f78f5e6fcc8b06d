//! Single-shot timer driving automatic update checks.
//!
//! The scheduler owns at most one armed timer at a time. Every
//! preference change and every completed check calls [`CheckScheduler::recompute`],
//! which cancels the pending timer and re-arms it from the latest
//! `last_check` timestamp. Re-arming after each check anchors the period
//! to the check that just finished instead of accumulating drift.
//!
//! Firing is delivered over an mpsc channel so the check itself runs on
//! the same task loop as manual triggers, keeping all shared state on a
//! single logical thread of control.

use crate::libs::messages::Message;
use crate::libs::settings::UpdateSettings;
use crate::msg_debug;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

/// Armed/disarmed state, exposed for status display and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchedulerState {
    Disarmed,
    Armed { fire_at: DateTime<Utc> },
}

/// Seconds until the next automatic check is due.
///
/// No prior check means the check is due immediately. Otherwise the
/// remaining share of the interval, floored at zero when the interval
/// already elapsed.
pub fn delay_until_next_check(interval_secs: f64, last_check: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Duration {
    match last_check {
        None => Duration::ZERO,
        Some(last) => {
            let elapsed = (now - last).num_milliseconds() as f64 / 1000.0;
            let secs_left = (interval_secs - elapsed).max(0.0);
            Duration::from_secs_f64(secs_left)
        }
    }
}

/// Arms a single-shot timer that nudges the coordinator loop when the
/// next automatic check is due.
pub struct CheckScheduler {
    trigger: mpsc::Sender<()>,
    timer: Option<JoinHandle<()>>,
    state: SchedulerState,
}

impl CheckScheduler {
    pub fn new(trigger: mpsc::Sender<()>) -> Self {
        CheckScheduler {
            trigger,
            timer: None,
            state: SchedulerState::Disarmed,
        }
    }

    /// Re-evaluates the timer against the current preferences.
    ///
    /// Cancels any pending timer first, so two overlapping timers can
    /// never be armed by back-to-back recomputes.
    pub fn recompute(&mut self, settings: &UpdateSettings) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        if !settings.auto_check() {
            self.state = SchedulerState::Disarmed;
            msg_debug!(Message::SchedulerDisarmed);
            return;
        }

        let now = Utc::now();
        let delay = delay_until_next_check(settings.check_interval(), settings.last_check(), now);
        self.state = SchedulerState::Armed {
            fire_at: now + chrono::Duration::from_std(delay).unwrap_or_default(),
        };
        msg_debug!(Message::SchedulerArmed(delay.as_secs()));

        let trigger = self.trigger.clone();
        self.timer = Some(tokio::spawn(async move {
            sleep(delay).await;
            // The loop may already be gone during shutdown.
            let _ = trigger.send(()).await;
        }));
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }
}

impl Drop for CheckScheduler {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
