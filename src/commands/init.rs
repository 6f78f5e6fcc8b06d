//! Interactive configuration wizard for the update settings.
//!
//! Walks the user through the three update preferences. Every answer is
//! written through the settings store's setters, so each one is flushed
//! to disk before the next prompt appears.

use crate::libs::messages::Message;
use crate::libs::settings::UpdateSettings;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

pub fn cmd() -> Result<()> {
    let settings = UpdateSettings::new()?;

    let auto_check = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAutoCheck.to_string())
        .default(settings.auto_check())
        .interact()?;

    let interval: u64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCheckInterval.to_string())
        .default(settings.check_interval() as u64)
        .interact_text()?;

    let allow_beta = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptBetaChannel.to_string())
        .default(settings.beta_allowed())
        .interact()?;

    settings.set_auto_check(auto_check);
    settings.set_check_interval(interval as f64);
    settings.set_beta_allowed(allow_beta);

    msg_success!(Message::ConfigSaved);
    Ok(())
}
