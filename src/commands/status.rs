use crate::libs::settings::UpdateSettings;
use crate::libs::view::View;
use anyhow::Result;

// Displays the stored preferences and the derived check schedule.
pub fn cmd() -> Result<()> {
    let settings = UpdateSettings::new()?;
    View::status(&settings);
    Ok(())
}
