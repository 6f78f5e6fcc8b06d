use crate::libs::scheduler::delay_until_next_check;
use crate::libs::settings::UpdateSettings;
use chrono::{Local, Utc};
use prettytable::{row, Table};

pub struct View {}

impl View {
    // Renders the current preferences and derived schedule as a table.
    pub fn status(settings: &UpdateSettings) {
        let mut table = Table::new();
        table.add_row(row!["SETTING", "VALUE"]);
        table.add_row(row!["Automatic checks", if settings.auto_check() { "enabled" } else { "disabled" }]);
        table.add_row(row!["Check interval", human_interval(settings.check_interval())]);
        table.add_row(row!["Beta channel", if settings.beta_allowed() { "enabled" } else { "disabled" }]);
        table.add_row(row![
            "Last check",
            settings
                .last_check()
                .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "never".to_string())
        ]);
        table.add_row(row!["Next check", next_check_cell(settings)]);
        table.printstd();

        let skipped = settings.skipped_versions();
        if !skipped.is_empty() {
            let mut table = Table::new();
            table.add_row(row!["SKIPPED VERSIONS"]);
            for tag in skipped {
                table.add_row(row![tag]);
            }
            table.printstd();
        }
    }
}

fn next_check_cell(settings: &UpdateSettings) -> String {
    if !settings.auto_check() {
        return "disabled".to_string();
    }
    let now = Utc::now();
    let delay = delay_until_next_check(settings.check_interval(), settings.last_check(), now);
    if delay.is_zero() {
        return "due now".to_string();
    }
    let fire_at = now + chrono::Duration::from_std(delay).unwrap_or_default();
    fire_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

// "1d 2h 3m" style rendering of an interval in seconds.
fn human_interval(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let days = total / 86400;
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(format!("{}s", secs));
    }
    parts.join(" ")
}
