//! Exit-status and stdout protocol spoken by the external updater.
//!
//! The updater subprocess reports availability through its exit code and,
//! when an update exists, a small positional header block on stdout:
//!
//! ```text
//! Name: <version display name>
//! Tag: <version tag>
//! Date: <ISO-8601 release timestamp>
//! <release notes, remainder of the stream>
//! ```
//!
//! The header labels are ignored - only the position of the three lines
//! and the first `": "` separator on each matter. Parsing never fails:
//! missing lines become empty fields and an unparsable timestamp becomes
//! `None`, so a malformed updater build degrades to an incomplete offer
//! instead of aborting the check.
//!
//! Exit codes are an inter-process contract shared with the updater:
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | no update available |
//! | 1    | checker-reported error, stderr holds the message |
//! | 100  | update available, stdout holds the header block |
//! | any other | unrecognized |

use crate::libs::runner::SubprocessResult;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Exit code signalling "no update available".
pub const EXIT_NO_UPDATE: i32 = 0;
/// Exit code signalling a checker-reported error.
pub const EXIT_CHECK_ERROR: i32 = 1;
/// Exit code signalling "update available".
pub const EXIT_UPDATE_AVAILABLE: i32 = 100;

/// A release offered by the updater.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseInfo {
    /// Human-readable version name, e.g. "1.2.3".
    pub version_name: String,
    /// Exact tag the updater installs, e.g. "v1.2.3". Also the key used
    /// by the skip registry.
    pub version_tag: String,
    /// Release timestamp, if the updater supplied a parsable one.
    pub released_at: Option<DateTime<Utc>>,
    /// Free-form release notes, may span multiple lines.
    pub release_notes: String,
}

/// Classified result of one check-mode run of the updater.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    NoUpdate,
    CheckFailed { error_text: String },
    UpdateAvailable(ReleaseInfo),
    /// Unrecognized exit code, or no trustworthy exit code at all
    /// (start failure, finish timeout, killed by signal).
    UnknownExit { code: Option<i32> },
}

/// Classifies a check-mode subprocess result into an [`UpdateOutcome`].
pub fn classify(result: &SubprocessResult) -> UpdateOutcome {
    // A process that never started or never finished has no trustworthy
    // exit code, whatever the status struct claims.
    if result.start_failed || result.finish_timed_out {
        return UpdateOutcome::UnknownExit { code: result.exit_code };
    }

    match result.exit_code {
        Some(EXIT_NO_UPDATE) => UpdateOutcome::NoUpdate,
        Some(EXIT_CHECK_ERROR) => UpdateOutcome::CheckFailed {
            error_text: String::from_utf8_lossy(&result.stderr).into_owned(),
        },
        Some(EXIT_UPDATE_AVAILABLE) => UpdateOutcome::UpdateAvailable(parse_release_info(&String::from_utf8_lossy(&result.stdout))),
        code => UpdateOutcome::UnknownExit { code },
    }
}

/// Parses the positional header block emitted with exit code 100.
fn parse_release_info(stdout: &str) -> ReleaseInfo {
    let (first_line, remainder) = split_first(stdout, '\n');
    let (second_line, remainder) = split_first(remainder, '\n');
    let (third_line, release_notes) = split_first(remainder, '\n');

    let version_name = header_value(first_line);
    let version_tag = header_value(second_line);
    let released_at = parse_timestamp(header_value(third_line));

    ReleaseInfo {
        version_name: version_name.to_string(),
        version_tag: version_tag.to_string(),
        released_at,
        release_notes: release_notes.to_string(),
    }
}

// Splits at the first occurrence of the separator; when the separator is
// absent the whole input is the head and the tail is empty.
fn split_first(s: &str, sep: char) -> (&str, &str) {
    s.split_once(sep).unwrap_or((s, ""))
}

// The value part of a "Label: value" header line, trimmed. A line
// without the separator yields an empty value.
fn header_value(line: &str) -> &str {
    line.split_once(": ").map(|(_, value)| value).unwrap_or("").trim()
}

// ISO-8601, with or without an explicit offset. Anything else is an
// unset timestamp, not an error.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok().map(|naive| naive.and_utc()))
}
