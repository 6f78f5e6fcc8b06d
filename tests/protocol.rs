#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uplift::libs::protocol::{classify, UpdateOutcome};
    use uplift::libs::runner::SubprocessResult;

    fn finished(exit_code: i32) -> SubprocessResult {
        SubprocessResult {
            exit_code: Some(exit_code),
            ..Default::default()
        }
    }

    #[test]
    fn test_exit_zero_means_no_update() {
        assert_eq!(classify(&finished(0)), UpdateOutcome::NoUpdate);
    }

    #[test]
    fn test_exit_one_carries_stderr_as_error_text() {
        let result = SubprocessResult {
            exit_code: Some(1),
            stderr: b"disk full".to_vec(),
            ..Default::default()
        };
        assert_eq!(
            classify(&result),
            UpdateOutcome::CheckFailed {
                error_text: "disk full".to_string()
            }
        );
    }

    #[test]
    fn test_unrecognized_exit_code_is_unknown() {
        assert_eq!(classify(&finished(42)), UpdateOutcome::UnknownExit { code: Some(42) });
    }

    #[test]
    fn test_start_failure_is_unknown_without_code() {
        let result = SubprocessResult {
            start_failed: true,
            ..Default::default()
        };
        assert_eq!(classify(&result), UpdateOutcome::UnknownExit { code: None });
    }

    #[test]
    fn test_timeout_outranks_any_exit_code() {
        // A timed-out wait leaves whatever code the status struct holds
        // untrustworthy; the outcome must not be read as "no update".
        let result = SubprocessResult {
            exit_code: Some(0),
            finish_timed_out: true,
            ..Default::default()
        };
        assert_eq!(classify(&result), UpdateOutcome::UnknownExit { code: Some(0) });
    }

    #[test]
    fn test_exit_hundred_parses_full_header_block() {
        let result = SubprocessResult {
            exit_code: Some(100),
            stdout: b"Name: 1.2.3\nTag: v1.2.3\nDate: 2024-01-01T00:00:00Z\nFixed bugs.\nAnd more.".to_vec(),
            ..Default::default()
        };

        match classify(&result) {
            UpdateOutcome::UpdateAvailable(release) => {
                assert_eq!(release.version_name, "1.2.3");
                assert_eq!(release.version_tag, "v1.2.3");
                assert_eq!(release.released_at, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
                assert_eq!(release.release_notes, "Fixed bugs.\nAnd more.");
            }
            other => panic!("expected UpdateAvailable, got {:?}", other),
        }
    }

    #[test]
    fn test_parsing_is_positional_not_label_based() {
        // Renamed labels must not matter; only line position and the
        // first ": " separator do.
        let result = SubprocessResult {
            exit_code: Some(100),
            stdout: b"Title: 2.0.0\nRelease: v2.0.0\nPublished: 2025-03-04T05:06:07Z\nnotes".to_vec(),
            ..Default::default()
        };

        match classify(&result) {
            UpdateOutcome::UpdateAvailable(release) => {
                assert_eq!(release.version_name, "2.0.0");
                assert_eq!(release.version_tag, "v2.0.0");
                assert!(release.released_at.is_some());
                assert_eq!(release.release_notes, "notes");
            }
            other => panic!("expected UpdateAvailable, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_header_block_degrades_to_empty_fields() {
        let result = SubprocessResult {
            exit_code: Some(100),
            stdout: b"Name: 1.2.3".to_vec(),
            ..Default::default()
        };

        match classify(&result) {
            UpdateOutcome::UpdateAvailable(release) => {
                assert_eq!(release.version_name, "1.2.3");
                assert_eq!(release.version_tag, "");
                assert_eq!(release.released_at, None);
                assert_eq!(release.release_notes, "");
            }
            other => panic!("expected UpdateAvailable, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_timestamp_does_not_fail_the_parse() {
        let result = SubprocessResult {
            exit_code: Some(100),
            stdout: b"Name: 1.2.3\nTag: v1.2.3\nDate: when it was ready\nnotes".to_vec(),
            ..Default::default()
        };

        match classify(&result) {
            UpdateOutcome::UpdateAvailable(release) => {
                assert_eq!(release.version_tag, "v1.2.3");
                assert_eq!(release.released_at, None);
                assert_eq!(release.release_notes, "notes");
            }
            other => panic!("expected UpdateAvailable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_stdout_with_exit_hundred_yields_blank_release() {
        let result = SubprocessResult {
            exit_code: Some(100),
            ..Default::default()
        };

        match classify(&result) {
            UpdateOutcome::UpdateAvailable(release) => {
                assert_eq!(release.version_name, "");
                assert_eq!(release.version_tag, "");
                assert_eq!(release.released_at, None);
            }
            other => panic!("expected UpdateAvailable, got {:?}", other),
        }
    }
}
