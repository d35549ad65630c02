use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Label cannot be empty
/// - Label cannot contain control characters or Unicode line/paragraph separators,
///   the spinner must stay on one line and its erase width must match what is shown
/// - Frame interval must be greater than zero
/// - If log file path is provided, it cannot be empty
pub fn validate_config(
    label: &str,
    frame_interval_ms: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if label.is_empty() {
        return Err(AppError::config_error("Label cannot be empty"));
    }

    if label.chars().any(breaks_status_line) {
        return Err(AppError::config_error("Label cannot contain control characters"));
    }

    if frame_interval_ms == 0 {
        return Err(AppError::config_error("Frame interval must be at least 1 ms"));
    }

    if let Some(log_path) = log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

fn breaks_status_line(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_config("thinking!", 100, &None).is_ok());
        assert!(validate_config("x", 1, &Some("/tmp/spinwait.log".to_string())).is_ok());
        assert!(validate_config("päivä käynnissä", 100, &None).is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let cases = vec![
            ("", 100, None),
            ("two\nlines", 100, None),
            ("carriage\r", 100, None),
            ("vertical\u{0B}tab", 100, None),
            ("form\u{0C}feed", 100, None),
            ("next\u{85}line", 100, None),
            ("line\u{2028}separator", 100, None),
            ("paragraph\u{2029}separator", 100, None),
            ("back\x08space", 100, None),
            ("tab\there", 100, None),
            ("thinking!", 0, None),
            ("thinking!", 100, Some(String::new())),
        ];

        for (label, interval, log_path) in cases {
            assert!(
                matches!(
                    validate_config(label, interval, &log_path),
                    Err(AppError::Config(_))
                ),
                "Config should be invalid: {label:?} {interval} {log_path:?}"
            );
        }
    }
}
