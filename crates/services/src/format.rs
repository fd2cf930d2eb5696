//! Conversions between raw shell input/output and session values.

/// Parses a learner's typed answer.
///
/// Empty or non-numeric input yields `NaN`, which never equals a correct answer.
#[must_use]
pub fn parse_answer(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats elapsed seconds as zero-padded `mm:ss`.
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
