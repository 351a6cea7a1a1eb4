//! Dot-separated numeric components shared by both schemes.

use crate::error::VersionError;

/// Split `raw` on `.` into between `min` and `max` unsigned components.
pub(crate) fn parse_components(
    scheme: &'static str,
    raw: &str,
    min: usize,
    max: usize,
) -> Result<Vec<u32>, VersionError> {
    let invalid = |reason: String| VersionError {
        scheme,
        version: raw.to_owned(),
        reason,
    };

    let parts: Vec<&str> = raw.split('.').collect();
    if parts.len() < min || parts.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{min} to {max}")
        };
        return Err(invalid(format!(
            "expected {expected} dot-separated components, got {}",
            parts.len()
        )));
    }

    parts
        .iter()
        .map(|part| {
            if part.is_empty() {
                return Err(invalid("empty component".to_owned()));
            }
            if !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid(format!("component \"{part}\" is not a number")));
            }
            part.parse::<u32>()
                .map_err(|e| invalid(format!("component \"{part}\": {e}")))
        })
        .collect()
}
