//! Whitespace normalization and length bounding, applied to every resume
//! text before a prompt is built from it.

use tracing::warn;

/// Marker appended when text is cut at the length limit.
pub const TRUNCATION_MARKER: &str = "...";

/// Collapses every run of whitespace (spaces, tabs, newlines) to a single
/// space, trims the ends, and truncates to `max_chars` characters with a
/// trailing marker when the text runs long. Truncation is silent toward the
/// caller but logged.
///
/// Applying this twice with the same limit yields the same string.
pub fn sanitize(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    warn!(limit = max_chars, "resume text over length limit, truncating");
    let mut truncated: String = collapsed.chars().take(max_chars).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
