//! Output formatting for the action boundary

/// Format a failure as a GitHub Actions `::error::` workflow command
///
/// The message is escaped the same way `@actions/core` escapes command
/// data, so the result is always one line.
pub fn format_failure(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{}", escaped)
}
