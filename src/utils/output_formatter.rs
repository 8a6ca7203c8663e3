/// Output formatting helpers
///
/// Builds the bracketed literal and the diagnostics printed for failed files.

use colored::Colorize;

use crate::core::error::FormatError;

/// Opening delimiter of the literal
pub const OPEN: &str = "[";
/// Closing delimiter of the literal
pub const CLOSE: &str = "]";
/// Separator placed between items, never after the last one
pub const SEPARATOR: &str = ", ";

/// Join already-quoted items into `[item, item, ...]`
pub fn join_items<S: AsRef<str>>(items: &[S]) -> String {
    let body = items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    format!("{OPEN}{body}{CLOSE}")
}

/// Format the stderr line reported for a failed file
pub fn format_diagnostic(error: &FormatError) -> String {
    format!("{} {}", "Error:".red().bold(), error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_join_items() {
        let empty: [&str; 0] = [];
        assert_eq!(join_items(&empty), "[]");
        assert_eq!(join_items(&["'x'"]), "['x']");
        assert_eq!(join_items(&["'a'", "'b'"]), "['a', 'b']");
    }

    #[test]
    fn test_join_short_items_untouched() {
        // single characters survive; nothing is trimmed by offset
        assert_eq!(join_items(&["a"]), "[a]");
        assert_eq!(join_items(&["", ""]), "[, ]");
    }

    #[test]
    fn test_diagnostic_names_path() {
        colored::control::set_override(false);
        let error = FormatError::ResourceUnavailable {
            path: PathBuf::from("nope.txt"),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            format_diagnostic(&error),
            "Error: cannot read nope.txt: No such file or directory"
        );
    }
}
