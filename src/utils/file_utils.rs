/// File handling utilities
///
/// This module reads input files and splits their content into lines.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

use log::warn;

use crate::core::error::FormatError;

/// Read a file and return its lines in order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Terminators are not part of
/// the returned lines. An empty file has no lines.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The lines of the file, or `FormatError::ResourceUnavailable` when the path
/// is missing, is not a regular file, or cannot be read
pub fn read_lines(file_path: &Path) -> Result<Vec<String>, FormatError> {
    let metadata = fs::metadata(file_path).map_err(|e| FormatError::unavailable(file_path, e))?;
    if !metadata.is_file() {
        return Err(FormatError::unavailable(file_path, "not a regular file"));
    }

    let mut buffer = Vec::new();
    {
        let file = File::open(file_path).map_err(|e| FormatError::unavailable(file_path, e))?;
        BufReader::new(file)
            .read_to_end(&mut buffer)
            .map_err(|e| FormatError::unavailable(file_path, e))?;
    }

    let content = match String::from_utf8(buffer) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "{} is not valid UTF-8, invalid bytes replaced",
                file_path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    Ok(split_lines(&content))
}

/// Split text into lines using universal newline rules
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    // Final line without a terminator
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_edges() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("only"), vec!["only"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_read_lines_from_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("words.txt");
        std::fs::write(&path, "one\ntwo  \n  three\n").expect("Failed to write file");

        let lines = read_lines(&path).expect("Failed to read lines");
        assert_eq!(lines, vec!["one", "two  ", "  three"]);
    }

    #[test]
    fn test_read_lines_invalid_utf8() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9\nok\n").expect("Failed to write file");

        let lines = read_lines(&path).expect("Failed to read lines");
        assert_eq!(lines, vec!["caf\u{FFFD}", "ok"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.txt");

        match read_lines(&path) {
            Err(FormatError::ResourceUnavailable { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected ResourceUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_read_lines_directory() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = read_lines(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }
}
