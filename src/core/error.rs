/// Errors raised while turning files into array literals

use std::path::PathBuf;

/// Failure kinds for a single formatter invocation
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The input path is missing, unreadable or not a regular file
    #[error("cannot read {}: {reason}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        reason: String,
    },

    /// The configuration file is missing or not valid JSON
    #[error("invalid configuration {}: {reason}", .path.display())]
    Config {
        path: PathBuf,
        reason: String,
    },
}

impl FormatError {
    pub(crate) fn unavailable(path: &std::path::Path, reason: impl ToString) -> Self {
        FormatError::ResourceUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Path the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            FormatError::ResourceUnavailable { path, .. } => path,
            FormatError::Config { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_display_names_path() {
        let err = FormatError::unavailable(Path::new("missing.txt"), "No such file or directory");
        assert_eq!(err.to_string(), "cannot read missing.txt: No such file or directory");
        assert_eq!(err.path(), Path::new("missing.txt"));
    }
}
