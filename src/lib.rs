/// Text To Array - turn the lines of a text file into an array literal
///
/// This library reads text files and renders their lines as a single
/// bracketed, comma separated sequence of quoted strings that can be pasted
/// straight into source code.

pub mod core;
pub mod utils;

// Re-export main formatter types for convenience
pub use crate::core::error::FormatError;
pub use crate::core::formatter::{FormatOptions, LineFormatter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format a single file with default options
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the file to format
///
/// # Returns
///
/// The literal, e.g. `['a', 'b']`
pub fn format_file<P: AsRef<std::path::Path>>(file_path: P) -> Result<String, FormatError> {
    LineFormatter::default().format_path(file_path.as_ref())
}

/// Library configuration
pub mod config {
    use std::path::Path;

    use log::info;

    use crate::core::error::FormatError;
    use crate::core::formatter::FormatOptions;

    /// Options used when no configuration file is given
    pub fn default_options() -> FormatOptions {
        FormatOptions::default()
    }

    /// Load formatter options from a JSON configuration file
    ///
    /// Keys that are absent keep their default; unknown keys are rejected.
    pub fn load_config(config_path: &Path) -> Result<FormatOptions, FormatError> {
        let config_str = std::fs::read_to_string(config_path).map_err(|e| FormatError::Config {
            path: config_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let options = serde_json::from_str(&config_str).map_err(|e| FormatError::Config {
            path: config_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!("Loaded configuration from {}", config_path.display());
        Ok(options)
    }

    /// Enable every option set in either source
    pub fn merge(file: FormatOptions, flags: FormatOptions) -> FormatOptions {
        FormatOptions {
            escape_quotes: file.escape_quotes || flags.escape_quotes,
            capitalize: file.capitalize || flags.capitalize,
        }
    }
}

/// Command-line application functionality
pub mod app {
    use std::path::Path;

    use log::error;
    use rayon::prelude::*;

    use crate::core::error::FormatError;
    use crate::core::formatter::{FormatOptions, LineFormatter};

    /// Outcome of formatting one path
    pub type FileResult = (String, Result<String, FormatError>);

    /// Run the formatter once per path
    ///
    /// # Arguments
    ///
    /// * `file_paths` - Paths in the order the caller supplied them
    /// * `options` - Formatter options shared by every invocation
    /// * `parallel` - Worker count: 1 runs sequentially, 0 uses every core
    /// * `fail_fast` - Stop after the first failing path
    ///
    /// # Returns
    ///
    /// One entry per processed path, in argument order
    pub fn run_formatter<P: AsRef<Path> + Sync>(
        file_paths: &[P],
        options: FormatOptions,
        parallel: usize,
        fail_fast: bool,
    ) -> anyhow::Result<Vec<FileResult>> {
        let formatter = LineFormatter::new(options);

        if fail_fast || parallel == 1 || file_paths.len() < 2 {
            let mut results = Vec::with_capacity(file_paths.len());
            for file_path in file_paths {
                let result = format_one(&formatter, file_path.as_ref());
                let failed = result.1.is_err();
                results.push(result);
                if failed && fail_fast {
                    break;
                }
            }
            return Ok(results);
        }

        let num_workers = if parallel == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            parallel
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_workers)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build thread pool: {}", e))?;

        // indexed collect keeps argument order
        Ok(pool.install(|| {
            file_paths
                .par_iter()
                .map(|file_path| format_one(&formatter, file_path.as_ref()))
                .collect()
        }))
    }

    fn format_one(formatter: &LineFormatter, file_path: &Path) -> FileResult {
        let path_string = file_path.to_string_lossy().to_string();
        let result = formatter.format_path(file_path);
        if let Err(e) = &result {
            error!("Error formatting {}: {}", file_path.display(), e);
        }
        (path_string, result)
    }
}
