/// Line literal formatter
///
/// Turns the lines of a text file into a single bracketed, comma separated
/// sequence of single-quoted items, e.g. `['a', 'b', 'c']`.

use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::core::error::FormatError;
use crate::utils::file_utils::read_lines;
use crate::utils::output_formatter::join_items;

/// Quote character wrapped around every item
pub const QUOTE: char = '\'';

/// Options controlling how each line becomes an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Escape `\` and `'` inside items. Off means lines pass through verbatim,
    /// even when that yields a literal most languages cannot parse.
    pub escape_quotes: bool,

    /// Upper-case the first character of each item and lower-case the rest
    pub capitalize: bool,
}

/// Stateless formatter; one instance can serve any number of files
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    options: FormatOptions,
}

impl LineFormatter {
    /// Create a formatter with the given options
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Read a file and format its lines
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a readable regular file
    ///
    /// # Returns
    ///
    /// The bracketed literal, or `FormatError::ResourceUnavailable` when the
    /// file cannot be read
    pub fn format_path(&self, path: &Path) -> Result<String, FormatError> {
        info!("Formatting file: {}", path.display());

        let lines = read_lines(path)?;
        debug!("Read {} lines from {}", lines.len(), path.display());

        Ok(self.format_lines(&lines))
    }

    /// Format an ordered sequence of lines. An empty sequence gives `[]`.
    pub fn format_lines<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let items: Vec<String> = lines
            .iter()
            .map(|line| self.format_item(line.as_ref()))
            .collect();

        join_items(&items)
    }

    /// Turn one raw line into one quoted item
    pub fn format_item(&self, line: &str) -> String {
        let mut text = line.trim_end().to_string();

        if self.options.capitalize {
            text = capitalize(&text);
        }
        if self.options.escape_quotes {
            text = escape(&text);
        }

        format!("{QUOTE}{text}{QUOTE}")
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\\' || c == QUOTE {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
