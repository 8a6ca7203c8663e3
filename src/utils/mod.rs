/// Utility modules for the formatter
///
/// This module contains helpers for reading input files and building the
/// text written to the terminal.

pub mod file_utils;
pub mod output_formatter;
