/// Core module for the line literal formatter
///
/// This module contains the formatter itself and the error type it reports.

pub mod error;
pub mod formatter;
