/// Text To Array - print the lines of text files as array literals
///
/// The main entry point. It parses command-line arguments, formats every
/// requested file and prints one literal per file.

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use std::fs::File;
use std::path::PathBuf;
use std::process;

use text_to_array::app::run_formatter;
use text_to_array::config;
use text_to_array::utils::output_formatter::format_diagnostic;
use text_to_array::FormatOptions;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "text_to_array",
    version,
    about = "Print the lines of text files as array literals",
    long_about = "Reads each file and prints its lines as a single literal such as
['first line', 'second line'], ready to paste into source code.
Trailing whitespace is removed from every line; leading whitespace is kept."
)]
struct Args {
    /// Path(s) to the file(s) to format
    paths: Vec<PathBuf>,

    /// Escape backslashes and single quotes inside items
    #[arg(long = "escape-quotes", action = ArgAction::SetTrue)]
    escape_quotes: bool,

    /// Capitalize each item (first letter upper-case, the rest lower-case)
    #[arg(long = "capitalize", action = ArgAction::SetTrue)]
    capitalize: bool,

    /// Path to JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Number of parallel workers (0=auto, default: 1)
    #[arg(long = "parallel", default_value = "1")]
    parallel: usize,

    /// Stop at the first file that cannot be read
    #[arg(long = "fail-fast", action = ArgAction::SetTrue)]
    fail_fast: bool,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Log file path (default: stderr)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args);

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", format_diagnostic(&e));
            process::exit(1);
        }
    };

    if args.paths.is_empty() {
        info!("No files given, nothing to do");
        return Ok(());
    }

    let results = run_formatter(&args.paths, options, args.parallel, args.fail_fast)?;

    let mut failures = 0;
    for (_, result) in &results {
        match result {
            Ok(literal) => println!("{}", literal),
            Err(e) => {
                failures += 1;
                eprintln!("{}", format_diagnostic(e));
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }

    Ok(())
}

/// Set up logging to stderr or to a file
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        match File::create(log_file) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {}", log_file.display(), e),
        }
    }

    builder.init();
}

/// Combine the configuration file (if any) with command line flags
fn load_options(args: &Args) -> Result<FormatOptions, text_to_array::FormatError> {
    let file_options = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::default_options(),
    };

    let flag_options = FormatOptions {
        escape_quotes: args.escape_quotes,
        capitalize: args.capitalize,
    };

    Ok(config::merge(file_options, flag_options))
}
