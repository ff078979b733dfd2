// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::encoding::decode_content;
use crate::line_defs::LineDefsStore;
use crate::sentence::{extract_sentence, strip_readings};

mod cue;
mod encoding;
mod errors;
mod line_defs;
mod markup;
mod renderer;
mod sentence;
mod text_utils;

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a sentence in a transcript file (default command)
    Lookup(LookupArgs),

    /// Generate shell completions for transplayer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct LookupArgs {
    /// Transcript file to read
    #[arg(value_name = "TRANSCRIPT")]
    transcript: PathBuf,

    /// Transcript line to look up (0-based)
    #[arg(short, long, default_value_t = 0)]
    line: usize,

    /// Character offset of the cursor within the line
    #[arg(short, long, default_value_t = 0)]
    offset: usize,

    /// Saved definitions file to show entries for the line from
    #[arg(short, long)]
    defs: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// transplayer - subtitle study player text engine
///
/// Decodes a transcript of unknown encoding, strips inline readings and
/// extracts the sentence around a cursor position, the same pipeline the
/// study player runs when the user hovers a transcript line.
#[derive(Parser, Debug)]
#[command(name = "transplayer")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle study player text engine")]
#[command(long_about = "transplayer decodes subtitle transcripts of unknown encoding and extracts
the sentence around a cursor position.

EXAMPLES:
    transplayer episode01.txt                   # First sentence of the first line
    transplayer -l 12 -o 7 episode01.txt        # Sentence around character 7 of line 12
    transplayer -l 12 -d episode01.tdef episode01.txt
                                                # Also show definitions saved for line 12
    transplayer completions bash > transplayer.bash")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript file to read
    #[arg(value_name = "TRANSCRIPT")]
    transcript: Option<PathBuf>,

    /// Transcript line to look up (0-based)
    #[arg(short, long, default_value_t = 0)]
    line: usize,

    /// Character offset of the cursor within the line
    #[arg(short, long, default_value_t = 0)]
    offset: usize,

    /// Saved definitions file to show entries for the line from
    #[arg(short, long)]
    defs: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default; the level is
    // raised later if the command line asks for it
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "transplayer", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Lookup(args)) => run_lookup(args),
        None => {
            // Default behavior - use top-level args
            let transcript = cli
                .transcript
                .ok_or_else(|| anyhow!("TRANSCRIPT is required when no subcommand is specified"))?;

            run_lookup(LookupArgs {
                transcript,
                line: cli.line,
                offset: cli.offset,
                defs: cli.defs,
                log_level: cli.log_level,
            })
        }
    }
}

fn run_lookup(options: LookupArgs) -> Result<()> {
    if let Some(level) = &options.log_level {
        log::set_max_level(level.clone().into());
    }

    let raw = std::fs::read(&options.transcript)
        .with_context(|| format!("Failed to read transcript: {:?}", options.transcript))?;

    let decoded = decode_content(&raw);
    info!(
        "Decoded {:?} as {} ({} characters)",
        options.transcript,
        decoded.encoding,
        decoded.text.chars().count()
    );

    let lines: Vec<&str> = decoded.text.lines().collect();
    let line_text = lines.get(options.line).ok_or_else(|| {
        anyhow!(
            "Line {} out of range: transcript has {} line(s)",
            options.line,
            lines.len()
        )
    })?;

    let stripped = strip_readings(line_text);
    let sentence = extract_sentence(&stripped, options.offset);
    println!("{}", sentence);

    if let Some(defs_path) = &options.defs {
        let store = LineDefsStore::load(defs_path)
            .with_context(|| format!("Failed to load definitions file: {:?}", defs_path))?;
        let saved = store.format_line(options.line);
        if saved.is_empty() {
            warn!("No saved definitions for line {}", options.line);
        } else {
            print!("{}", saved);
        }
    }

    Ok(())
}
