use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "glyphcaster")]
#[command(about = "Real-time terminal ray caster")]
pub struct Args {
    /// TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Write log records to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Screen width in characters (overrides the config file)
    #[arg(long)]
    pub width: Option<usize>,

    /// Screen height in characters (overrides the config file)
    #[arg(long)]
    pub height: Option<usize>,

    /// Render frames headless and report timing instead of running interactively
    #[arg(long)]
    pub bench: bool,

    /// Number of frames rendered by --bench
    #[arg(long, default_value = "200")]
    pub frames: u32,

    /// Render a single frame headless and write it to this text file
    #[arg(long)]
    pub dump: Option<PathBuf>,
}
