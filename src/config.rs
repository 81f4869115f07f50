//! Runner configuration

use std::path::PathBuf;

use clap::{Args, Parser};
use rust_decimal::Decimal;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "REBATES_LOG_LEVEL", default_value = "warn")]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "REBATES_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

/// Calculate a rebate for a product and volume.
///
/// Any request field left off the command line is prompted for.
#[derive(Debug, Parser)]
#[command(name = "rebates", about = "Rebate calculator", long_about = None)]
pub(crate) struct Cli {
    /// Rebate identifier
    #[arg(long)]
    pub(crate) rebate: Option<String>,

    /// Product identifier
    #[arg(long)]
    pub(crate) product: Option<String>,

    /// Volume (quantity of units)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) volume: Option<Decimal>,

    /// Directory holding `rebates/` and `products/` fixture files
    #[arg(long, env = "REBATES_FIXTURES", default_value = "./fixtures")]
    pub(crate) fixtures: PathBuf,

    /// Fixture file name (without `.yml`) to load from each directory
    #[arg(long, env = "REBATES_FIXTURE_SET", default_value = "default")]
    pub(crate) fixture_set: String,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,
}
