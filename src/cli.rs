//! # FMTCHECK CLI
//!
//! Command-line front end for the provider format validators.
//!
//! ## Usage
//!
//! ```bash
//! # Check an ARN
//! fmtcheck arn arn:aws:iam::123456789012:role/example
//!
//! # Check several maintenance windows, reporting against a named attribute
//! fmtcheck weekly-window --attribute maintenance_window mon:04:00-mon:05:00 sun:23:00-mon:01:00
//!
//! # JSON diagnostics
//! fmtcheck utc-timestamp --output json 2023-01-01
//! ```
//!
//! Exits with status 1 when any value fails its check.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use provider_validators::config::LoggingConfig;
use provider_validators::observability::init_tracing;
use provider_validators::prelude::*;
use tracing::{debug, info};

/// Provider attribute format checker
#[derive(Debug, Parser)]
#[command(name = "fmtcheck")]
#[command(
    about = "Check values against provider attribute formats",
    long_about = None,
    after_help = "\
Available formats:
  arn            - Amazon Resource Name
  utc-timestamp  - RFC3339 timestamp
  daily-window   - hh24:mi-hh24:mi
  weekly-window  - ddd:hh24:mi-ddd:hh24:mi

Examples:
  fmtcheck arn arn:aws:s3:::my-bucket
  fmtcheck daily-window 04:00-05:00
"
)]
struct Cli {
    /// Format to check values against
    #[arg(value_enum)]
    format: Format,

    /// Values to check
    #[arg(value_name = "VALUE", required = true)]
    values: Vec<String>,

    /// Attribute name used in diagnostic paths
    #[arg(long, short = 'a', default_value = "value")]
    attribute: String,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = Output::Text)]
    output: Output,
}

/// Formats supported by fmtcheck
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Arn,
    UtcTimestamp,
    DailyWindow,
    WeeklyWindow,
}

impl Format {
    fn validator(self) -> Box<dyn StringValidator> {
        match self {
            Format::Arn => arn(),
            Format::UtcTimestamp => utc_timestamp(),
            Format::DailyWindow => once_a_day_window_format(),
            Format::WeeklyWindow => once_a_week_window_format(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Json,
}

/// Validate every value, one attribute path per value
fn check_values(validator: &dyn StringValidator, attribute: &str, values: &[String]) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    for (index, value) in values.iter().enumerate() {
        let path = if values.len() == 1 {
            AttributePath::root(attribute)
        } else {
            AttributePath::root(attribute).at_list_index(index)
        };
        debug!(path = %path, "Checking value");
        diagnostics.extend(validator.validate(&StringRequest::new(path, value.as_str())));
    }

    diagnostics
}

fn main() -> Result<()> {
    init_tracing(&LoggingConfig::from_env())?;

    let cli = Cli::parse();
    let validator = cli.format.validator();

    let diagnostics = check_values(validator.as_ref(), &cli.attribute, &cli.values);
    info!(
        checked = cli.values.len(),
        errors = diagnostics.error_count(),
        "Format check complete"
    );

    match cli.output {
        Output::Json => {
            let rendered = serde_json::to_string_pretty(&diagnostics)
                .context("Failed to serialize diagnostics")?;
            println!("{rendered}");
        }
        Output::Text => {
            if diagnostics.is_empty() {
                println!("✅ {} value(s) valid", cli.values.len());
            }
            for diagnostic in &diagnostics {
                println!("❌ {diagnostic}");
            }
        }
    }

    if diagnostics.has_error() {
        std::process::exit(1);
    }

    Ok(())
}
