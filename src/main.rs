use anyhow::Result;
use clap::{Parser, Subcommand};
use order_hours::OutputFormat;
use order_hours::commands;
use order_hours::config;
use order_hours::hours::DurationCalculator;
use order_hours::telemetry;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "ohrs")]
#[command(about = "Working-hours durations and overdue status for orders")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Config file (default ~/.order-hours/config.toml)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Treat timestamps without an offset as UTC")]
    assume_utc: bool,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Working minutes between start and completion
    Duration {
        #[arg(long, help = "Start timestamp (RFC 3339)")]
        started_at: String,
        #[arg(long, help = "Completion timestamp (RFC 3339)")]
        completed_at: String,
    },
    /// Show overdue status of an in-progress order
    Overdue {
        #[arg(long, help = "Start timestamp (RFC 3339); omit for a not-started order")]
        started_at: Option<String>,
        #[arg(long, help = "Evaluate as of this time instead of now")]
        now: Option<String>,
    },
    /// Format decimal hours, e.g. 9.5 -> 9h 30m
    Format {
        #[arg(allow_negative_numbers = true, help = "Hours (decimal)")]
        hours: f64,
    },
    /// Estimate completion time
    Estimate {
        #[arg(long, help = "Start timestamp (RFC 3339)")]
        started_at: String,
        #[arg(long, help = "Estimated duration in minutes (defaults to the threshold)")]
        minutes: Option<i64>,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let config = config::load(cli.config.as_deref())?;
    let calc = DurationCalculator::new(config.calculator_settings()?);
    debug!(settings = ?calc.settings(), "calculator ready");

    match &cli.command {
        Commands::Duration {
            started_at,
            completed_at,
        } => {
            commands::hours::duration(&calc, started_at, completed_at, cli.assume_utc, cli.format)?;
        }
        Commands::Overdue { started_at, now } => {
            commands::hours::overdue(
                &calc,
                started_at.as_deref(),
                now.as_deref(),
                cli.assume_utc,
                cli.format,
            )?;
        }
        Commands::Format { hours } => {
            commands::hours::format_hours(*hours, cli.format)?;
        }
        Commands::Estimate {
            started_at,
            minutes,
        } => {
            commands::hours::estimate(&calc, started_at, *minutes, cli.assume_utc, cli.format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
