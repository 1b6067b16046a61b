use crate::OutputFormat;
use crate::clock::Clock;
use crate::hours::{DurationCalculator, OrderTimes, format_working_hours};
use crate::timestamp::parse_timestamp;
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::json;
use tracing::debug;

/// Working minutes between a start and a completion timestamp.
pub fn duration<C: Clock>(
    calc: &DurationCalculator<C>,
    started_at: &str,
    completed_at: &str,
    assume_utc: bool,
    format: OutputFormat,
) -> Result<()> {
    let started = parse_timestamp(started_at, assume_utc).context("Invalid --started-at")?;
    let completed = parse_timestamp(completed_at, assume_utc).context("Invalid --completed-at")?;

    let minutes = calc.estimated_duration(Some(&started), Some(&completed));
    debug!(?minutes, "duration computed");

    match format {
        OutputFormat::Json => {
            println!("{}", json!({ "minutes": minutes }));
        }
        OutputFormat::Text => match minutes {
            Some(m) => println!("{} min ({})", m, format_working_hours(m as f64 / 60.0)),
            None => println!("n/a"),
        },
    }

    Ok(())
}

/// Overdue status of an order started at `started_at`.
pub fn overdue<C: Clock>(
    calc: &DurationCalculator<C>,
    started_at: Option<&str>,
    now: Option<&str>,
    assume_utc: bool,
    format: OutputFormat,
) -> Result<()> {
    let order = OrderTimes {
        started_at: started_at
            .map(|s| parse_timestamp(s, assume_utc))
            .transpose()
            .context("Invalid --started-at")?,
        completed_at: None,
    };

    let now = match now {
        Some(s) => parse_timestamp(s, assume_utc)
            .context("Invalid --now")?
            .with_timezone(&Utc),
        None => calc.now(),
    };

    let status = calc.overdue_status_at(&order, now);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&status).context("Failed to serialize status")?
            );
        }
        OutputFormat::Text => {
            if order.started_at.is_none() {
                println!("Not started.");
            } else if status.is_overdue {
                println!(
                    "OVERDUE by {} ({} elapsed)",
                    format_working_hours(status.overdue_hours),
                    format_working_hours(status.working_hours_elapsed)
                );
            } else {
                println!(
                    "On time ({} elapsed)",
                    format_working_hours(status.working_hours_elapsed)
                );
            }
        }
    }

    Ok(())
}

pub fn format_hours(hours: f64, format: OutputFormat) -> Result<()> {
    let formatted = format_working_hours(hours);
    match format {
        OutputFormat::Json => println!("{}", json!({ "formatted": formatted })),
        OutputFormat::Text => println!("{}", formatted),
    }
    Ok(())
}

/// Estimated completion for an order started at `started_at`.
pub fn estimate<C: Clock>(
    calc: &DurationCalculator<C>,
    started_at: &str,
    minutes: Option<i64>,
    assume_utc: bool,
    format: OutputFormat,
) -> Result<()> {
    let started = parse_timestamp(started_at, assume_utc).context("Invalid --started-at")?;

    let estimate = calc
        .estimate_completion(Some(&started), minutes)
        .context("Estimated completion is out of range")?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&estimate).context("Failed to serialize estimate")?
            );
        }
        OutputFormat::Text => {
            println!(
                "Estimated completion: {} ({})",
                estimate.estimated_end.to_rfc3339(),
                estimate.formatted
            );
        }
    }

    Ok(())
}
