pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod hours;
pub mod telemetry;
pub mod timestamp;

use clap::ValueEnum;
use serde::Serialize;

pub use hours::{
    DurationCalculator, EstimatedCompletion, HasStartedAt, OVERDUE_THRESHOLD_HOURS, OverdueStatus,
    calculate_estimated_duration, calculate_working_hours_between, estimate_completion_time,
    format_working_hours, get_order_overdue_status, is_order_overdue,
};

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
