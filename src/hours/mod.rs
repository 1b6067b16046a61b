//! Working-hours durations and overdue status for time-stamped orders.
//!
//! Everything here is a pure function of its inputs plus, for "now"-based
//! queries, one clock reading. The free functions use the process defaults
//! (9-hour threshold, calendar hours, system clock); [`DurationCalculator`]
//! takes explicit settings and an injectable [`Clock`].

pub mod format;
pub mod models;
pub mod rule;

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Offset, TimeZone, Utc};
use format::round2;
use tracing::{debug, trace};

pub use format::format_working_hours;
pub use models::{EstimatedCompletion, HasStartedAt, OrderTimes, OverdueStatus};
pub use rule::{HoursRule, WorkWindow, calendar_hours_between};

/// Working hours after which an in-progress order is overdue.
pub const OVERDUE_THRESHOLD_HOURS: f64 = 9.0;

/// Estimate used when a caller supplies none: the threshold, in minutes.
pub const DEFAULT_ESTIMATE_MINUTES: i64 = 540;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorSettings {
    pub threshold_hours: f64,
    pub default_estimate_minutes: i64,
    pub rule: HoursRule,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            threshold_hours: OVERDUE_THRESHOLD_HOURS,
            default_estimate_minutes: DEFAULT_ESTIMATE_MINUTES,
            rule: HoursRule::Calendar,
        }
    }
}

impl CalculatorSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_hours.is_finite() || self.threshold_hours <= 0.0 {
            return Err(Error::InvalidThreshold(self.threshold_hours));
        }
        Ok(())
    }
}

/// Duration calculator bound to a set of settings and a clock.
#[derive(Debug, Clone)]
pub struct DurationCalculator<C = SystemClock> {
    settings: CalculatorSettings,
    clock: C,
}

impl DurationCalculator<SystemClock> {
    pub fn new(settings: CalculatorSettings) -> Self {
        Self {
            settings,
            clock: SystemClock,
        }
    }
}

impl Default for DurationCalculator {
    fn default() -> Self {
        Self::new(CalculatorSettings::default())
    }
}

fn process_default() -> DurationCalculator {
    DurationCalculator::new(CalculatorSettings::default())
}

impl<C: Clock> DurationCalculator<C> {
    /// Swap the clock, e.g. for a [`crate::clock::FixedClock`] in tests.
    pub fn with_clock<D: Clock>(self, clock: D) -> DurationCalculator<D> {
        DurationCalculator {
            settings: self.settings,
            clock,
        }
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Working hours elapsed between two timestamps under the configured rule.
    ///
    /// A result `<= 0` means the range is empty or inverted.
    pub fn working_hours_between<A: TimeZone, B: TimeZone>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
    ) -> f64 {
        let hours = self.settings.rule.hours_between(start, end);
        trace!(hours, rule = ?self.settings.rule, "working hours computed");
        hours
    }

    /// Whole minutes of working time between start and completion.
    ///
    /// `None` when either timestamp is missing or no time elapsed.
    pub fn estimated_duration<A: TimeZone, B: TimeZone>(
        &self,
        started_at: Option<&DateTime<A>>,
        completed_at: Option<&DateTime<B>>,
    ) -> Option<i64> {
        let (started_at, completed_at) = (started_at?, completed_at?);

        let hours = self.working_hours_between(started_at, completed_at);
        if hours <= 0.0 {
            debug!(hours, "no positive working time between start and completion");
            return None;
        }

        Some((hours * 60.0) as i64)
    }

    /// Whether an order started at `started_at` has reached the threshold by `now`.
    ///
    /// Reads the clock when `now` is `None`. The threshold is inclusive.
    pub fn is_overdue<Tz: TimeZone>(
        &self,
        started_at: Option<&DateTime<Tz>>,
        now: Option<DateTime<Utc>>,
    ) -> bool {
        let Some(started_at) = started_at else {
            return false;
        };
        let now = now.unwrap_or_else(|| self.clock.now());

        self.working_hours_between(started_at, &now) >= self.settings.threshold_hours
    }

    /// Overdue status of `order` as of the clock's current time.
    pub fn overdue_status<O: HasStartedAt + ?Sized>(&self, order: &O) -> OverdueStatus {
        self.overdue_status_at(order, self.clock.now())
    }

    /// Overdue status of `order` as of `now`.
    pub fn overdue_status_at<O: HasStartedAt + ?Sized>(
        &self,
        order: &O,
        now: DateTime<Utc>,
    ) -> OverdueStatus {
        let mut status = OverdueStatus::default();

        let Some(started_at) = order.started_at() else {
            return status;
        };

        let hours = self.working_hours_between(started_at, &now);
        status.working_hours_elapsed = round2(hours);

        if hours >= self.settings.threshold_hours {
            status.is_overdue = true;
            status.overdue_hours = round2(hours - self.settings.threshold_hours);
            debug!(
                elapsed = status.working_hours_elapsed,
                overdue = status.overdue_hours,
                "order is overdue"
            );
        }

        status
    }

    /// Projected completion from a start time and an estimate in minutes.
    ///
    /// The end is plain calendar addition and ignores the working window,
    /// whatever rule is configured. `None` when there is no start or the end
    /// would be out of range.
    pub fn estimate_completion<Tz: TimeZone>(
        &self,
        started_at: Option<&DateTime<Tz>>,
        estimated_minutes: Option<i64>,
    ) -> Option<EstimatedCompletion> {
        let started_at = started_at?;
        let minutes = estimated_minutes.unwrap_or(self.settings.default_estimate_minutes);
        let estimated_hours = minutes as f64 / 60.0;

        let offset = started_at.offset().fix();
        let estimated_end = started_at
            .with_timezone(&offset)
            .checked_add_signed(Duration::try_minutes(minutes)?)?;

        Some(EstimatedCompletion {
            estimated_end,
            estimated_hours,
            formatted: format_working_hours(estimated_hours),
        })
    }
}

/// Working hours between `start` and `end` with the default calendar rule.
pub fn calculate_working_hours_between<A: TimeZone, B: TimeZone>(
    start: &DateTime<A>,
    end: &DateTime<B>,
) -> f64 {
    process_default().working_hours_between(start, end)
}

/// See [`DurationCalculator::estimated_duration`].
pub fn calculate_estimated_duration<A: TimeZone, B: TimeZone>(
    started_at: Option<&DateTime<A>>,
    completed_at: Option<&DateTime<B>>,
) -> Option<i64> {
    process_default().estimated_duration(started_at, completed_at)
}

/// See [`DurationCalculator::is_overdue`]. `now` defaults to the system clock.
pub fn is_order_overdue<Tz: TimeZone>(
    started_at: Option<&DateTime<Tz>>,
    now: Option<DateTime<Utc>>,
) -> bool {
    process_default().is_overdue(started_at, now)
}

/// See [`DurationCalculator::overdue_status`]. Uses the system clock.
pub fn get_order_overdue_status<O: HasStartedAt + ?Sized>(order: &O) -> OverdueStatus {
    process_default().overdue_status(order)
}

/// See [`DurationCalculator::estimate_completion`]. Defaults to 540 minutes.
pub fn estimate_completion_time<Tz: TimeZone>(
    started_at: Option<&DateTime<Tz>>,
    estimated_minutes: Option<i64>,
) -> Option<EstimatedCompletion> {
    process_default().estimate_completion(started_at, estimated_minutes)
}
