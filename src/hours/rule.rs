use crate::error::{Error, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const MAX_GAP_MINUTES: u32 = 24 * 60;

/// Daily active window, e.g. 08:00–17:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    open: NaiveTime,
    close: NaiveTime,
}

impl Default for WorkWindow {
    /// 08:00–17:00, one full threshold per day.
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            close: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
        }
    }
}

impl WorkWindow {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self> {
        if open >= close {
            return Err(Error::EmptyWindow);
        }
        Ok(Self { open, close })
    }

    /// Build a window from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_hhmm(start)?, parse_hhmm(end)?)
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Length of one day's window in hours.
    pub fn daily_hours(&self) -> f64 {
        hours_of(self.close - self.open)
    }

    /// Hours of `[start, end)` that fall inside the window, summed per day.
    ///
    /// Days are taken in `start`'s timezone. An inverted or empty range
    /// yields `0.0`.
    pub fn hours_between<A: TimeZone, B: TimeZone>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
    ) -> f64 {
        let tz = start.timezone();
        let end = end.with_timezone(&tz);
        if end <= *start {
            return 0.0;
        }

        let mut total = Duration::zero();
        let mut day = start.date_naive();
        let last = end.date_naive();

        while day <= last {
            if let (Some(open), Some(close)) =
                (at_local(&tz, day, self.open), at_local(&tz, day, self.close))
            {
                let from = open.max(start.clone());
                let to = close.min(end.clone());
                if to > from {
                    total = total + (to - from);
                }
            }

            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        hours_of(total)
    }
}

/// How elapsed time is turned into working hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoursRule {
    /// Plain elapsed calendar hours. Negative when the range is inverted.
    #[default]
    Calendar,
    /// Only time inside the daily window counts.
    Window(WorkWindow),
}

impl HoursRule {
    pub fn hours_between<A: TimeZone, B: TimeZone>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
    ) -> f64 {
        match self {
            HoursRule::Calendar => calendar_hours_between(start, end),
            HoursRule::Window(window) => window.hours_between(start, end),
        }
    }
}

/// Elapsed calendar hours from `start` to `end`, regardless of either offset.
pub fn calendar_hours_between<A: TimeZone, B: TimeZone>(
    start: &DateTime<A>,
    end: &DateTime<B>,
) -> f64 {
    hours_of(end.with_timezone(&Utc) - start.with_timezone(&Utc))
}

fn hours_of(delta: Duration) -> f64 {
    match delta.num_microseconds() {
        Some(us) => us as f64 / MICROS_PER_HOUR,
        None => delta.num_milliseconds() as f64 / MILLIS_PER_HOUR,
    }
}

// A bound inside a DST gap moves to the first local minute after the gap.
fn at_local<Tz: TimeZone>(tz: &Tz, day: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    let mut local = day.and_time(time);
    for _ in 0..=MAX_GAP_MINUTES {
        if let Some(at) = local.and_local_timezone(tz.clone()).earliest() {
            return Some(at);
        }
        local = local.checked_add_signed(Duration::minutes(1))?;
    }
    None
}

fn parse_hhmm(s: &str) -> Result<NaiveTime> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(Error::InvalidTimeFormat(s.to_string()));
    }
    let hours: u32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| Error::InvalidTimeFormat(s.to_string()))?;
    let minutes: u32 = parts[1]
        .trim()
        .parse()
        .map_err(|_| Error::InvalidTimeFormat(s.to_string()))?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(|| Error::InvalidTime(s.to_string()))
}
