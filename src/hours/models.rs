use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

/// Anything that can report when an order was started.
pub trait HasStartedAt {
    type Tz: TimeZone;

    fn started_at(&self) -> Option<&DateTime<Self::Tz>>;
}

/// Minimal order timestamps, for callers without their own order type.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct OrderTimes {
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<FixedOffset>>,
    #[serde(rename = "completedAt", default)]
    pub completed_at: Option<DateTime<FixedOffset>>,
}

impl HasStartedAt for OrderTimes {
    type Tz = FixedOffset;

    fn started_at(&self) -> Option<&DateTime<FixedOffset>> {
        self.started_at.as_ref()
    }
}

/// Overdue status of an order, computed fresh on each query.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct OverdueStatus {
    pub is_overdue: bool,
    pub working_hours_elapsed: f64,
    pub overdue_hours: f64,
}

/// Projected completion for an order.
///
/// `estimated_end` keeps the offset of the start timestamp.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EstimatedCompletion {
    pub estimated_end: DateTime<FixedOffset>,
    pub estimated_hours: f64,
    pub formatted: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_order_times() {
        let json = json!({
            "startedAt": "2026-01-07T18:00:00+02:00",
            "completedAt": null
        });

        let order: OrderTimes = serde_json::from_value(json).unwrap();
        let started = order.started_at().unwrap();
        assert_eq!(started.offset().local_minus_utc(), 2 * 3600);
        assert!(order.completed_at.is_none());
    }

    #[test]
    fn test_deserialize_order_without_start() {
        let order: OrderTimes = serde_json::from_value(json!({ "startedAt": null })).unwrap();
        assert!(order.started_at().is_none());
    }

    #[test]
    fn test_serialize_overdue_status() {
        let status = OverdueStatus {
            is_overdue: true,
            working_hours_elapsed: 10.5,
            overdue_hours: 1.5,
        };

        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["is_overdue"], true);
        assert_eq!(json["working_hours_elapsed"], 10.5);
        assert_eq!(json["overdue_hours"], 1.5);
    }

    #[test]
    fn test_default_overdue_status_is_zero() {
        assert_eq!(
            OverdueStatus::default(),
            OverdueStatus {
                is_overdue: false,
                working_hours_elapsed: 0.0,
                overdue_hours: 0.0,
            }
        );
    }
}
