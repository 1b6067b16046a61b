/// Render working hours as `"9h 30m"`, `"2h"`, `"15m"` or `"0h"`.
///
/// Minutes are truncated, not rounded. Negative input renders as `"0h"`.
pub fn format_working_hours(hours: f64) -> String {
    if hours < 0.0 {
        return "0h".to_string();
    }

    // `as` saturates and maps NaN to 0
    let total_minutes = (hours * 60.0) as u64;
    let hours_part = total_minutes / 60;
    let minutes_part = total_minutes % 60;

    match (hours_part, minutes_part) {
        (0, 0) => "0h".to_string(),
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Round to two decimal places for display, ties to even.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
