use order_hours::config::{Config, OverdueConfig, RuleKind, WorkHoursConfig};

fn work_hours(start: &str, end: &str) -> WorkHoursConfig {
    WorkHoursConfig {
        start: start.to_string(),
        end: end.to_string(),
        rule: RuleKind::Window,
    }
}

#[test]
fn test_work_hours_validation_valid() {
    assert!(work_hours("08:00", "17:00").validate().is_ok());
}

#[test]
fn test_work_hours_validation_invalid_format() {
    let result = work_hours("9am", "5pm").validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Invalid time format")
    );
}

#[test]
fn test_work_hours_validation_invalid_hour() {
    assert!(work_hours("25:00", "17:00").validate().is_err());
}

#[test]
fn test_work_hours_validation_start_after_end() {
    let result = work_hours("17:00", "09:00").validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("start time must be before end time")
    );
}

#[test]
fn test_work_hours_validation_equal_times() {
    assert!(work_hours("09:00", "09:00").validate().is_err());
}

#[test]
fn test_overdue_validation_zero_threshold() {
    let config = OverdueConfig {
        threshold_hours: 0.0,
        default_estimate_minutes: None,
    };
    let result = config.validate();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("greater than 0"));
}

#[test]
fn test_overdue_validation_negative_estimate() {
    let config = OverdueConfig {
        threshold_hours: 9.0,
        default_estimate_minutes: Some(-5),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_full_config_validation() {
    let config = Config {
        overdue: OverdueConfig::default(),
        work_hours: work_hours("08:30", "17:00"),
    };
    assert!(config.validate().is_ok());

    let settings = config.calculator_settings().unwrap();
    assert_eq!(settings.threshold_hours, 9.0);
}
