use order_hours::config::{RuleKind, load, load_from_path};
use order_hours::hours::{HoursRule, WorkWindow};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

#[test]
fn test_load_config_valid() {
    let temp_file = write_config(
        r#"
        [overdue]
        threshold_hours = 8.0
        default_estimate_minutes = 480

        [work_hours]
        start = "09:00"
        end = "17:00"
        rule = "window"
    "#,
    );

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.overdue.threshold_hours, 8.0);
    assert_eq!(config.overdue.default_estimate_minutes, Some(480));
    assert_eq!(config.work_hours.rule, RuleKind::Window);

    let settings = config.calculator_settings().unwrap();
    assert_eq!(
        settings.rule,
        HoursRule::Window(WorkWindow::parse("09:00", "17:00").unwrap())
    );
}

#[test]
fn test_load_config_empty_uses_defaults() {
    let temp_file = write_config("");

    let config = load_from_path(temp_file.path()).expect("Empty config should load");

    assert_eq!(config.overdue.threshold_hours, 9.0);
    assert_eq!(config.overdue.default_estimate_minutes, None);
    assert_eq!(config.calculator_settings().unwrap().default_estimate_minutes, 540);
    assert_eq!(config.work_hours.start, "08:00");
    assert_eq!(config.work_hours.end, "17:00");
    assert_eq!(config.work_hours.rule, RuleKind::Calendar);
}

#[test]
fn test_load_config_threshold_drives_default_estimate() {
    let temp_file = write_config(
        r#"
        [overdue]
        threshold_hours = 4.0
    "#,
    );

    let config = load_from_path(temp_file.path()).unwrap();
    let settings = config.calculator_settings().unwrap();

    assert_eq!(settings.threshold_hours, 4.0);
    assert_eq!(settings.default_estimate_minutes, 240);
}

#[test]
fn test_load_config_partial_section() {
    let temp_file = write_config(
        r#"
        [work_hours]
        start = "07:30"
    "#,
    );

    let config = load_from_path(temp_file.path()).unwrap();
    assert_eq!(config.work_hours.start, "07:30");
    assert_eq!(config.work_hours.end, "17:00");
}

#[test]
fn test_load_config_unknown_rule_fails() {
    let temp_file = write_config(
        r#"
        [work_hours]
        rule = "lunar"
    "#,
    );

    assert!(load_from_path(temp_file.path()).is_err());
}

#[test]
fn test_load_missing_path_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load(Some(&dir.path().join("config.toml"))).unwrap();
    assert_eq!(config.overdue.threshold_hours, 9.0);
}
