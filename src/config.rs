use crate::hours::{CalculatorSettings, HoursRule, OVERDUE_THRESHOLD_HOURS, WorkWindow};
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "order-hours";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub overdue: OverdueConfig,
    #[serde(default)]
    pub work_hours: WorkHoursConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OverdueConfig {
    #[serde(default = "default_threshold_hours")]
    pub threshold_hours: f64,
    /// Estimate used by `estimate` when no minutes are given; unset means
    /// the threshold in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_estimate_minutes: Option<i64>,
}

fn default_threshold_hours() -> f64 {
    OVERDUE_THRESHOLD_HOURS
}

impl Default for OverdueConfig {
    fn default() -> Self {
        Self {
            threshold_hours: default_threshold_hours(),
            default_estimate_minutes: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    #[default]
    Calendar,
    Window,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WorkHoursConfig {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_end")]
    pub end: String,
    #[serde(default)]
    pub rule: RuleKind,
}

fn default_start() -> String {
    "08:00".to_string()
}

fn default_end() -> String {
    "17:00".to_string()
}

impl Default for WorkHoursConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            rule: RuleKind::default(),
        }
    }
}

impl WorkHoursConfig {
    /// Validate work hours configuration
    pub fn validate(&self) -> Result<()> {
        self.window()?;
        Ok(())
    }

    pub fn window(&self) -> Result<WorkWindow> {
        Ok(WorkWindow::parse(&self.start, &self.end)?)
    }

    pub fn rule(&self) -> Result<HoursRule> {
        Ok(match self.rule {
            RuleKind::Calendar => HoursRule::Calendar,
            RuleKind::Window => HoursRule::Window(self.window()?),
        })
    }
}

impl OverdueConfig {
    /// Validate overdue configuration
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_hours.is_finite() || self.threshold_hours <= 0.0 {
            anyhow::bail!(
                "Overdue threshold must be greater than 0, got {}",
                self.threshold_hours
            );
        }

        if self.default_estimate_minutes.is_some_and(|m| m < 0) {
            anyhow::bail!("Default estimate must not be negative");
        }

        Ok(())
    }

    /// Configured default estimate, or the threshold in minutes.
    pub fn estimate_minutes(&self) -> i64 {
        self.default_estimate_minutes
            .unwrap_or((self.threshold_hours * 60.0) as i64)
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.overdue.validate()?;
        self.work_hours.validate()?;
        Ok(())
    }

    /// Settings for a [`crate::hours::DurationCalculator`].
    pub fn calculator_settings(&self) -> Result<CalculatorSettings> {
        let settings = CalculatorSettings {
            threshold_hours: self.overdue.threshold_hours,
            default_estimate_minutes: self.overdue.estimate_minutes(),
            rule: self.work_hours.rule()?,
        };
        settings.validate()?;
        Ok(settings)
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Default config location.
///
/// `~/.order-hours/config.toml`, falling back to the platform config
/// directory when no home directory is known.
pub fn default_path() -> Result<PathBuf> {
    if let Some(home) = home::home_dir() {
        return Ok(home.join(format!(".{}", APP_DIR)).join("config.toml"));
    }

    let dir = dirs::config_dir().context("Could not find home or config directory")?;
    Ok(dir.join(APP_DIR).join("config.toml"))
}

/// Load from `path`, or from [`default_path`]. A missing file yields defaults.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_path()?,
    };

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    debug!(path = %path.display(), "loading config");
    load_from_path(&path).with_context(|| format!("Failed to load {}", path.display()))
}
