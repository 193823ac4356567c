use anyhow::{bail, Context, Result};
use chrono::Weekday;
use monthgrid::{GridOptions, LabelFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_week_start()    -> Weekday { Weekday::Mon }
fn default_month_label()   -> String  { LabelFormat::DEFAULT_MONTH.to_owned() }
fn default_weekday_label() -> String  { LabelFormat::DEFAULT_WEEKDAY.to_owned() }

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// First column of the grid, e.g. "monday" or "Sun".
    #[serde(default = "default_week_start")]
    pub week_start:    Weekday,
    /// strftime pattern for the month heading.
    #[serde(default = "default_month_label")]
    pub month_label:   String,
    #[serde(default = "default_weekday_label")]
    pub weekday_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            week_start:    default_week_start(),
            month_label:   default_month_label(),
            weekday_label: default_weekday_label(),
        }
    }
}

impl AppConfig {
    /// Reads `path` when given (it must exist), otherwise the per-user
    /// config file, falling back to defaults when that is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) if !p.exists() => bail!("config file {} does not exist", p.display()),
            Some(p) => p.to_path_buf(),
            None    => config_dir().join("config.toml"),
        };
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cfg = Self::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn grid_options(&self) -> Result<GridOptions> {
        Ok(GridOptions {
            week_start: self.week_start,
            labels:     LabelFormat::new(&self.month_label, &self.weekday_label)?,
        })
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("monthgrid")
}
