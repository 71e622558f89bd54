//! Simulation settings, read from the environment.

use shopkeep_core::{DomainError, DomainResult};

pub const DAYS_VAR: &str = "SHOP_SIM_DAYS";
pub const FORMAT_VAR: &str = "SHOP_SIM_FORMAT";

const DEFAULT_DAYS: u32 = 2;

/// How each day's listing is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    /// `name, sell_in, quality` lines under a day header.
    Text,
    /// One JSON array per day.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub days: u32,
    pub format: ReportFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: ReportFormat::Text,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let defaults = Self::default();

        let days = match lookup(DAYS_VAR) {
            Some(raw) => parse_days(&raw)?,
            None => {
                tracing::warn!("{DAYS_VAR} not set; simulating {} days", defaults.days);
                defaults.days
            }
        };

        let format = match lookup(FORMAT_VAR) {
            Some(raw) => parse_format(&raw)?,
            None => defaults.format,
        };

        Ok(Self { days, format })
    }
}

fn parse_days(raw: &str) -> DomainResult<u32> {
    raw.trim().parse::<u32>().map_err(|e| {
        DomainError::validation(format!("{DAYS_VAR} must be a non-negative integer ({raw:?}: {e})"))
    })
}

fn parse_format(raw: &str) -> DomainResult<ReportFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(ReportFormat::Text),
        "json" => Ok(ReportFormat::Json),
        other => Err(DomainError::validation(format!(
            "{FORMAT_VAR} must be `text` or `json`, got `{other}`"
        ))),
    }
}
