// Seeder configuration (environment)

use anyhow::{Context, Result};
use jobboard_infra_griddb::GridDbConfig;

pub const ENV_SEED_JOBS: &str = "JOBBOARD_SEED_JOBS";
pub const ENV_LOG_FORMAT: &str = "JOBBOARD_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Anything but `json` falls back to pretty output
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var(ENV_LOG_FORMAT).ok().as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct SeederConfig {
    pub griddb: GridDbConfig,
    /// Also seed the demo job posts and their skills
    pub seed_jobs: bool,
}

impl SeederConfig {
    pub fn from_env() -> Result<Self> {
        let griddb = GridDbConfig::from_env().context("Invalid GridDB configuration")?;
        let seed_jobs = parse_flag(std::env::var(ENV_SEED_JOBS).ok().as_deref());
        Ok(Self { griddb, seed_jobs })
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes")
    )
}
