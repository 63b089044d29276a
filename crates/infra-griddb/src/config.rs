// GridDB Cloud connection settings

use jobboard_core::error::{AppError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "GRIDDB_BASE_URL";
pub const ENV_AUTH_TOKEN: &str = "GRIDDB_AUTH_TOKEN";
pub const ENV_AUTH_SCHEME: &str = "GRIDDB_AUTH_SCHEME";
pub const ENV_TIMEOUT_SECS: &str = "GRIDDB_TIMEOUT_SECS";

/// Authorization header scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    #[default]
    Basic,
    Bearer,
}

impl AuthScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthScheme::Basic => "Basic",
            AuthScheme::Bearer => "Bearer",
        }
    }
}

impl FromStr for AuthScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(AuthScheme::Basic),
            "bearer" => Ok(AuthScheme::Bearer),
            other => Err(AppError::Config(format!(
                "Unsupported auth scheme: {:?} (expected basic or bearer)",
                other
            ))),
        }
    }
}

/// Connection settings for the GridDB Cloud Web API
///
/// `base_url` points at the database endpoint, e.g.
/// `https://cloud1.griddb.com/trial001/griddb/v2/gs_clustertrial001/dbs/public`.
/// `auth_token` is opaque and sent as-is after the scheme.
#[derive(Clone)]
pub struct GridDbConfig {
    pub base_url: String,
    pub auth_token: String,
    pub auth_scheme: AuthScheme,
    pub timeout: Duration,
}

impl GridDbConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            auth_scheme: AuthScheme::default(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_auth_scheme(mut self, auth_scheme: AuthScheme) -> Self {
        self.auth_scheme = auth_scheme;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `GRIDDB_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::Config(format!("{} is not set", key)))
        };

        let mut config = Self::new(required(ENV_BASE_URL)?, required(ENV_AUTH_TOKEN)?);

        if let Some(scheme) = lookup(ENV_AUTH_SCHEME).filter(|v| !v.trim().is_empty()) {
            config.auth_scheme = scheme.parse()?;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a number of seconds: {:?}",
                    ENV_TIMEOUT_SECS, secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Base URL must be http(s): {:?}",
                self.base_url
            )));
        }
        if self.auth_token.trim().is_empty() {
            return Err(AppError::Config("Auth token must not be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(AppError::Config("Timeout must be positive".to_string()));
        }
        Ok(())
    }

    pub(crate) fn authorization(&self) -> String {
        format!("{} {}", self.auth_scheme.as_str(), self.auth_token.trim())
    }

    /// Absolute URL for an API path (`/containers`, `/sql/dml/query`, ...)
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim().trim_end_matches('/'), path)
    }
}

// Token stays out of logs
impl fmt::Debug for GridDbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridDbConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .field("auth_scheme", &self.auth_scheme)
            .field("timeout", &self.timeout)
            .finish()
    }
}
