//! Service configuration: upstream API bases, credentials and timeouts.
//!
//! Production defaults live here; every value can be overridden through the
//! environment, which is how the binary and the integration tests point the
//! adapters somewhere else.

use url::Url;

use crate::error::{BadgeError, Result};
use crate::http::DEFAULT_TIMEOUT_SECS;

pub const GRABCAD_API_BASE: &str = "https://grabcad.com";
pub const PRINTABLES_API_BASE: &str = "https://api.printables.com";
pub const THINGIVERSE_API_BASE: &str = "https://api.thingiverse.com";

pub const ENV_GRABCAD_API: &str = "MAKERBADGE_GRABCAD_API";
pub const ENV_PRINTABLES_API: &str = "MAKERBADGE_PRINTABLES_API";
pub const ENV_THINGIVERSE_API: &str = "MAKERBADGE_THINGIVERSE_API";
pub const ENV_THINGIVERSE_TOKEN: &str = "THINGIVERSE_APP_TOKEN";
pub const ENV_HTTP_TIMEOUT: &str = "MAKERBADGE_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub grabcad_api_base: String,
    pub printables_api_base: String,
    pub thingiverse_api_base: String,
    /// Application bearer token. Thingiverse counters cannot be fetched
    /// without it.
    pub thingiverse_token: Option<String>,
    pub http_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            grabcad_api_base: GRABCAD_API_BASE.to_string(),
            printables_api_base: PRINTABLES_API_BASE.to_string(),
            thingiverse_api_base: THINGIVERSE_API_BASE.to_string(),
            thingiverse_token: None,
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let base = |key: &str, default: String| -> Result<String> {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                Some(value) => normalize_base(&value),
                None => Ok(default),
            }
        };

        let http_timeout_secs = match lookup(ENV_HTTP_TIMEOUT) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                BadgeError::InvalidConfig(format!("{} must be a whole number of seconds", ENV_HTTP_TIMEOUT))
            })?,
            None => defaults.http_timeout_secs,
        };

        Ok(Self {
            grabcad_api_base: base(ENV_GRABCAD_API, defaults.grabcad_api_base)?,
            printables_api_base: base(ENV_PRINTABLES_API, defaults.printables_api_base)?,
            thingiverse_api_base: base(ENV_THINGIVERSE_API, defaults.thingiverse_api_base)?,
            thingiverse_token: lookup(ENV_THINGIVERSE_TOKEN)
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            http_timeout_secs,
        })
    }

    /// Point every adapter at one base URL (hermetic tests).
    pub fn with_api_base(mut self, base: &str) -> Result<Self> {
        let base = normalize_base(base)?;
        self.grabcad_api_base = base.clone();
        self.printables_api_base = base.clone();
        self.thingiverse_api_base = base;
        Ok(self)
    }

    pub fn with_thingiverse_token(mut self, token: &str) -> Self {
        self.thingiverse_token = Some(token.to_string());
        self
    }

    pub fn with_http_timeout(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }

    pub fn thingiverse_configured(&self) -> bool {
        self.thingiverse_token.is_some()
    }
}

fn normalize_base(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw.trim())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(BadgeError::InvalidConfig(format!(
            "unsupported scheme for API base: {}",
            parsed.scheme()
        )));
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}
