use std::time::Duration;

/// Default timeout for chart generation requests (30 seconds).
const DEFAULT_CHART_TIMEOUT_SECS: u64 = 30;

/// Default timeout for the liveness probe (5 seconds).
const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 5;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub base_url: String,
    pub chart_timeout: Duration,
    pub status_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `CHART_SERVICE_URL` (required) — base URL of the remote chart service
    /// - `CHART_TIMEOUT_SECS` (optional, default 30) — max seconds per chart request
    /// - `STATUS_TIMEOUT_SECS` (optional, default 5) — max seconds per status probe
    pub fn from_env() -> Result<Self, String> {
        let base_url = std::env::var("CHART_SERVICE_URL")
            .map_err(|_| "CHART_SERVICE_URL environment variable is not set".to_string())?;
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err("CHART_SERVICE_URL must not be empty".to_string());
        }

        let chart_timeout_secs = match std::env::var("CHART_TIMEOUT_SECS") {
            Ok(val) => val
                .parse::<u64>()
                .map_err(|_| "CHART_TIMEOUT_SECS must be a positive integer".to_string())?,
            Err(_) => DEFAULT_CHART_TIMEOUT_SECS,
        };

        let status_timeout_secs = match std::env::var("STATUS_TIMEOUT_SECS") {
            Ok(val) => val
                .parse::<u64>()
                .map_err(|_| "STATUS_TIMEOUT_SECS must be a positive integer".to_string())?,
            Err(_) => DEFAULT_STATUS_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            chart_timeout: Duration::from_secs(chart_timeout_secs),
            status_timeout: Duration::from_secs(status_timeout_secs),
        })
    }
}
