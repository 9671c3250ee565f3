use crate::auth::jwt::JwtConfig;

/// Read an env var with a fallback and parse it.
///
/// # Panics
///
/// Panics when the value does not parse. A misconfigured server must not
/// come up.
fn parse_env<T: std::str::FromStr>(key: &str, default: &str) -> T {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("{key} is not a valid value for its type"))
}

/// Top-level server configuration.
///
/// Every knob reads from the environment with a local-development default;
/// production overrides what it needs.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT signing secret and token lifetime.
    pub jwt: JwtConfig,
    /// Scoring engine schedule and retry policy.
    pub scoring: ScoringConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: parse_env("HOST", "0.0.0.0"),
            port: parse_env("PORT", "3000"),
            cors_origins,
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", "30"),
            jwt: JwtConfig::from_env(),
            scoring: ScoringConfig::from_env(),
        }
    }
}

/// Scoring engine configuration.
///
/// The engine applies AI analysis results to submitted assessments from a
/// durable database queue; these knobs control its schedule and retry
/// behavior.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Seconds between assessment submission and the job becoming due
    /// (default: `5`).
    pub delay_secs: f64,
    /// Seconds between engine polls for due jobs (default: `1`).
    pub poll_interval_secs: u64,
    /// Seconds a claimed job stays invisible to other claimers
    /// (default: `30`).
    pub visibility_timeout_secs: f64,
    /// Attempts before a failing job is retired (default: `5`).
    pub max_attempts: i32,
    /// Base backoff in seconds between retries; grows linearly with the
    /// attempt count (default: `5`).
    pub retry_backoff_secs: f64,
}

impl ScoringConfig {
    /// Load scoring configuration from environment variables with defaults.
    ///
    /// | Env Var                           | Default |
    /// |-----------------------------------|---------|
    /// | `SCORING_DELAY_SECS`              | `5`     |
    /// | `SCORING_POLL_INTERVAL_SECS`      | `1`     |
    /// | `SCORING_VISIBILITY_TIMEOUT_SECS` | `30`    |
    /// | `SCORING_MAX_ATTEMPTS`            | `5`     |
    /// | `SCORING_RETRY_BACKOFF_SECS`      | `5`     |
    pub fn from_env() -> Self {
        Self {
            delay_secs: parse_env("SCORING_DELAY_SECS", "5"),
            poll_interval_secs: parse_env("SCORING_POLL_INTERVAL_SECS", "1"),
            visibility_timeout_secs: parse_env("SCORING_VISIBILITY_TIMEOUT_SECS", "30"),
            max_attempts: parse_env("SCORING_MAX_ATTEMPTS", "5"),
            retry_backoff_secs: parse_env("SCORING_RETRY_BACKOFF_SECS", "5"),
        }
    }
}
