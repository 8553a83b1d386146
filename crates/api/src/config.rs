use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running next to a `swapi.dat`
/// dataset file in the working directory.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8001`).
    pub port: u16,
    /// Path of the SQLite dataset file (default: `swapi.dat`).
    pub database_path: PathBuf,
    /// Upper bound on pooled SQLite connections (default: `5`).
    pub database_max_connections: u32,
    /// Directory served under `/doc` (default: `doc`).
    pub doc_dir: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Create missing dataset tables at startup (default: `true`).
    pub bootstrap_schema: bool,
}

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} must be a valid {expected}, got {value:?}")]
pub struct ConfigError {
    pub key: &'static str,
    pub expected: &'static str,
    pub value: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                  |
    /// |----------------------------|--------------------------|
    /// | `HOST`                     | `0.0.0.0`                |
    /// | `PORT`                     | `8001`                   |
    /// | `DATABASE_PATH`            | `swapi.dat`              |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                      |
    /// | `DOC_DIR`                  | `doc`                    |
    /// | `CORS_ORIGINS`             | `http://localhost:8001`  |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                     |
    /// | `BOOTSTRAP_SCHEMA`         | `true`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let cors_origins = var("CORS_ORIGINS", "http://localhost:8001")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: parse("PORT", var("PORT", "8001"), "u16")?,
            database_path: var("DATABASE_PATH", "swapi.dat").into(),
            database_max_connections: parse(
                "DATABASE_MAX_CONNECTIONS",
                var("DATABASE_MAX_CONNECTIONS", "5"),
                "u32",
            )?,
            doc_dir: var("DOC_DIR", "doc").into(),
            cors_origins,
            request_timeout_secs: parse(
                "REQUEST_TIMEOUT_SECS",
                var("REQUEST_TIMEOUT_SECS", "30"),
                "u64",
            )?,
            bootstrap_schema: parse("BOOTSTRAP_SCHEMA", var("BOOTSTRAP_SCHEMA", "true"), "bool")?,
        })
    }
}

fn parse<T: std::str::FromStr>(
    key: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        key,
        expected,
        value,
    })
}
