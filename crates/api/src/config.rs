use std::str::FromStr;

/// Which [`agronet_db::SiteStore`] implementation the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Fixture data held in process; nothing is persisted.
    Memory,
    /// Postgres via `DATABASE_URL`.
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(format!("unknown storage backend '{other}' (expected memory or postgres)")),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected pretty or json)")),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Required when `backend` is [`StorageBackend::Postgres`].
    pub database_url: Option<String>,
    /// Serve fixture data instead of an empty list when a read query fails.
    pub fallback_on_read_error: bool,
    /// Insert the fixture data set at startup (Postgres only).
    pub seed_fixtures: bool,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `HOST`                   | `0.0.0.0`               |
    /// | `PORT`                   | `3000`                  |
    /// | `CORS_ORIGINS`           | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                    |
    /// | `LOG_FORMAT`             | `pretty`                |
    /// | `STORAGE_BACKEND`        | `postgres`              |
    /// | `DATABASE_URL`           | unset                   |
    /// | `FALLBACK_ON_READ_ERROR` | `true`                  |
    /// | `SEED_FIXTURES`          | `false`                 |
    ///
    /// Panics on malformed values; misconfiguration should stop the process
    /// before it binds.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5173"));

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let log_format: LogFormat = env_or("LOG_FORMAT", "pretty")
            .parse()
            .unwrap_or_else(|e| panic!("LOG_FORMAT: {e}"));

        let backend: StorageBackend = env_or("STORAGE_BACKEND", "postgres")
            .parse()
            .unwrap_or_else(|e| panic!("STORAGE_BACKEND: {e}"));

        let storage = StorageConfig {
            backend,
            database_url: std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),
            fallback_on_read_error: parse_flag("FALLBACK_ON_READ_ERROR", &env_or("FALLBACK_ON_READ_ERROR", "true")),
            seed_fixtures: parse_flag("SEED_FIXTURES", &env_or("SEED_FIXTURES", "false")),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_format,
            storage,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(key: &str, raw: &str) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => panic!("{key} must be a boolean (got '{other}')"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_backend_parses_case_insensitively() {
        assert_eq!("Memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert_eq!("postgresql".parse::<StorageBackend>(), Ok(StorageBackend::Postgres));
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn log_format_parses() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    }

    #[test]
    fn origins_split_and_trimmed() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("X", "YES"));
        assert!(!parse_flag("X", "0"));
    }

    #[test]
    #[should_panic(expected = "X must be a boolean")]
    fn flag_rejects_garbage() {
        parse_flag("X", "maybe");
    }
}
