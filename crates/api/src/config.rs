use std::fmt;
use std::path::PathBuf;

/// Environment value selecting production mode.
pub const MODE_PRODUCTION: &str = "production";

/// Environment value selecting local authoring mode.
pub const MODE_DEVELOPMENT: &str = "development";

/// Where the server is running. Mutations are only served in development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    /// Parse an `APP_ENV` value. `dev`/`local`/`test` are accepted as
    /// development aliases.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            MODE_PRODUCTION | "prod" => Ok(Self::Production),
            MODE_DEVELOPMENT | "dev" | "local" | "test" => Ok(Self::Development),
            other => Err(format!(
                "Invalid APP_ENV '{other}'. Must be one of: {MODE_DEVELOPMENT}, {MODE_PRODUCTION}"
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => MODE_DEVELOPMENT,
            Self::Production => MODE_PRODUCTION,
        }
    }

    pub fn allows_authoring(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local authoring.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Location of the projects document (default: `data/projects.json`).
    pub projects_path: PathBuf,
    /// Runtime mode (default: development).
    pub mode: RuntimeMode,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `127.0.0.1`                |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PROJECTS_PATH`        | `data/projects.json`       |
    /// | `APP_ENV`              | `development`              |
    ///
    /// Panics on invalid values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let projects_path = std::env::var("PROJECTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/projects.json"));

        let mode = std::env::var("APP_ENV")
            .map(|v| RuntimeMode::from_str_value(&v).unwrap_or_else(|e| panic!("{e}")))
            .unwrap_or(RuntimeMode::Development);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            projects_path,
            mode,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_known_values() {
        assert_eq!(RuntimeMode::from_str_value("production").unwrap(), RuntimeMode::Production);
        assert_eq!(RuntimeMode::from_str_value(" PROD ").unwrap(), RuntimeMode::Production);
        assert_eq!(RuntimeMode::from_str_value("development").unwrap(), RuntimeMode::Development);
        assert_eq!(RuntimeMode::from_str_value("local").unwrap(), RuntimeMode::Development);
    }

    #[test]
    fn mode_rejects_unknown_values() {
        let err = RuntimeMode::from_str_value("staging").unwrap_err();
        assert!(err.contains("staging"));
    }

    #[test]
    fn only_development_allows_authoring() {
        assert!(RuntimeMode::Development.allows_authoring());
        assert!(!RuntimeMode::Production.allows_authoring());
    }

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test", "http://b.test"]
        );
    }
}
