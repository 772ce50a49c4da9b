use pantry_gemini::api::DEFAULT_API_BASE;

/// Server configuration loaded from environment variables.
///
/// Everything except the Gemini API key has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`). Also the only bound
    /// on the upstream model call.
    pub request_timeout_secs: u64,
    /// SQLite database URL (default: `sqlite://grocery.db?mode=rwc`).
    pub database_url: String,
    /// Gemini API settings.
    pub gemini: GeminiConfig,
}

/// Credentials and endpoint for the extraction model.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_base: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                      |
    /// |------------------------|----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                    |
    /// | `PORT`                 | `3000`                                       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                      |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                                         |
    /// | `DATABASE_URL`         | `sqlite://grocery.db?mode=rwc`               |
    /// | `GEMINI_API_KEY`       | required                                     |
    /// | `GEMINI_API_BASE`      | `https://generativelanguage.googleapis.com`  |
    ///
    /// Panics on a missing API key or an unparsable number; the process
    /// must not start misconfigured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &lookup("CORS_ORIGINS").unwrap_or_else(|| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://grocery.db?mode=rwc".into());

        let gemini = GeminiConfig::from_lookup(lookup);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            gemini,
        }
    }
}

impl GeminiConfig {
    /// Read `GEMINI_API_KEY` (required) and `GEMINI_API_BASE` through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .expect("GEMINI_API_KEY is not set in environment variables");

        let api_base = lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into());

        Self { api_key, api_base }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
