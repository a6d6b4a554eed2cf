/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Per-message send timeout on dashboard WebSocket connections
    /// (default: `10`). The original system had no transport timeouts;
    /// this is a deliberate addition.
    pub ws_send_timeout_secs: u64,
    /// Idle receive timeout on the hardware ingest channel (default:
    /// `300`). Also an addition over the original system.
    pub ingest_idle_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `8000`                  |
    /// | `CORS_ORIGINS`             | `http://localhost:4200` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `WS_SEND_TIMEOUT_SECS`     | `10`                    |
    /// | `INGEST_IDLE_TIMEOUT_SECS` | `300`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:4200".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = env_u64("REQUEST_TIMEOUT_SECS", 30);
        let ws_send_timeout_secs = env_u64("WS_SEND_TIMEOUT_SECS", 10);
        let ingest_idle_timeout_secs = env_u64("INGEST_IDLE_TIMEOUT_SECS", 300);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            ws_send_timeout_secs,
            ingest_idle_timeout_secs,
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("{name} must be a valid u64"))
}
