use std::path::PathBuf;

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
    /// Public base URL encoded into menu QR codes (default: `http://localhost:8000`).
    pub base_url: String,
    /// Root directory for uploaded and generated files, served at `/uploads`.
    pub upload_dir: PathBuf,
    /// Directory of static assets (CSS, JS), served at `/static`.
    pub static_dir: PathBuf,
    /// Maximum request body size in bytes, which bounds upload size.
    pub max_file_size: usize,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                     |
    /// | `PORT`                 | `8000`                                        |
    /// | `BASE_URL`             | `http://localhost:8000`                       |
    /// | `UPLOAD_DIR`           | `uploads`                                     |
    /// | `STATIC_DIR`           | `static`                                      |
    /// | `MAX_FILE_SIZE`        | `52428800` (50 MiB)                           |
    /// | `CORS_ORIGINS`         | `http://localhost:8000,http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let base_url = std::env::var("BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into())
            .trim_end_matches('/')
            .to_string();

        let upload_dir = PathBuf::from(
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()),
        );

        let static_dir = PathBuf::from(
            std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()),
        );

        let max_file_size: usize = std::env::var("MAX_FILE_SIZE")
            .unwrap_or_else(|_| "52428800".into())
            .parse()
            .expect("MAX_FILE_SIZE must be a valid usize");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:8000,http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            base_url,
            upload_dir,
            static_dir,
            max_file_size,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Split a comma-separated origin list, trimming whitespace and dropping empties.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
