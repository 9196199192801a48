/*
 * Responsibility
 * - 環境変数の読み込み (PORT, APP_ENV, 入力サイズ上限, CORS 許可)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // Bounds on inspection input
    pub request_body_limit_bytes: usize,
    pub request_timeout_seconds: u64,
    pub max_header_entries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            request_body_limit_bytes: 64 * 1024,
            request_timeout_seconds: 10,
            max_header_entries: 64,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key -> value source (env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port: u16 = parse_or(&lookup, "PORT", defaults.addr.port())?;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let request_body_limit_bytes = parse_or(
            &lookup,
            "REQUEST_BODY_LIMIT_BYTES",
            defaults.request_body_limit_bytes,
        )?;
        let request_timeout_seconds = parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECONDS",
            defaults.request_timeout_seconds,
        )?;
        let max_header_entries =
            parse_or(&lookup, "MAX_HEADER_ENTRIES", defaults.max_header_entries)?;

        if request_body_limit_bytes == 0 {
            return Err(ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"));
        }
        if request_timeout_seconds == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
        }

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            request_body_limit_bytes,
            request_timeout_seconds,
            max_header_entries,
        })
    }
}

// Missing -> default, present but unparseable -> Invalid.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
