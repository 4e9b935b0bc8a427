use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub translation: TranslationConfig,
    pub uploads: UploadConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    /// How long a connection waits for another writer's lock
    pub busy_timeout_secs: u64,
}

/// Chat-completion backend used for comment translation
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    pub api_key: String,
    /// Base URL without the `/chat/completions` suffix
    pub base_url: String,
    pub model: String,
    /// Upper bound for one upstream call
    pub request_timeout: Duration,
}

/// Local directory for comment images and the URL prefix it is served under
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub url_prefix: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// `.env` is loaded by the binary before logging starts, not here.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            translation: TranslationConfig::from_env()?,
            uploads: UploadConfig::from_env(),
            swagger: SwaggerConfig::from_env(),
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_URL: &'static str = "sqlite://data/forum.db";
    const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes
    const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string());

        Ok(Self {
            url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_or("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_or("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_or("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
            busy_timeout_secs: parse_or("DB_BUSY_TIMEOUT_SECS", Self::DEFAULT_BUSY_TIMEOUT_SECS)?,
        })
    }
}

impl TranslationConfig {
    const DEFAULT_BASE_URL: &'static str = "https://api.deepseek.com";
    const DEFAULT_MODEL: &'static str = "deepseek-chat";
    const DEFAULT_TIMEOUT_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("DEEPSEEK_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "DEEPSEEK_API_KEY environment variable is required".to_string())?;

        let base_url =
            env::var("DEEPSEEK_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        let model =
            env::var("TRANSLATION_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string());
        let timeout_secs: u64 = parse_or("TRANSLATION_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            api_key,
            base_url,
            model,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl UploadConfig {
    pub fn from_env() -> Self {
        let dir = env::var("UPLOADS_PATH").unwrap_or_else(|_| "static/uploads".to_string());
        let url_prefix =
            env::var("UPLOADS_URL_PREFIX").unwrap_or_else(|_| "/static/uploads".to_string());

        Self {
            dir: PathBuf::from(dir),
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        Self {
            title: env::var("SWAGGER_TITLE").unwrap_or_else(|_| "PKO Forum API".to_string()),
            version: env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            description: env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
                "Multilingual forum with background comment translation".to_string()
            }),
        }
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr + ToString,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", key))
}
