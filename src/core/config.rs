use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub attachments: AttachmentConfig,
    pub transcript: TranscriptConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// `Strict-Transport-Security` max-age; 0 disables the header
    pub hsts_max_age_secs: u64,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Local attachment storage
#[derive(Debug, Clone)]
pub struct AttachmentConfig {
    /// Directory holding one file per attachment, named after the attachment id
    pub dir: PathBuf,
    /// Size of each chunk read from disk while streaming a file
    pub chunk_size: usize,
}

/// Output format used when rendering `/logs/{thread_id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    Text,
    Html,
}

#[derive(Debug, Clone)]
pub struct TranscriptConfig {
    pub format: TranscriptFormat,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub enabled: bool,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            attachments: AttachmentConfig::from_env()?,
            transcript: TranscriptConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 8890;
    const DEFAULT_HSTS_MAX_AGE_SECS: u64 = 15_552_000; // 180 days

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let hsts_max_age_secs = env::var("HSTS_MAX_AGE_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_HSTS_MAX_AGE_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "HSTS_MAX_AGE_SECS must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            hsts_max_age_secs,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl AttachmentConfig {
    const DEFAULT_DIR: &'static str = "./attachments";
    const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64KB

    pub fn from_env() -> Result<Self, String> {
        let dir = env::var("ATTACHMENT_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DIR.to_string());

        let chunk_size = env::var("ATTACHMENT_CHUNK_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_CHUNK_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "ATTACHMENT_CHUNK_SIZE must be a valid number".to_string())?;

        if chunk_size == 0 {
            return Err("ATTACHMENT_CHUNK_SIZE must be greater than zero".to_string());
        }

        Ok(Self {
            dir: PathBuf::from(dir),
            chunk_size,
        })
    }
}

impl TranscriptFormat {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            other => Err(format!(
                "TRANSCRIPT_FORMAT must be 'text' or 'html', got '{}'",
                other
            )),
        }
    }
}

impl TranscriptConfig {
    pub fn from_env() -> Result<Self, String> {
        let format = match env::var("TRANSCRIPT_FORMAT") {
            Ok(value) => TranscriptFormat::parse(&value)?,
            Err(_) => TranscriptFormat::Text,
        };

        Ok(Self { format })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let enabled = env::var("SWAGGER_ENABLED")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Modmail Gateway API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Read-only ticket API for the modmail gateway".to_string());

        Ok(Self {
            enabled,
            title,
            version,
            description,
        })
    }
}
