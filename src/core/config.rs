use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub queue: QueueConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_size: usize,
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

/// MinIO/S3 storage configuration for report images
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// MinIO/S3 endpoint URL
    pub endpoint: String,
    /// Public base URL used when constructing image URLs for consumers
    /// (defaults to the endpoint)
    pub public_endpoint: String,
    /// Access key for authentication
    pub access_key: String,
    /// Secret key for authentication
    pub secret_key: String,
    /// Bucket name for storing report images
    pub bucket: String,
    /// AWS region (for S3 compatibility)
    pub region: String,
}

/// Redis queue configuration for the analysis worker hand-off
#[derive(Debug, Clone)]
pub struct QueueConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    /// Name of the list the analysis worker consumes from
    pub queue_name: String,
    /// Startup connection retry attempts before giving up
    pub connect_max_attempts: u32,
    /// Base delay between startup connection attempts, in seconds
    pub connect_retry_delay_secs: u64,
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
            storage: StorageConfig::from_env()?,
            queue: QueueConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_size = env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_UPLOAD_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_UPLOAD_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_upload_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Conservative pool defaults for a small single-endpoint service
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

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let endpoint =
            env::var("MINIO_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".to_string());

        // Public endpoint defaults to the main endpoint if not specified
        let public_endpoint =
            env::var("MINIO_PUBLIC_ENDPOINT").unwrap_or_else(|_| endpoint.clone());

        let access_key =
            env::var("MINIO_ACCESS_KEY").map_err(|_| "MINIO_ACCESS_KEY must be set".to_string())?;

        let secret_key =
            env::var("MINIO_SECRET_KEY").map_err(|_| "MINIO_SECRET_KEY must be set".to_string())?;

        let bucket = env::var("MINIO_BUCKET").unwrap_or_else(|_| "hazard-reports".to_string());

        let region = env::var("MINIO_REGION").unwrap_or_else(|_| "us-east-1".to_string());

        Ok(Self {
            endpoint,
            public_endpoint,
            access_key,
            secret_key,
            bucket,
            region,
        })
    }
}

impl QueueConfig {
    const DEFAULT_CONNECT_MAX_ATTEMPTS: u32 = 5;
    const DEFAULT_CONNECT_RETRY_DELAY_SECS: u64 = 2;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("QUEUE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("QUEUE_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse::<u16>()
            .map_err(|_| "QUEUE_PORT must be a valid number".to_string())?;

        let password = env::var("QUEUE_PASSWORD").ok().filter(|s| !s.is_empty());

        let queue_name = env::var("QUEUE_NAME").unwrap_or_else(|_| "report_analysis".to_string());

        let connect_max_attempts = env::var("QUEUE_CONNECT_MAX_ATTEMPTS")
            .unwrap_or_else(|_| Self::DEFAULT_CONNECT_MAX_ATTEMPTS.to_string())
            .parse::<u32>()
            .map_err(|_| "QUEUE_CONNECT_MAX_ATTEMPTS must be a valid number".to_string())?;

        let connect_retry_delay_secs = env::var("QUEUE_CONNECT_RETRY_DELAY_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_CONNECT_RETRY_DELAY_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "QUEUE_CONNECT_RETRY_DELAY_SECS must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            password,
            queue_name,
            connect_max_attempts,
            connect_retry_delay_secs,
        })
    }

    /// Build the redis connection URL from host/port/credentials
    pub fn url(&self) -> String {
        match &self.password {
            Some(password) => format!("redis://:{}@{}:{}", password, self.host, self.port),
            None => format!("redis://{}:{}", self.host, self.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_url_without_password() {
        let config = QueueConfig {
            host: "queue.internal".to_string(),
            port: 6379,
            password: None,
            queue_name: "report_analysis".to_string(),
            connect_max_attempts: 5,
            connect_retry_delay_secs: 2,
        };
        assert_eq!(config.url(), "redis://queue.internal:6379");
    }

    #[test]
    fn test_queue_url_with_password() {
        let config = QueueConfig {
            host: "queue.internal".to_string(),
            port: 6380,
            password: Some("s3cret".to_string()),
            queue_name: "report_analysis".to_string(),
            connect_max_attempts: 5,
            connect_retry_delay_secs: 2,
        };
        assert_eq!(config.url(), "redis://:s3cret@queue.internal:6380");
    }
}
