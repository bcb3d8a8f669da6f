//! Configuration module
//!
//! Environment-based configuration with `.env` support. Defaults are chosen
//! for local development against a Postgres instance and a MinIO container;
//! production deployments must set explicit values (`validate` enforces the
//! few hard requirements).

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 32;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub max_upload_size_bytes: usize,
    pub storage: StorageConfig,
}

/// Object-store connection settings (MinIO or any S3-compatible backend).
#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// Host and port of the S3-compatible endpoint, e.g. `localhost:9000`.
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub use_ssl: bool,
    pub buckets: BucketConfig,
}

impl StorageConfig {
    /// Full endpoint URL; scheme follows the TLS flag.
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{}://{}", scheme, self.endpoint)
    }
}

/// Bucket names per media kind. Only audio and image uploads have a
/// destination; there is deliberately no video bucket.
#[derive(Clone, Debug)]
pub struct BucketConfig {
    pub audio: String,
    pub image: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB);

        let storage = StorageConfig {
            endpoint: env::var("S3_ENDPOINT").unwrap_or_else(|_| "localhost:9000".to_string()),
            access_key: env::var("S3_ACCESS_KEY")
                .map_err(|_| anyhow::anyhow!("S3_ACCESS_KEY must be set"))?,
            secret_key: env::var("S3_SECRET_KEY")
                .map_err(|_| anyhow::anyhow!("S3_SECRET_KEY must be set"))?,
            region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            use_ssl: env::var("S3_USE_SSL")
                .unwrap_or_else(|_| "false".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(false),
            buckets: BucketConfig {
                audio: env::var("AUDIO_BUCKET").unwrap_or_else(|_| "audio-bucket".to_string()),
                image: env::var("IMAGE_BUCKET").unwrap_or_else(|_| "image-bucket".to_string()),
            },
        };

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DB_MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_DB_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_DB_TIMEOUT_SECS),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            storage,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.database_url.starts_with("postgresql://")
            && !self.database_url.starts_with("postgres://")
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.storage.endpoint.trim().is_empty() {
            return Err(anyhow::anyhow!("S3_ENDPOINT must not be empty"));
        }

        if self.storage.buckets.audio.trim().is_empty()
            || self.storage.buckets.image.trim().is_empty()
        {
            return Err(anyhow::anyhow!(
                "AUDIO_BUCKET and IMAGE_BUCKET must not be empty"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_port: 8080,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            database_url: "postgresql://localhost/melodia".to_string(),
            db_max_connections: 10,
            db_timeout_seconds: 30,
            max_upload_size_bytes: 32 * 1024 * 1024,
            storage: StorageConfig {
                endpoint: "localhost:9000".to_string(),
                access_key: "minioadmin".to_string(),
                secret_key: "minioadmin".to_string(),
                region: "us-east-1".to_string(),
                use_ssl: false,
                buckets: BucketConfig {
                    audio: "audio-bucket".to_string(),
                    image: "image-bucket".to_string(),
                },
            },
        }
    }

    #[test]
    fn validate_accepts_development_defaults() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_postgres_url() {
        let mut config = test_config();
        config.database_url = "mysql://localhost/melodia".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_bucket() {
        let mut config = test_config();
        config.storage.buckets.audio = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_url_follows_tls_flag() {
        let mut config = test_config();
        assert_eq!(config.storage.endpoint_url(), "http://localhost:9000");
        config.storage.use_ssl = true;
        assert_eq!(config.storage.endpoint_url(), "https://localhost:9000");
    }
}
