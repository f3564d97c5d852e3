//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// API authentication configuration.
    pub auth: AuthConfig,
    /// Database configuration (metadata store and database backend).
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Blob storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body in bytes (base64 payloads included).
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    64 * 1024 * 1024
}

/// API authentication configuration.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Static bearer token every `/v1` request must present.
    pub bearer_token: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("bearer_token", &"<redacted>")
            .finish()
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://metadata.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Blob storage configuration.
///
/// `backend` selects one of `local`, `database` or `s3`; only the settings
/// for the selected backend are used.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Backend selector.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Root directory for the local backend.
    #[serde(default = "default_local_path")]
    pub local_path: String,
    /// Settings for the S3-compatible backend.
    #[serde(default)]
    pub s3: S3Settings,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            local_path: default_local_path(),
            s3: S3Settings::default(),
        }
    }
}

fn default_backend() -> String {
    "local".to_string()
}

fn default_local_path() -> String {
    "./storage_data".to_string()
}

/// S3-compatible endpoint settings.
#[derive(Clone, Deserialize)]
pub struct S3Settings {
    /// Endpoint base URL, e.g. `http://localhost:9000`.
    #[serde(default = "default_s3_endpoint")]
    pub endpoint: String,
    /// Access key ID.
    #[serde(default = "default_s3_credential")]
    pub access_key: String,
    /// Secret access key.
    #[serde(default = "default_s3_credential")]
    pub secret_key: String,
    /// Bucket name.
    #[serde(default = "default_s3_bucket")]
    pub bucket: String,
    /// Signing region.
    #[serde(default = "default_s3_region")]
    pub region: String,
}

impl Default for S3Settings {
    fn default() -> Self {
        Self {
            endpoint: default_s3_endpoint(),
            access_key: default_s3_credential(),
            secret_key: default_s3_credential(),
            bucket: default_s3_bucket(),
            region: default_s3_region(),
        }
    }
}

impl std::fmt::Debug for S3Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Settings")
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .finish()
    }
}

fn default_s3_endpoint() -> String {
    "http://localhost:9000".to_string()
}

fn default_s3_credential() -> String {
    "minioadmin".to_string()
}

fn default_s3_bucket() -> String {
    "simple-drive".to_string()
}

fn default_s3_region() -> String {
    "us-east-1".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DRIVE").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Checks settings that deserialization alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if the bearer token is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.auth.bearer_token.trim().is_empty() {
            return Err(AppError::Configuration(
                "auth.bearer_token is required".to_string(),
            ));
        }
        Ok(())
    }
}
