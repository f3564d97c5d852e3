//! Shared configuration and error types for Simple Drive.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application-wide error type with HTTP status mapping
//! - Layered configuration (files, then `DRIVE__*` environment variables)

pub mod config;
pub mod error;

pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, S3Settings, ServerConfig, StorageSettings,
};
pub use error::{AppError, AppResult};
