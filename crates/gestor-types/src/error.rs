//! Error types for gestor-os

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Client not found: {0}")]
    ClientNotFound(u64),

    #[error("Service order not found: {0}")]
    OrderNotFound(u64),

    #[error("Stock item not found: {0}")]
    StockItemNotFound(u64),

    #[error("Unknown item category: {0}")]
    InvalidCategory(String),

    #[error("Invalid item spec: {0}")]
    InvalidItemSpec(String),

    #[error("Dimension must be positive: {0}")]
    InvalidDimension(f64),

    #[error("Failed to parse date/time: {0}")]
    DateParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
