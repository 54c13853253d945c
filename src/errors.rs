//! Unified application error type.
//! All modules (core, import, export, cli, config) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / decoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file type: {0} (expected .csv or .json; re-export .xlsx sheets as CSV)")]
    InvalidFileType(String),

    // ---------------------------
    // Normalization errors
    // ---------------------------
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    #[error("The roster is empty")]
    EmptyRoster,

    #[error("The roster contains duplicate IDs: {0}")]
    DuplicateRoster(String),

    #[error("Invalid ID value '{value}' in {file}")]
    InvalidId { file: String, value: String },

    #[error("Invalid timestamp value: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
