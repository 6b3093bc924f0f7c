//! Error types for witsml-log
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using WitsmlError
pub type Result<T> = std::result::Result<T, WitsmlError>;

/// Unified error type for witsml-log operations
#[derive(Debug, Error)]
pub enum WitsmlError {
    // -------------------------------------------------------------------------
    // Query Generation Errors
    // -------------------------------------------------------------------------
    #[error("Index curve not defined")]
    IndexCurveNotDefined,

    #[error("Multiple index curve defined")]
    MultipleIndexCurveDefined,

    #[error("Index curve not exist in table")]
    IndexCurveNotExistInTable,

    #[error("Missing unit from log curve info: expected {expected} units, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    // -------------------------------------------------------------------------
    // Reply Parsing Errors
    // -------------------------------------------------------------------------
    #[error("Reply doesn't contain data or mnemonic list")]
    ReplyMissingDataOrMnemonic,

    #[error("Row {row} has {actual} values, expected {expected} columns")]
    ReplyRowColumnMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Reply doesn't contain a log element")]
    ReplyMissingLog,

    #[error("XML error: {0}")]
    Xml(String),

    // -------------------------------------------------------------------------
    // Table Errors
    // -------------------------------------------------------------------------
    #[error("Row length mismatch: expected {expected} values, got {actual}")]
    RowLength { expected: usize, actual: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Client Errors
    // -------------------------------------------------------------------------
    #[error("Client not connected")]
    ClientNotConnected,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("TLS verification failed: {0}")]
    Tls(String),

    #[error("SOAP fault {code}: {message}")]
    SoapFault { code: String, message: String },

    #[error("Connection probe failed: {0}")]
    ProbeFailed(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
