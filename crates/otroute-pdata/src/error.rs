use thiserror::Error;

/// Errors produced while decoding telemetry data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdataError {
    /// A trace or span id was not valid hex.
    #[error("id is not valid hex: {0}")]
    InvalidIdHex(String),

    /// A trace or span id decoded to the wrong number of bytes.
    #[error("id has {actual} bytes, expected {expected}")]
    InvalidIdLength { expected: usize, actual: usize },

    /// A forest could not be read from or written to JSON.
    #[error("forest json: {0}")]
    Json(String),
}

/// Convenience alias for pdata results.
pub type PdataResult<T> = Result<T, PdataError>;
