//! Error types for the library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in commands and main.rs.

use crate::stats::schema::Identifier;
use thiserror::Error;

/// Errors that can occur while encoding or decoding the embedded payload
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to compress payload: {0}")]
    Compress(#[source] std::io::Error),

    #[error("Invalid byte value {token:?} at position {position}")]
    InvalidByte { position: usize, token: String },

    #[error("Failed to inflate payload: {0}")]
    Inflate(#[source] std::io::Error),

    #[error("{0} unexpected bytes after the end of the payload stream")]
    TrailingBytes(usize),

    #[error("Inflated payload is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
}

/// Errors that can occur while reading and normalizing build stats
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Failed to read stats file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stats JSON does not match the expected shape: {0}")]
    InvalidFormat(#[from] serde_json::Error),
}

/// Referential-integrity faults found while attributing module sizes
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Asset {asset} references chunk {chunk} which is not in the stats")]
    MissingChunk { asset: String, chunk: Identifier },

    #[error("Chunk {chunk} references module {module} which is not in the module index")]
    MissingModule { chunk: Identifier, module: String },
}

/// Errors that can occur while loading an encoded payload for viewing
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to decode payload: {0}")]
    Decode(#[from] CodecError),

    #[error("Failed to aggregate sizes: {0}")]
    Aggregate(#[from] AggregateError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("No embedded payload found in report")]
    MissingPayload,
}

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
