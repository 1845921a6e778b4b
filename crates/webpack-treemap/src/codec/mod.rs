//! Compact string encoding for the embedded payload.
//!
//! Format: JSON, raw-deflated (no zlib header or trailer), written out as
//! comma-separated decimal byte values. The result contains only digits and
//! commas, so it can sit inside a single-quoted script literal unescaped.
//!
//! Example: `encode(&json!({}))` produces a string such as `"171,174,5,0"`.

use crate::utils::error::CodecError;
use flate2::bufread::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Encode a value into the compact payload string
///
/// **Public** - used at report time
///
/// # Errors
/// * `CodecError::Serialize` - value cannot be represented as JSON
/// * `CodecError::Compress` - deflate stream failed
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    let json = serde_json::to_vec(value).map_err(CodecError::Serialize)?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json).map_err(CodecError::Compress)?;
    let compressed = encoder.finish().map_err(CodecError::Compress)?;

    info!(
        "Encoded payload: {} JSON bytes -> {} deflated bytes ({:.1}%)",
        json.len(),
        compressed.len(),
        compressed.len() as f64 * 100.0 / json.len().max(1) as f64
    );

    let encoded = compressed
        .iter()
        .map(|byte| byte.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok(encoded)
}

/// Decode a compact payload string into `T`
///
/// **Public** - used at view time; any failure is fatal for the session
///
/// # Errors
/// * `CodecError::InvalidByte` - a token is not a decimal value in 0..=255
/// * `CodecError::Inflate` - the bytes are not a raw deflate stream
/// * `CodecError::TrailingBytes` - bytes remain after the final deflate block
/// * `CodecError::Json` - the inflated text is not JSON of type `T`
pub fn decode<T: DeserializeOwned>(encoded: &str) -> Result<T, CodecError> {
    let bytes = parse_bytes(encoded)?;

    let mut json = Vec::new();
    let mut decoder = DeflateDecoder::new(bytes.as_slice());
    decoder
        .read_to_end(&mut json)
        .map_err(CodecError::Inflate)?;

    let remainder = decoder.into_inner().len();
    if remainder > 0 {
        return Err(CodecError::TrailingBytes(remainder));
    }

    debug!(
        "Decoded payload: {} deflated bytes -> {} JSON bytes",
        bytes.len(),
        json.len()
    );

    serde_json::from_slice(&json).map_err(CodecError::Json)
}

/// Decode a compact payload string into an untyped JSON value
pub fn decode_value(encoded: &str) -> Result<serde_json::Value, CodecError> {
    decode(encoded)
}

fn parse_bytes(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    encoded
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            token
                .trim()
                .parse::<u8>()
                .map_err(|_| CodecError::InvalidByte {
                    position,
                    token: token.to_string(),
                })
        })
        .collect()
}
