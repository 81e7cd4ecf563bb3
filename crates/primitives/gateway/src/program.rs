//! Transport encoding of compiled contract programs.
//!
//! The gateway expects the `program` field of a contract definition as
//! `base64(gzip(json(program)))`. Encoding is deterministic: the gzip header is written with a
//! zero modification time, so the same program always yields the same string.

use std::io::{self, Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::bufread::GzDecoder;
use flate2::{Compression, GzBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Failed to serialize program: {0:#}")]
    SerializationFailed(#[source] serde_json::Error),
    #[error("Failed to compress program: {0:#}")]
    CompressionFailed(#[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Program is not valid base64: {0:#}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("Program is not a valid gzip stream: {0:#}")]
    InvalidCompressedStream(#[source] std::io::Error),
    #[error("Decompressed program is not valid json: {0:#}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Decompressed program exceeds maximum size limit of {limit} bytes")]
    SizeLimitExceeded { limit: usize },
}

/// Serializes `program` to json, compresses it with gzip at the default level and encodes the
/// result in standard padded base64.
pub fn encode_program<T>(program: &T) -> Result<String, EncodeError>
where
    T: ?Sized + Serialize,
{
    let json = serde_json::to_vec(program).map_err(EncodeError::SerializationFailed)?;

    let mut encoder = GzBuilder::new().mtime(0).write(Vec::with_capacity(json.len() / 4), Compression::default());
    encoder.write_all(&json).map_err(EncodeError::CompressionFailed)?;
    let compressed = encoder.finish().map_err(EncodeError::CompressionFailed)?;

    let encoded = STANDARD.encode(&compressed);
    tracing::debug!(
        json_len = json.len(),
        compressed_len = compressed.len(),
        encoded_len = encoded.len(),
        "Encoded program"
    );
    Ok(encoded)
}

/// Inverse of [`encode_program`].
pub fn decode_program<T: DeserializeOwned>(encoded: &str) -> Result<T, DecodeError> {
    let compressed = STANDARD.decode(encoded)?;
    let json = inflate(&compressed, None)?;
    serde_json::from_slice(&json).map_err(DecodeError::InvalidJson)
}

/// Same as [`decode_program`], but refuses to inflate more than `max_size` bytes of json.
pub fn decode_program_with_size_limit<T: DeserializeOwned>(encoded: &str, max_size: usize) -> Result<T, DecodeError> {
    let compressed = STANDARD.decode(encoded)?;
    let json = inflate(&compressed, Some(max_size))?;
    serde_json::from_slice(&json).map_err(DecodeError::InvalidJson)
}

/// Inflates a single gzip member. Any input left after the member is an error.
fn inflate(compressed: &[u8], max_size: Option<usize>) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = GzDecoder::new(compressed);
    let mut json = Vec::new();

    match max_size {
        Some(max_size) => {
            (&mut decoder)
                .take(u64::try_from(max_size).unwrap_or(u64::MAX).saturating_add(1))
                .read_to_end(&mut json)
                .map_err(DecodeError::InvalidCompressedStream)?;
            if json.len() > max_size {
                return Err(DecodeError::SizeLimitExceeded { limit: max_size });
            }
        }
        None => {
            decoder.read_to_end(&mut json).map_err(DecodeError::InvalidCompressedStream)?;
        }
    }

    let trailing = decoder.into_inner().len();
    if trailing != 0 {
        tracing::debug!(trailing, "Trailing bytes after gzip stream");
        return Err(DecodeError::InvalidCompressedStream(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{trailing} trailing bytes after gzip stream"),
        )));
    }

    Ok(json)
}
