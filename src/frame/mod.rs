//! Plaintext frame: the byte layout that travels inside the ciphertext.
//!
//! A frame is `length (2 bytes, big-endian) ‖ metadata JSON ‖ file bytes`.
//! The 2-byte header stores the byte length of the serialized metadata, so
//! metadata is capped at 65535 bytes; the file portion has no length field
//! and runs to the end of the frame (it may be empty).

use serde::{Deserialize, Serialize};

use crate::error::SealdropError;

/// Size of the big-endian metadata length header.
pub const HEADER_LEN: usize = 2;

/// Largest metadata JSON the 2-byte header can describe.
pub const MAX_METADATA_LEN: usize = u16::MAX as usize;

/// File metadata carried alongside the file bytes inside the frame.
///
/// Serialized as UTF-8 JSON. All three fields are required on parse; unknown
/// fields in incoming JSON are ignored so newer writers can add fields
/// without breaking older readers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// MIME type of the original file, e.g. "text/plain".
    pub content_type: String,
    /// ISO-8601 timestamp string recording when the envelope was sealed.
    pub created_at: String,
    /// Original filename, used to name the recovered file.
    pub filename: String,
}

/// Build a plaintext frame from metadata and file bytes.
///
/// Serializes the metadata to compact JSON and prefixes it with its byte
/// length. Fails with `MetadataTooLarge` when the JSON exceeds 65535 bytes;
/// the overflow is rejected outright, never truncated.
pub fn build_frame(metadata: &Metadata, file: &[u8]) -> Result<Vec<u8>, SealdropError> {
    let metadata_bytes = serde_json::to_vec(metadata)
        .map_err(|e| SealdropError::InvalidEnvelope(format!("metadata serialization: {}", e)))?;

    if metadata_bytes.len() > MAX_METADATA_LEN {
        return Err(SealdropError::MetadataTooLarge(metadata_bytes.len()));
    }

    let mut frame = Vec::with_capacity(HEADER_LEN + metadata_bytes.len() + file.len());
    frame.extend_from_slice(&(metadata_bytes.len() as u16).to_be_bytes());
    frame.extend_from_slice(&metadata_bytes);
    frame.extend_from_slice(file);
    Ok(frame)
}

/// Parse a plaintext frame back into metadata and file bytes.
///
/// Fails with `InvalidEnvelope` when the frame is shorter than its header,
/// shorter than the declared metadata length, or when the metadata bytes are
/// not valid UTF-8 JSON containing all three required fields.
pub fn parse_frame(frame: &[u8]) -> Result<(Metadata, Vec<u8>), SealdropError> {
    if frame.len() < HEADER_LEN {
        return Err(SealdropError::InvalidEnvelope(format!(
            "frame too short: {} bytes, need at least {}",
            frame.len(),
            HEADER_LEN
        )));
    }

    // Safety: unwrap is safe here because the length check above guarantees 2 bytes exist
    let declared = u16::from_be_bytes(frame[..HEADER_LEN].try_into().unwrap()) as usize;

    if frame.len() < HEADER_LEN + declared {
        return Err(SealdropError::InvalidEnvelope(format!(
            "frame declares {} metadata bytes but only {} remain",
            declared,
            frame.len() - HEADER_LEN
        )));
    }

    let metadata: Metadata = serde_json::from_slice(&frame[HEADER_LEN..HEADER_LEN + declared])
        .map_err(|e| SealdropError::InvalidEnvelope(format!("invalid metadata JSON: {}", e)))?;

    let file = frame[HEADER_LEN + declared..].to_vec();
    Ok((metadata, file))
}
