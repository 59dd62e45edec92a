//! Envelope codec: the on-wire layout handed to (and received from) storage.
//!
//! An envelope is `salt (16 bytes) ‖ nonce (12 bytes) ‖ AES-GCM ciphertext`.
//! Salt and nonce lengths are protocol constants, so no length prefixes are
//! needed; the ciphertext runs to the end and carries the 16-byte GCM tag.
//! The first 16 and next 12 bytes are never interpreted as anything but
//! salt and nonce.

use crate::crypto::{NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::error::SealdropError;

/// Fixed prefix length: salt + nonce. Every valid envelope is at least this long.
pub const ENVELOPE_MIN_LEN: usize = SALT_LEN + NONCE_LEN;

/// Concatenate salt, nonce and ciphertext into one opaque byte sequence.
pub fn serialize(salt: &[u8; SALT_LEN], nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Vec<u8> {
    let mut envelope = Vec::with_capacity(ENVELOPE_MIN_LEN + ciphertext.len());
    envelope.extend_from_slice(salt);
    envelope.extend_from_slice(nonce);
    envelope.extend_from_slice(ciphertext);
    envelope
}

/// Split an envelope back into salt, nonce and ciphertext.
///
/// Fails with `InvalidEnvelope` when the input is shorter than the 28-byte
/// fixed prefix, or when the remaining ciphertext is shorter than the GCM
/// tag. AES-GCM permits a zero-length plaintext, but its output always
/// carries the 16-byte tag; anything shorter cannot have been produced by
/// a seal.
pub fn deserialize(
    bytes: &[u8],
) -> Result<([u8; SALT_LEN], [u8; NONCE_LEN], &[u8]), SealdropError> {
    if bytes.len() < ENVELOPE_MIN_LEN {
        return Err(SealdropError::InvalidEnvelope(format!(
            "envelope too short: {} bytes, need at least {}",
            bytes.len(),
            ENVELOPE_MIN_LEN
        )));
    }

    // Safety: unwraps are safe here because the length check above guarantees the bytes exist
    let salt: [u8; SALT_LEN] = bytes[..SALT_LEN].try_into().unwrap();
    let nonce: [u8; NONCE_LEN] = bytes[SALT_LEN..ENVELOPE_MIN_LEN].try_into().unwrap();
    let ciphertext = &bytes[ENVELOPE_MIN_LEN..];

    if ciphertext.len() < TAG_LEN {
        return Err(SealdropError::InvalidEnvelope(format!(
            "ciphertext too short: {} bytes, need at least the {}-byte tag",
            ciphertext.len(),
            TAG_LEN
        )));
    }

    Ok((salt, nonce, ciphertext))
}
