use thiserror::Error;

/// Error taxonomy of the envelope protocol.
///
/// Every failure mode is a distinct variant so callers can choose the right
/// user-facing message. `DecryptionFailed` deliberately does not say whether
/// the passphrase was wrong or the ciphertext was altered: an AEAD tag
/// mismatch carries no information about which one happened, and a more
/// specific error would hand that information to an attacker probing
/// stored envelopes.
#[derive(Error, Debug)]
pub enum SealdropError {
    /// Envelope or frame bytes do not conform to the wire format: too short,
    /// ciphertext smaller than the GCM tag, declared metadata length past the
    /// end of the frame, or metadata that is not valid UTF-8 JSON with the
    /// three required fields. Never retried.
    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(String),

    /// AEAD tag verification failed: wrong passphrase or corrupted data.
    #[error("Invalid passphrase or corrupted data")]
    DecryptionFailed,

    /// Metadata JSON does not fit the 2-byte frame header at seal time.
    #[error("Metadata record too large: {0} bytes (limit 65535)")]
    MetadataTooLarge(usize),

    /// The key derivation primitive rejected its inputs. Fatal for the call.
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    /// The injected random source could not fill the salt or nonce buffer.
    /// No envelope is produced.
    #[error("Secure random source failed: {0}")]
    RandomSourceFailed(String),

    /// The AEAD primitive rejected the plaintext at seal time.
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),
}
