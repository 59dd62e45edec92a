//! Crypto module: passphrase key derivation, AES-256-GCM, and the seal/open
//! orchestration.
//!
//! A seal turns (file bytes, metadata, passphrase) into one opaque envelope;
//! an open reverses it. The derived key never leaves this module and is
//! zeroed on drop. Salt and nonce are generated fresh inside every seal call
//! and are never held as struct state, so no two encryptions can share a
//! (key, nonce) pair.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use hmac::Hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::envelope;
use crate::error::SealdropError;
use crate::frame::{self, Metadata};

/// Salt length in bytes. Sent in the clear; salts only need to be unique
/// enough to defeat precomputation, not secret.
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes (96 bits, the standard GCM nonce size).
pub const NONCE_LEN: usize = 12;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// GCM authentication tag length in bytes, appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// PBKDF2 iteration count. Fixed by the envelope format: both sides must use
/// the same count or the derived keys will not match.
pub const PBKDF2_ROUNDS: u32 = 100_000;

// ── Random source ──────────────────────────────────────────────────────────

/// Source of cryptographically secure random bytes.
///
/// Injected rather than called ambiently so tests can substitute a
/// deterministic source. Implementations must be safe to use from multiple
/// concurrent seal calls.
pub trait RandomSource {
    /// Fill `buf` entirely with random bytes, or fail without touching state.
    fn fill(&self, buf: &mut [u8]) -> Result<(), SealdropError>;
}

/// Production random source backed by the operating system CSPRNG.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), SealdropError> {
        use rand::RngCore;
        rand::rngs::OsRng
            .try_fill_bytes(buf)
            .map_err(|e| SealdropError::RandomSourceFailed(e.to_string()))
    }
}

// ── Key derivation ─────────────────────────────────────────────────────────

/// Derive a 32-byte AES key from a passphrase and salt using
/// PBKDF2-HMAC-SHA-256 with 100 000 iterations.
///
/// Deterministic: the same passphrase and salt always produce the same key.
/// This determinism is what lets the recipient recompute the key from the
/// salt stored in the envelope, so no key material ever crosses the network.
/// The iteration count imposes a deliberate cost on brute-force guessing.
///
/// An empty passphrase is accepted; it derives a valid (if weak) key, and
/// rejecting it is a policy call that belongs to the caller.
pub fn derive_key(
    passphrase: &str,
    salt: &[u8; SALT_LEN],
) -> Result<Zeroizing<[u8; KEY_LEN]>, SealdropError> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(passphrase.as_bytes(), salt, PBKDF2_ROUNDS, key.as_mut())
        .map_err(|e| SealdropError::KeyDerivationFailed(e.to_string()))?;
    Ok(key)
}

// ── AEAD ───────────────────────────────────────────────────────────────────

/// Encrypt a plaintext frame with AES-256-GCM.
///
/// The output is `ciphertext ‖ tag`, always exactly `plaintext + 16` bytes.
/// The tag binds the plaintext to the key and nonce; no associated data is
/// used beyond that implicit binding.
pub fn aead_encrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, SealdropError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| {
            SealdropError::EncryptionFailed("plaintext exceeds the AES-GCM length bound".to_string())
        })
}

/// Decrypt and authenticate an AES-256-GCM ciphertext.
///
/// Verifies the tag before returning anything: on mismatch the call fails
/// atomically with `DecryptionFailed` and no partial plaintext is ever
/// observable. A tag mismatch means a wrong passphrase or an altered
/// envelope; the error does not distinguish the two.
pub fn aead_decrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, SealdropError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| SealdropError::DecryptionFailed)
}

// ── Seal / open ────────────────────────────────────────────────────────────

/// Seal file bytes and metadata into one self-contained envelope.
///
/// Generates a fresh salt and nonce from `random`, derives the key, frames
/// metadata + file, encrypts the frame, and returns
/// `salt ‖ nonce ‖ ciphertext`. Each call is single-shot: either a complete
/// envelope is returned or an error is, never a partial one. Sealing the
/// same inputs twice produces different envelopes because salt and nonce
/// are fresh per call.
pub fn seal_file(
    file: &[u8],
    metadata: &Metadata,
    passphrase: &str,
    random: &dyn RandomSource,
) -> Result<Vec<u8>, SealdropError> {
    let mut salt = [0u8; SALT_LEN];
    random.fill(&mut salt)?;
    let mut nonce = [0u8; NONCE_LEN];
    random.fill(&mut nonce)?;

    let key = derive_key(passphrase, &salt)?;
    let plaintext = frame::build_frame(metadata, file)?;
    let ciphertext = aead_encrypt(&key, &nonce, &plaintext)?;

    Ok(envelope::serialize(&salt, &nonce, &ciphertext))
}

/// Open an envelope back into metadata and file bytes.
///
/// Splits the envelope (failing fast on malformed input, before any key
/// derivation), re-derives the key from the embedded salt, decrypts, and
/// parses the frame. Propagates `DecryptionFailed` on a wrong passphrase or
/// tampered bytes, and `InvalidEnvelope` on structural problems.
pub fn open_envelope(
    envelope_bytes: &[u8],
    passphrase: &str,
) -> Result<(Metadata, Vec<u8>), SealdropError> {
    let (salt, nonce, ciphertext) = envelope::deserialize(envelope_bytes)?;
    let key = derive_key(passphrase, &salt)?;
    let plaintext = aead_decrypt(&key, &nonce, ciphertext)?;
    frame::parse_frame(&plaintext)
}
