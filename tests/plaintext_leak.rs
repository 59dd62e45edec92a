/// Plaintext leak detection tests.
///
/// Verify that a sealed envelope never contains the file bytes, the recorded
/// filename, or the passphrase in any readable form — neither as raw bytes
/// nor as a UTF-8 substring.
///
/// These tests guard against regression where a refactor accidentally places
/// frame content outside the encrypted region of the envelope.

use sealdrop::crypto::{seal_file, OsRandom};
use sealdrop::frame::Metadata;

/// Scan `haystack` for any contiguous byte window equal to `needle`.
fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_envelope_contains_no_file_bytes() {
    let file = b"KNOWN-FILE-CONTENT-abc123-MUST-NOT-APPEAR";
    let metadata = Metadata {
        content_type: "text/plain".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        filename: "notes.txt".to_string(),
    };

    let sealed = seal_file(file, &metadata, "passphrase", &OsRandom)
        .expect("seal should succeed");

    assert!(
        !contains_bytes(&sealed, file),
        "envelope bytes must not contain the plaintext file byte sequence"
    );
    let lossy = String::from_utf8_lossy(&sealed);
    assert!(
        !lossy.contains("KNOWN-FILE-CONTENT"),
        "envelope (UTF-8 lossy) must not contain the plaintext file content"
    );
}

#[test]
fn test_envelope_contains_no_metadata_strings() {
    // Metadata travels inside the ciphertext: neither the filename nor the
    // content type may be readable from the envelope
    let metadata = Metadata {
        content_type: "application/x-very-identifiable".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        filename: "SECRET-FILENAME-MUST-NOT-APPEAR.pdf".to_string(),
    };

    let sealed = seal_file(b"body", &metadata, "passphrase", &OsRandom)
        .expect("seal should succeed");

    assert!(
        !contains_bytes(&sealed, metadata.filename.as_bytes()),
        "envelope must not contain the filename in the clear"
    );
    assert!(
        !contains_bytes(&sealed, metadata.content_type.as_bytes()),
        "envelope must not contain the content type in the clear"
    );
}

#[test]
fn test_envelope_contains_no_passphrase() {
    let passphrase = "KNOWN-PASSPHRASE-xyz789-MUST-NOT-APPEAR";
    let metadata = Metadata {
        content_type: "text/plain".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        filename: "notes.txt".to_string(),
    };

    let sealed = seal_file(b"body", &metadata, passphrase, &OsRandom)
        .expect("seal should succeed");

    assert!(
        !contains_bytes(&sealed, passphrase.as_bytes()),
        "envelope must never contain the passphrase bytes"
    );
}
