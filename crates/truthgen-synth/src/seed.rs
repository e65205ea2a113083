//! Stable seeding for deterministic attribute derivation.

use sha2::{Digest, Sha256};

/// Derives a stable non-negative seed from a username.
///
/// Uses the first eight bytes (big-endian) of SHA-256 over the UTF-8 bytes,
/// so identical input yields an identical seed across runs and processes.
/// The std `Hasher` implementations are randomly keyed per process and must
/// not be used here.
#[must_use]
pub fn stable_seed(username: &str) -> u64 {
    let digest = Sha256::digest(username.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
