// src/core/hash.rs
use sha2::{Digest, Sha256};

/// Maps a string to a deterministic 64-bit unsigned integer: the SHA-256
/// digest of the input, first 8 bytes read as a big-endian u64.
///
/// SHA-256 gives a uniform, collision-resistant spread over the full u64
/// range, so `hash_to_u64(key) % pool_len` is an effectively even draw from
/// a word pool.
pub fn hash_to_u64(input: &str) -> u64 {
    let digest = Sha256::digest(input.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}
