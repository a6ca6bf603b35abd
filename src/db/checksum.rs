//! Checksum calculation for change detection.
//!
//! The envelope is re-serialized only when content has been observed to
//! change; the checksum is how "observed to change" is decided.

use sha2::{Digest, Sha256};

use super::models::PersistedState;
use super::repository::StoreResult;

/// Calculate SHA-256 checksum of serialized content.
///
/// # Arguments
/// * `content` - JSON string content of the envelope
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Checksum of a state's canonical JSON serialization.
pub fn state_checksum(state: &PersistedState) -> StoreResult<String> {
    let json = serde_json::to_string(state)?;
    Ok(calculate_checksum(&json))
}
