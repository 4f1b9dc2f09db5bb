//! Object id generation for unsocial-core.
//!
//! Ids are 24 lowercase hex characters encoding 12 bytes: a 4-byte
//! big-endian unix timestamp followed by 8 random bytes, so ids sort
//! roughly by creation time.

use chrono::Utc;

/// Length of an object id in hex characters.
pub const ID_HEX_LENGTH: usize = 24;

/// Generate a fresh object id.
pub fn generate_id() -> String {
    let seconds = (Utc::now().timestamp().max(0) as u32).to_be_bytes();
    let tail: [u8; 8] = rand::random();

    seconds
        .iter()
        .chain(tail.iter())
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Check whether a string is a well-formed object id.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_HEX_LENGTH && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
