use std::num::NonZeroU64;

use crate::error::storage::StorageError;

/// Parses a u64 value from a string
///
/// Discord snowflakes are stored as strings in the JSON files and parsed back
/// into `u64` when a record is loaded. Zero is not a valid snowflake.
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed string to `u64`
/// - `Err(StorageError::InvalidId)` - Not a non-zero u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, StorageError> {
    value
        .parse::<NonZeroU64>()
        .map(NonZeroU64::get)
        .map_err(|e| StorageError::InvalidId {
            value: value.to_string(),
            source: e,
        })
}

/// Returns the only character of `value`, or `None` if it is empty or longer.
pub fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
