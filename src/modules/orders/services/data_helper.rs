// Field validation for the gateway's `AN..max N` notation.
//
// The gateway documents AN as "alphanumeric", but in practice it accepts the
// full character set a merchant supplies. Only length and non-emptiness are
// enforced. Lengths are counted in characters, never bytes.

use crate::core::{AppError, Result};

pub struct DataHelper;

impl DataHelper {
    /// Validate an `AN..max N` value: 1 to `max_length` characters
    pub fn validate_an(value: &str, max_length: usize) -> Result<()> {
        let length = value.chars().count();

        if length == 0 {
            return Err(AppError::format("Value cannot be empty"));
        }

        if length > max_length {
            return Err(AppError::format(format!(
                "Value '{}' exceeds maximum length of {} characters, got {}",
                value, max_length, length
            )));
        }

        Ok(())
    }

    /// Same as [`DataHelper::validate_an`], but an absent value always passes
    pub fn validate_null_or_an(value: Option<&str>, max_length: usize) -> Result<()> {
        match value {
            Some(value) => Self::validate_an(value, max_length),
            None => Ok(()),
        }
    }

    /// Keep at most `max_length` characters of `value`
    pub fn shorten(value: &str, max_length: usize) -> String {
        match value.char_indices().nth(max_length) {
            Some((byte_index, _)) => value[..byte_index].to_string(),
            None => value.to_string(),
        }
    }
}
