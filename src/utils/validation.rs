use crate::utils::error::{RecordError, Result};

/// Narrows a wide integer to `i32`, failing instead of wrapping.
pub fn narrow_to_i32(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| RecordError::NumberOutOfRange {
        value,
        min: i64::from(i32::MIN),
        max: i64::from(i32::MAX),
    })
}
