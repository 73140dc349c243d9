#[inline]
pub fn gov_assert<T>(condition: bool, error: T) -> Result<(), T> {
    if condition { Ok(()) } else { Err(error) }
}

/// Primary key bytes for tables that hold a single row.
#[inline]
pub fn singleton_key() -> Vec<u8> {
    vec![0u8]
}
