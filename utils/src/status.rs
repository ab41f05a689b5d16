//! Integer status codes for callers expecting them, like bindings to other languages.

/// Operation succeeded
pub const OK: i32 = 0;
/// Operation failed. This covers both malformed input and a failed check.
pub const FAIL: i32 = -1;
/// The point at infinity was given where a non-zero point is needed
pub const INVALID_POINT: i32 = -2;

/// Errors that can be reported as one of the status codes.
pub trait StatusCode {
    fn status_code(&self) -> i32;
}

/// Status code of a result, `OK` for success.
pub fn status_code<T, E: StatusCode>(result: &Result<T, E>) -> i32 {
    match result {
        Ok(_) => OK,
        Err(e) => e.status_code(),
    }
}
