//! `KinshipError` → `napi::Error` mapping with stable error codes.
//!
//! The JS side matches on the `[CODE]` prefix, so codes are part of the
//! host contract and must stay stable.

use kinship_core::KinshipError;

/// Stable SCREAMING_SNAKE_CASE code for each error variant.
fn error_code(err: &KinshipError) -> &'static str {
    match err {
        KinshipError::BoundaryDecode(_) => "BOUNDARY_DECODE",
        KinshipError::BoundaryEncode(_) => "BOUNDARY_ENCODE",
    }
}

/// Convert a `KinshipError` into a `napi::Error` formatted as
/// `[CODE] message`.
pub fn to_napi_error(err: KinshipError) -> napi::Error {
    napi::Error::from_reason(format!("[{}] {}", error_code(&err), err))
}
