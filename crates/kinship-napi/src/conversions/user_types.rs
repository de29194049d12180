//! User ↔ serde_json::Value conversions for the NAPI boundary.
//!
//! napi's `serde-json` feature handles `serde_json::Value` ↔ JsObject
//! automatically, so these wrappers are the whole marshaling layer: one
//! decode pass in, one encode pass out, per call. The shape rules (required
//! fields, the defaulted `hasChildren`) live in `kinship_core::boundary`.

use kinship_core::boundary;
use kinship_core::models::User;

use super::error_types;

/// Decode a user object received from JS, defaulting an absent
/// `hasChildren` to `false`. Any other missing or mis-shaped field fails.
pub fn user_from_json(value: serde_json::Value) -> napi::Result<User> {
    boundary::user_from_value(value).map_err(error_types::to_napi_error)
}

/// Encode domain users as the JS array shape. Every element carries a
/// concrete `hasChildren`.
pub fn users_to_json(users: Vec<User>) -> napi::Result<serde_json::Value> {
    boundary::users_to_value(users).map_err(error_types::to_napi_error)
}
