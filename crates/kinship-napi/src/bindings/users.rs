//! User bindings: the `getUsers` operation in both calling conventions.
//!
//! Each function decodes the host value, delegates to the module facade,
//! and encodes the resulting users back for JS consumption.

use napi_derive::napi;
use tracing::debug;

use kinship_core::Module;

use crate::conversions::user_types;

/// Relatives of the given user, returned synchronously.
///
/// An absent `hasChildren` on the input decodes as `false`; every returned
/// user carries a concrete `hasChildren`.
#[napi(ts_return_type = "Array<User>")]
pub fn get_users(
    #[napi(ts_arg_type = "User")] user: serde_json::Value,
) -> napi::Result<serde_json::Value> {
    debug!("NAPI: get_users");

    let user = user_types::user_from_json(user)?;
    let relatives = Module::new().get_users(&user);
    user_types::users_to_json(relatives)
}

/// Relatives of the given user, delivered through a promise.
///
/// The relatives rule is synchronous, so the promise resolves without ever
/// suspending; malformed input rejects it instead of resolving. The promise
/// is created and settled exactly once per call.
#[napi(ts_return_type = "Promise<Array<User>>")]
pub async fn get_users_async(
    #[napi(ts_arg_type = "User")] user: serde_json::Value,
) -> napi::Result<serde_json::Value> {
    debug!("NAPI: get_users_async");

    let user = user_types::user_from_json(user)?;
    let relatives = Module::new().get_users(&user);
    user_types::users_to_json(relatives)
}
