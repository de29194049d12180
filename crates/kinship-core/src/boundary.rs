//! Host-facing shapes and the two-way codec between them and the domain.
//!
//! The host hands us dynamically-typed objects; napi's `serde-json` feature
//! surfaces them as `serde_json::Value`, and named-field access happens
//! through serde (de)serialization of the shapes below. Dynamic values never
//! leak past this module. Conversion is field-preserving and lossless for
//! required fields; the optional `hasChildren` is normalized to a concrete
//! `bool` on the way in and always populated on the way out.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{KinshipError, KinshipResult};
use crate::models;

/// Host-visible address shape. Field-for-field identical to the domain form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zipcode: String,
}

/// Host-visible user shape.
///
/// `hasChildren` is optional on input only; absent means `false`. Output
/// produced by this crate always populates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    #[ts(optional)]
    pub has_children: Option<bool>,
    pub address: Address,
}

impl From<Address> for models::Address {
    fn from(address: Address) -> Self {
        models::Address {
            street: address.street,
            city: address.city,
            zipcode: address.zipcode,
        }
    }
}

impl From<models::Address> for Address {
    fn from(address: models::Address) -> Self {
        Address {
            street: address.street,
            city: address.city,
            zipcode: address.zipcode,
        }
    }
}

impl User {
    /// Normalize into the domain form, defaulting an absent `hasChildren`
    /// to `false`. This is the only field the codec ever defaults.
    pub fn into_domain(self) -> models::User {
        models::User {
            id: self.id,
            name: self.name,
            has_children: self.has_children.unwrap_or(false),
            address: self.address.into(),
        }
    }

    /// Host form of a domain user. `hasChildren` is always populated.
    pub fn from_domain(user: models::User) -> Self {
        User {
            id: user.id,
            name: user.name,
            has_children: Some(user.has_children),
            address: user.address.into(),
        }
    }
}

/// Decode a host user object into a domain [`models::User`].
///
/// A missing required field or a field of the wrong shape (including a
/// missing or non-object `address`) is a boundary contract violation and
/// fails the decode; it is never silently defaulted.
pub fn user_from_value(value: serde_json::Value) -> KinshipResult<models::User> {
    let user: User = serde_json::from_value(value).map_err(KinshipError::BoundaryDecode)?;
    Ok(user.into_domain())
}

/// Encode one domain user as the host object shape.
///
/// Fields are written by name: `id`, `name`, `hasChildren`, `address`
/// (itself a nested object with `street`, `city`, `zipcode`) — always
/// complete.
pub fn user_to_value(user: models::User) -> KinshipResult<serde_json::Value> {
    serde_json::to_value(User::from_domain(user)).map_err(KinshipError::BoundaryEncode)
}

/// Encode a sequence of domain users as a host array.
pub fn users_to_value(users: Vec<models::User>) -> KinshipResult<serde_json::Value> {
    let users: Vec<User> = users.into_iter().map(User::from_domain).collect();
    serde_json::to_value(users).map_err(KinshipError::BoundaryEncode)
}
