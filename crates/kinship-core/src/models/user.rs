use serde::{Deserialize, Serialize};

use super::address::Address;

/// A person record as the domain sees it.
///
/// `has_children` is always concrete here — the boundary layer normalizes
/// the host's optional flag before a `User` is constructed. Identity is the
/// tuple of all fields; `id` is a correlation key for the relatives rule, not
/// enforced unique. Records are built fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Absent in host input means `false`.
    #[serde(default)]
    pub has_children: bool,
    /// Always fully populated once a `User` exists in domain form.
    pub address: Address,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>, has_children: bool, address: Address) -> Self {
        Self {
            id,
            name: name.into(),
            has_children,
            address,
        }
    }
}
