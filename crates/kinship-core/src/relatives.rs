//! The relatives rule.
//!
//! Placeholder business logic carried over from the SDK this module wraps:
//! fixed synthetic records keyed off the input user. Deterministic, total
//! over all well-formed inputs, no I/O.

use crate::models::User;

/// Relatives of the provided user.
///
/// Always yields one record ("Judy Doe" at `id + 1`, inheriting
/// `has_children` and the address). When the input user has children, two
/// more follow: "Frank Doe" at `id + 2` and "Marta Doe" at `id + 3`, both
/// without children. The result length is 1 or 3, never 0; zero and negative
/// ids are accepted and the arithmetic simply proceeds.
pub fn relatives_for_user(user: &User) -> Vec<User> {
    let mut relatives = vec![User::new(
        user.id + 1,
        "Judy Doe",
        user.has_children,
        user.address.clone(),
    )];
    if user.has_children {
        relatives.push(User::new(
            user.id + 2,
            "Frank Doe",
            false,
            user.address.clone(),
        ));
        relatives.push(User::new(
            user.id + 3,
            "Marta Doe",
            false,
            user.address.clone(),
        ));
    }
    relatives
}
