//! The module facade the bridge calls through.

use crate::models::User;
use crate::relatives;

/// Stateless entry point decoupling the NAPI bridge from the relatives rule.
///
/// Swap the body of [`Module::get_users`] to substitute real domain logic
/// without touching the bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Module;

impl Module {
    pub fn new() -> Self {
        Self
    }

    /// All relatives of the given user, in rule order.
    pub fn get_users(&self, user: &User) -> Vec<User> {
        relatives::relatives_for_user(user)
    }
}
