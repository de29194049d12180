//! Domain value records.

mod address;
mod user;

pub use address::Address;
pub use user::User;
