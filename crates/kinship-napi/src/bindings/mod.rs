//! All NAPI-exported functions.

pub mod users;
