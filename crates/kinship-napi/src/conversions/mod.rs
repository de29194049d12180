//! Rust ↔ JS type conversions via serde_json.

pub mod error_types;
pub mod user_types;
