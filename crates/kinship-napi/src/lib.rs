//! # kinship-napi
//!
//! NAPI bindings exposing the Kinship module to a JavaScript host.
//!
//! - `bindings/` — the exported `getUsers` / `getUsersAsync` functions
//! - `conversions/` — Rust ↔ JS type conversions via serde_json

pub mod bindings;
pub mod conversions;
