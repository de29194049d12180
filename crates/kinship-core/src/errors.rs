//! Error taxonomy for the host boundary.
//!
//! The relatives rule itself is total; only the boundary codec can fail.

/// Everything that can go wrong crossing the host boundary.
#[derive(Debug, thiserror::Error)]
pub enum KinshipError {
    /// The host sent a value that does not decode into the expected shape:
    /// a required field absent, or a field of the wrong type. Only
    /// `hasChildren` is defaulted; every other field must be present.
    #[error("malformed boundary value: {0}")]
    BoundaryDecode(#[source] serde_json::Error),

    /// A domain value failed to encode for the host. Cannot occur for the
    /// shapes defined in this crate, but the codec is explicit about both
    /// directions.
    #[error("failed to encode value for host: {0}")]
    BoundaryEncode(#[source] serde_json::Error),
}

pub type KinshipResult<T> = Result<T, KinshipError>;
