use std::fmt;

use serde::{Deserialize, Serialize};

/// A postal address, owned inline by its [`User`](super::User).
///
/// Pure value record: identity is field-wise equality and no validation is
/// applied to field contents (empty strings are accepted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// City name.
    pub city: String,
    /// Postal code, kept as text.
    pub zipcode: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            zipcode: zipcode.into(),
        }
    }
}

impl fmt::Display for Address {
    /// Human-readable rendering: street, city, and zipcode joined by single
    /// spaces. No punctuation, no locale handling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.street, self.city, self.zipcode)
    }
}
