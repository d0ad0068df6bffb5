//! Records owned by the storage collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored PIN value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PinCode {
    /// Sequential identifier assigned by the store.
    pub id: u32,
    /// The authoritative PIN.
    pub pin: String,
    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
}

/// Insert form for [`PinCode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPinCode {
    pub pin: String,
}

/// Placeholder account record. Nothing authenticates against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct User {
    pub id: u32,
    pub username: String,
    pub password: String,
}

/// Insert form for [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
