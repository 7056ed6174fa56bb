//! User, organization and space identity records.

use serde::{Deserialize, Serialize};

/// Minimal identity of a platform account, as returned by a username lookup.
///
/// Identity is the `guid`; two records with the same guid name the same user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFields {
    /// Login name
    pub username: String,
    /// Platform-wide unique identifier
    pub guid: String,
}

impl UserFields {
    /// Create a new user record
    pub fn new(username: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            guid: guid.into(),
        }
    }
}

impl PartialEq for UserFields {
    fn eq(&self, other: &Self) -> bool {
        self.guid == other.guid
    }
}

impl Eq for UserFields {}

/// Targeted organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationFields {
    /// Display name
    pub name: String,
    /// Unique identifier
    #[serde(default)]
    pub guid: String,
}

/// Targeted space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceFields {
    /// Display name
    pub name: String,
    /// Unique identifier
    #[serde(default)]
    pub guid: String,
}
