//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for Tally identifiers. Each type
//! ensures type safety so a user ID can never be passed where a
//! subscription ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// User identifier newtype wrapper
///
/// Represents the account a subscription belongs to. Any non-empty string
/// is accepted; the format is owned by the upstream identity system.
///
/// # Examples
///
/// ```
/// use tally::domain::ids::UserId;
/// use std::str::FromStr;
///
/// let user_id = UserId::from_str("user-42").unwrap();
/// assert_eq!(user_id.as_str(), "user-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is empty or whitespace-only
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("User ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the user ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Subscription identifier newtype wrapper
///
/// Generated as a v4 UUID when a subscription is created; parseable back
/// from its string form for lookups.
///
/// # Examples
///
/// ```
/// use tally::domain::ids::SubscriptionId;
///
/// let id = SubscriptionId::generate();
/// let same = SubscriptionId::new(id.as_str()).unwrap();
/// assert_eq!(id, same);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    /// Generates a fresh random subscription ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a SubscriptionId from an existing string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        Uuid::parse_str(&id).map_err(|e| format!("Invalid subscription ID '{id}': {e}"))?;
        Ok(Self(id))
    }

    /// Returns the subscription ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubscriptionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SubscriptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Post identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(u64);

impl PostId {
    /// Creates a new PostId
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(u64);

impl AuthorId {
    /// Creates a new AuthorId
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
