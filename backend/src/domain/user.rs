//! User record model.
//!
//! A [`User`] is exactly what the JSON document stores: a numeric identifier,
//! the contact fields, and optional creation/update stamps. Records only enter
//! the collection through the user service, which validates a raw
//! [`UserDraft`] into a [`UserProfile`] first.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Numeric user identifier, unique within the collection and never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Identifier handed to the first record of an empty collection.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following `self`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Raw, unvalidated form input for creating or editing a user.
///
/// Every field is kept as text exactly as submitted so a rejected form can be
/// shown back to the user unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Full name as typed.
    pub name: String,
    /// Email address as typed.
    pub email: String,
    /// Age as text; must be decimal digits to pass validation.
    pub age: String,
    /// Phone number in any accepted notation, or empty.
    pub phone: String,
    /// City, optional.
    pub city: String,
}

/// Validated contact fields ready to be stored on a [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Trimmed full name.
    pub name: String,
    /// Trimmed email address.
    pub email: String,
    /// Age in years, `0..=150`.
    pub age: u8,
    /// Canonical `+7 (XXX) XXX-XX-XX` form, or empty when not supplied.
    pub phone: String,
    /// Trimmed city, possibly empty.
    pub city: String,
}

/// A stored user record.
///
/// ## Invariants
/// - `id` is unique within the collection.
/// - `email` is unique within the collection, ignoring case.
///
/// Serialises with snake_case field names; timestamps use
/// `YYYY-MM-DD HH:MM:SS` and are omitted while unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    age: u8,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    city: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp_format"
    )]
    created_at: Option<NaiveDateTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp_format"
    )]
    updated_at: Option<NaiveDateTime>,
}

impl User {
    /// Build a record without timestamps.
    #[must_use]
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        let UserProfile {
            name,
            email,
            age,
            phone,
            city,
        } = profile;
        Self {
            id,
            name,
            email,
            age,
            phone,
            city,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the creation stamp.
    #[must_use]
    pub fn created(mut self, at: NaiveDateTime) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Replace the contact fields in place and stamp `updated_at`.
    pub fn apply_update(&mut self, profile: UserProfile, at: NaiveDateTime) {
        let UserProfile {
            name,
            email,
            age,
            phone,
            city,
        } = profile;
        self.name = name;
        self.email = email;
        self.age = age;
        self.phone = phone;
        self.city = city;
        self.updated_at = Some(at);
    }

    /// Unique identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address, unique ignoring case.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Age in years.
    pub fn age(&self) -> u8 {
        self.age
    }

    /// Canonical phone number, or empty.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// City, possibly empty.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// When the record was created, if known.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }

    /// When the record was last updated, if ever.
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }

    /// Case-insensitive email comparison used for the uniqueness rule.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// `YYYY-MM-DD HH:MM:SS` encoding for optional timestamps.
pub(crate) mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub(crate) fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.collect_str(&at.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests;
