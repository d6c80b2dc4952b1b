//! Filtering and ordering of the user list.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use super::user::User;

/// Field a user list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Stored identifier.
    Id,
    /// Name, ignoring case.
    Name,
    /// Email, ignoring case.
    Email,
    /// Age in years.
    Age,
    /// City, ignoring case.
    City,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first (`asc`).
    #[default]
    Ascending,
    /// Largest first (`desc`).
    Descending,
}

/// Unrecognised sort field or direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortParseError {
    /// `sort` named no known field.
    #[error("unknown sort field '{0}'")]
    UnknownField(String),
    /// `order` was neither `asc` nor `desc`.
    #[error("unknown sort order '{0}'")]
    UnknownDirection(String),
}

impl FromStr for SortField {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "age" => Ok(Self::Age),
            "city" => Ok(Self::City),
            _ => Err(SortParseError::UnknownField(s.to_owned())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(SortParseError::UnknownDirection(s.to_owned())),
        }
    }
}

/// Criteria for listing users.
///
/// The default search keeps every user in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
    /// Case-insensitive text matched against name, email, city and phone.
    pub query: Option<String>,
    /// Inclusive lower age bound.
    pub min_age: Option<u8>,
    /// Inclusive upper age bound.
    pub max_age: Option<u8>,
    /// Ordering; `None` keeps stored order.
    pub sort: Option<(SortField, SortDirection)>,
}

impl UserSearch {
    /// Whether `user` passes the text and age filters.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        if self.min_age.is_some_and(|min| user.age() < min)
            || self.max_age.is_some_and(|max| user.age() > max)
        {
            return false;
        }
        let Some(query) = self
            .query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
        else {
            return true;
        };
        let needle = query.to_lowercase();
        [user.name(), user.email(), user.city(), user.phone()]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    /// Filter and order `users`. Sorting is stable, so ties keep stored order.
    #[must_use]
    pub fn apply(&self, users: Vec<User>) -> Vec<User> {
        let mut selected: Vec<User> = users.into_iter().filter(|user| self.matches(user)).collect();
        if let Some((field, direction)) = self.sort {
            selected.sort_by(|a, b| {
                let ordering = compare(field, a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        selected
    }
}

fn compare(field: SortField, a: &User, b: &User) -> Ordering {
    match field {
        SortField::Id => a.id().cmp(&b.id()),
        SortField::Age => a.age().cmp(&b.age()),
        SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortField::Email => a.email().to_lowercase().cmp(&b.email().to_lowercase()),
        SortField::City => a.city().to_lowercase().cmp(&b.city().to_lowercase()),
    }
}
