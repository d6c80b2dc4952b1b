//! Field and form validation for user records.
//!
//! The predicates are pure and independent. [`validate_user_form`] runs all of
//! them in a fixed order and reports every failure at once so a client can fix
//! the whole form in one round trip.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::phone::normalize_phone;
use super::user::{User, UserDraft, UserId, UserProfile};

/// Maximum length of a name, in characters.
pub const NAME_MAX: usize = 100;
/// Maximum length of a city, in characters.
pub const CITY_MAX: usize = 100;
/// Youngest accepted age.
pub const AGE_MIN: u8 = 0;
/// Oldest accepted age.
pub const AGE_MAX: u8 = 150;

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_RE.get_or_init(|| {
        // Latin and Cyrillic letters, whitespace, hyphen, period.
        Regex::new(r"^[A-Za-zА-Яа-яЁё\s\-.]+$")
            .unwrap_or_else(|error| panic!("name regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// A single reason a submitted user form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Name is blank.
    #[error("name is required")]
    NameRequired,
    /// Name exceeds the length limit.
    #[error("name must be at most {max} characters")]
    NameTooLong {
        /// Maximum number of characters.
        max: usize,
    },
    /// Name contains characters other than letters, spaces, hyphens and periods.
    #[error("name may only contain letters, spaces, hyphens and periods")]
    NameInvalidCharacters,
    /// Email is blank.
    #[error("email is required")]
    EmailRequired,
    /// Email does not look like an address.
    #[error("email address is invalid")]
    EmailInvalid,
    /// Age is not made of decimal digits.
    #[error("age must be a number")]
    AgeNotANumber,
    /// Age falls outside the accepted range.
    #[error("age must be between {min} and {max}")]
    AgeOutOfRange {
        /// Smallest accepted age.
        min: u8,
        /// Largest accepted age.
        max: u8,
    },
    /// Phone number cannot be normalised.
    #[error("phone number is invalid")]
    PhoneInvalid,
    /// City exceeds the length limit.
    #[error("city must be at most {max} characters")]
    CityTooLong {
        /// Maximum number of characters.
        max: usize,
    },
    /// Another user already has this email, ignoring case.
    #[error("a user with this email already exists")]
    EmailTaken,
}

impl ValidationIssue {
    /// Form field the issue belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired | Self::NameTooLong { .. } | Self::NameInvalidCharacters => "name",
            Self::EmailRequired | Self::EmailInvalid | Self::EmailTaken => "email",
            Self::AgeNotANumber | Self::AgeOutOfRange { .. } => "age",
            Self::PhoneInvalid => "phone",
            Self::CityTooLong { .. } => "city",
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameRequired | Self::EmailRequired => "required",
            Self::NameTooLong { .. } | Self::CityTooLong { .. } => "too_long",
            Self::NameInvalidCharacters => "invalid_characters",
            Self::EmailInvalid | Self::PhoneInvalid => "invalid_format",
            Self::AgeNotANumber => "not_a_number",
            Self::AgeOutOfRange { .. } => "out_of_range",
            Self::EmailTaken => "duplicate",
        }
    }
}

/// Ordered, non-empty list of validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    /// Issues in reporting order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    /// Number of issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for errors built by [`validate_user_form`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `issue` was reported.
    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.0.contains(issue)
    }

    /// Human-readable messages in reporting order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn check_name(raw: &str) -> Result<String, ValidationIssue> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationIssue::NameRequired);
    }
    if name.chars().count() > NAME_MAX {
        return Err(ValidationIssue::NameTooLong { max: NAME_MAX });
    }
    if !name_regex().is_match(name) {
        return Err(ValidationIssue::NameInvalidCharacters);
    }
    Ok(name.to_owned())
}

fn check_email(raw: &str) -> Result<String, ValidationIssue> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationIssue::EmailRequired);
    }
    if !email_regex().is_match(email) {
        return Err(ValidationIssue::EmailInvalid);
    }
    Ok(email.to_owned())
}

fn check_age(raw: &str) -> Result<u8, ValidationIssue> {
    let age = raw.trim();
    if age.is_empty() || !age.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationIssue::AgeNotANumber);
    }
    let out_of_range = ValidationIssue::AgeOutOfRange {
        min: AGE_MIN,
        max: AGE_MAX,
    };
    match age.parse::<u8>() {
        Ok(value) if (AGE_MIN..=AGE_MAX).contains(&value) => Ok(value),
        _ => Err(out_of_range),
    }
}

fn check_phone(raw: &str) -> Result<String, ValidationIssue> {
    let phone = raw.trim();
    if phone.is_empty() {
        return Ok(String::new());
    }
    normalize_phone(phone).ok_or(ValidationIssue::PhoneInvalid)
}

fn check_city(raw: &str) -> Result<String, ValidationIssue> {
    let city = raw.trim();
    if city.chars().count() > CITY_MAX {
        return Err(ValidationIssue::CityTooLong { max: CITY_MAX });
    }
    Ok(city.to_owned())
}

/// Whether `name` is a non-empty name of letters, spaces, hyphens and periods.
#[must_use]
pub fn valid_name(name: &str) -> bool {
    check_name(name).is_ok()
}

/// Whether `email` has the `local@domain.tld` shape.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    check_email(email).is_ok()
}

/// Whether `age` is a digit string within [`AGE_MIN`]..=[`AGE_MAX`].
#[must_use]
pub fn valid_age(age: &str) -> bool {
    check_age(age).is_ok()
}

/// Whether `phone` is empty or normalises to the canonical form.
#[must_use]
pub fn valid_phone(phone: &str) -> bool {
    check_phone(phone).is_ok()
}

/// Whether `city` fits within [`CITY_MAX`] characters. Empty is valid.
#[must_use]
pub fn valid_city(city: &str) -> bool {
    check_city(city).is_ok()
}

/// Whether another user (not `exclude`) already owns `email`, ignoring case.
///
/// # Examples
/// ```
/// use userdesk::domain::{UserId, email_is_duplicate, sample_users};
///
/// let users = sample_users();
/// assert!(email_is_duplicate("IVAN@example.com", &users, None));
/// assert!(!email_is_duplicate("ivan@example.com", &users, Some(UserId::new(1))));
/// ```
#[must_use]
pub fn email_is_duplicate(email: &str, users: &[User], exclude: Option<UserId>) -> bool {
    users
        .iter()
        .filter(|user| Some(user.id()) != exclude)
        .any(|user| user.has_email(email))
}

fn collect<T>(result: Result<T, ValidationIssue>, issues: &mut Vec<ValidationIssue>) -> Option<T> {
    result.map_err(|issue| issues.push(issue)).ok()
}

/// Validate a submitted form against the current collection.
///
/// Issues are reported in field order (name, email, age, phone, city) with the
/// duplicate-email check last. `exclude` names the record being edited so it
/// does not collide with its own email.
///
/// # Errors
/// Returns every [`ValidationIssue`] found when any field is rejected.
pub fn validate_user_form(
    draft: &UserDraft,
    users: &[User],
    exclude: Option<UserId>,
) -> Result<UserProfile, ValidationErrors> {
    let mut issues = Vec::new();
    let name = collect(check_name(&draft.name), &mut issues);
    let email = collect(check_email(&draft.email), &mut issues);
    let age = collect(check_age(&draft.age), &mut issues);
    let phone = collect(check_phone(&draft.phone), &mut issues);
    let city = collect(check_city(&draft.city), &mut issues);

    if let Some(email) = &email {
        if email_is_duplicate(email, users, exclude) {
            issues.push(ValidationIssue::EmailTaken);
        }
    }

    match (name, email, age, phone, city) {
        (Some(name), Some(email), Some(age), Some(phone), Some(city)) if issues.is_empty() => {
            Ok(UserProfile {
                name,
                email,
                age,
                phone,
                city,
            })
        }
        _ => Err(ValidationErrors(issues)),
    }
}
