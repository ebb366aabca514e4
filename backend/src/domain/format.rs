//! Format validators shared by the record schemas.
//!
//! Two rules exist: identifiers must be hyphenated UUIDs, and user emails must
//! belong to one of the institutional domains. Each rule is available as a
//! pass-through function over optional input and as a value object whose only
//! constructors run the rule, so an unvalidated instance cannot exist.

use std::fmt;
use std::str::FromStr;

use lettre::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Email domains accepted for [`InstitutionalEmail`].
pub const ALLOWED_EMAIL_DOMAINS: [&str; 2] = ["mail.aub.edu", "aub.edu.lb"];

/// Length of the 8-4-4-4-12 hyphenated UUID spelling.
const HYPHENATED_UUID_LEN: usize = 36;

/// Raised when a value fails a format or domain rule.
///
/// Every variant carries the offending input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The value is not a hyphenated UUID.
    #[error("{value} is an invalid UUID")]
    InvalidUuid {
        /// Rejected input.
        value: String,
    },
    /// The value is not a syntactically valid email address.
    #[error("{value} is an invalid email")]
    InvalidEmail {
        /// Rejected input.
        value: String,
    },
    /// The value parses as an email but its domain is not allowlisted.
    #[error("{value} is an invalid email: domain {domain} is not an institutional domain")]
    DisallowedEmailDomain {
        /// Rejected input.
        value: String,
        /// Domain extracted from the input.
        domain: String,
    },
}

impl FormatError {
    /// The input that failed validation.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidUuid { value }
            | Self::InvalidEmail { value }
            | Self::DisallowedEmailDomain { value, .. } => value.as_str(),
        }
    }
}

/// Pass `value` through when it is absent, empty, or a hyphenated UUID.
///
/// # Examples
/// ```
/// use backend::domain::validate_uuid;
///
/// let id = "123e4567-e89b-12d3-a456-426614174000";
/// assert_eq!(validate_uuid(Some(id)), Ok(Some(id)));
/// assert_eq!(validate_uuid(Some("")), Ok(Some("")));
/// assert!(validate_uuid(Some("12345")).is_err());
/// ```
pub fn validate_uuid(value: Option<&str>) -> Result<Option<&str>, FormatError> {
    match value {
        Some(raw) if !raw.is_empty() => parse_hyphenated(raw).map(|_| value),
        _ => Ok(value),
    }
}

/// Pass `value` through when it is absent, empty, or an institutional email.
///
/// # Examples
/// ```
/// use backend::domain::{FormatError, validate_institutional_email};
///
/// assert!(validate_institutional_email(Some("student@mail.aub.edu")).is_ok());
/// assert!(matches!(
///     validate_institutional_email(Some("student@gmail.com")),
///     Err(FormatError::DisallowedEmailDomain { .. })
/// ));
/// ```
pub fn validate_institutional_email(value: Option<&str>) -> Result<Option<&str>, FormatError> {
    match value {
        Some(raw) if !raw.is_empty() => check_institutional(raw).map(|()| value),
        _ => Ok(value),
    }
}

fn parse_hyphenated(raw: &str) -> Result<Uuid, FormatError> {
    // `Uuid::parse_str` also accepts the simple, braced and URN forms.
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(FormatError::InvalidUuid {
            value: raw.to_owned(),
        });
    }
    Uuid::parse_str(raw).map_err(|_| FormatError::InvalidUuid {
        value: raw.to_owned(),
    })
}

fn check_institutional(raw: &str) -> Result<(), FormatError> {
    let address = Address::from_str(raw).map_err(|_| FormatError::InvalidEmail {
        value: raw.to_owned(),
    })?;
    let domain = address.domain();
    if ALLOWED_EMAIL_DOMAINS.contains(&domain) {
        Ok(())
    } else {
        Err(FormatError::DisallowedEmailDomain {
            value: raw.to_owned(),
            domain: domain.to_owned(),
        })
    }
}

/// Identifier string guaranteed to hold a hyphenated UUID.
///
/// The caller's spelling (including letter case) is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UuidString(Uuid, String);

impl UuidString {
    /// Validate and construct a [`UuidString`].
    pub fn new(value: impl Into<String>) -> Result<Self, FormatError> {
        Self::from_owned(value.into())
    }

    /// Validate optional input, treating absent or empty values as "not provided".
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, FormatError> {
        match value {
            Some(raw) if !raw.is_empty() => Self::new(raw).map(Some),
            _ => Ok(None),
        }
    }

    /// Wrap an already parsed UUID using its canonical lowercase spelling.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.hyphenated().to_string())
    }

    /// Generate a random v4 identifier.
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Access the parsed UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    fn from_owned(value: String) -> Result<Self, FormatError> {
        let parsed = parse_hyphenated(&value)?;
        Ok(Self(parsed, value))
    }
}

impl AsRef<str> for UuidString {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UuidString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UuidString> for String {
    fn from(value: UuidString) -> Self {
        let UuidString(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UuidString {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Email address on one of the [`ALLOWED_EMAIL_DOMAINS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InstitutionalEmail(String);

impl InstitutionalEmail {
    /// Validate and construct an [`InstitutionalEmail`].
    ///
    /// An empty string is rejected; use [`InstitutionalEmail::parse_optional`]
    /// where the email may be left out.
    pub fn new(value: impl Into<String>) -> Result<Self, FormatError> {
        Self::from_owned(value.into())
    }

    /// Validate optional input, treating absent or empty values as "not provided".
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, FormatError> {
        match value {
            Some(raw) if !raw.is_empty() => Self::new(raw).map(Some),
            _ => Ok(None),
        }
    }

    /// Domain part of the address.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }

    fn from_owned(value: String) -> Result<Self, FormatError> {
        if value.is_empty() {
            return Err(FormatError::InvalidEmail { value });
        }
        check_institutional(&value)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for InstitutionalEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for InstitutionalEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<InstitutionalEmail> for String {
    fn from(value: InstitutionalEmail) -> Self {
        value.0
    }
}

impl TryFrom<String> for InstitutionalEmail {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
