//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::format::{FormatError, InstitutionalEmail, UuidString};

/// Raw field values accepted by [`User::try_from_fields`].
///
/// This is also the serialised shape of a [`User`]: keys match the `users`
/// table columns.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserFields {
    /// Primary key; absent or empty means "not assigned yet".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Login name.
    pub username: String,
    /// Institutional email address.
    pub email: String,
    /// Password as supplied by the caller.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Credits completed.
    pub credits: i64,
    /// Cumulative grade point average.
    pub grade: f64,
}

impl fmt::Debug for UserFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFields")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("credits", &self.credits)
            .field("grade", &self.grade)
            .finish()
    }
}

/// Application user.
///
/// ## Invariants
/// - `id`, when present, is a hyphenated UUID.
/// - `email` is a syntactically valid address on `mail.aub.edu` or
///   `aub.edu.lb`.
///
/// Other fields are stored as given. The password is wiped from memory when
/// the user is dropped and never appears in `Debug` output.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UserFields", into = "UserFields")]
pub struct User {
    id: Option<UuidString>,
    username: String,
    email: InstitutionalEmail,
    password: Zeroizing<String>,
    first_name: String,
    last_name: String,
    credits: i64,
    grade: f64,
}

impl User {
    /// Fallible constructor enforcing identifier and email invariants.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{User, UserFields};
    ///
    /// let user = User::try_from_fields(UserFields {
    ///     id: Some("123e4567-e89b-12d3-a456-426614174000".to_owned()),
    ///     username: "ada".to_owned(),
    ///     email: "a@aub.edu.lb".to_owned(),
    ///     password: "hunter2".to_owned(),
    ///     first_name: "Ada".to_owned(),
    ///     last_name: "Lovelace".to_owned(),
    ///     credits: 15,
    ///     grade: 3.7,
    /// })
    /// .unwrap();
    /// assert_eq!(user.email().as_ref(), "a@aub.edu.lb");
    /// ```
    pub fn try_from_fields(fields: UserFields) -> Result<Self, FormatError> {
        let UserFields {
            id,
            username,
            email,
            password,
            first_name,
            last_name,
            credits,
            grade,
        } = fields;

        let id = UuidString::parse_optional(id.as_deref())?;
        let email = InstitutionalEmail::new(email)?;

        Ok(Self {
            id,
            username,
            email,
            password: Zeroizing::new(password),
            first_name,
            last_name,
            credits,
            grade,
        })
    }

    /// Primary key, if assigned.
    pub fn id(&self) -> Option<&UuidString> {
        self.id.as_ref()
    }

    /// Login name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Institutional email address.
    pub fn email(&self) -> &InstitutionalEmail {
        &self.email
    }

    /// Password as supplied at construction.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Credits completed.
    pub fn credits(&self) -> i64 {
        self.credits
    }

    /// Cumulative grade point average.
    pub fn grade(&self) -> f64 {
        self.grade
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("credits", &self.credits)
            .field("grade", &self.grade)
            .finish()
    }
}

impl From<User> for UserFields {
    fn from(value: User) -> Self {
        let User {
            id,
            username,
            email,
            password,
            first_name,
            last_name,
            credits,
            grade,
        } = value;
        Self {
            id: id.map(String::from),
            username,
            email: email.into(),
            password: password.as_str().to_owned(),
            first_name,
            last_name,
            credits,
            grade,
        }
    }
}

impl TryFrom<UserFields> for User {
    type Error = FormatError;

    fn try_from(value: UserFields) -> Result<Self, Self::Error> {
        Self::try_from_fields(value)
    }
}

#[cfg(test)]
mod tests;
