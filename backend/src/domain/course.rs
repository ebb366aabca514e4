//! Course record.
//!
//! Course names follow an informal `SUBJECT NUMBER` convention (for example
//! `EECE 230`) that is not enforced here.

use serde::{Deserialize, Serialize};

use super::format::{FormatError, UuidString};

/// Course row as stored in the `courses` and `all_courses` tables.
///
/// ## Invariants
/// - `id`, when present, is a hyphenated UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseDto", into = "CourseDto")]
pub struct Course {
    id: Option<UuidString>,
    username: Option<String>,
}

impl Course {
    /// Build a [`Course`] from an already validated identifier.
    pub fn new(id: Option<UuidString>, username: Option<String>) -> Self {
        Self { id, username }
    }

    /// Fallible constructor validating the identifier.
    ///
    /// An empty `id` is treated as absent.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Course;
    ///
    /// let course = Course::try_from_strings(None, Some("eece230".to_owned())).unwrap();
    /// assert!(course.id().is_none());
    /// assert!(Course::try_from_strings(Some("bad-id"), None).is_err());
    /// ```
    pub fn try_from_strings(
        id: Option<&str>,
        username: Option<String>,
    ) -> Result<Self, FormatError> {
        let id = UuidString::parse_optional(id)?;
        Ok(Self::new(id, username))
    }

    /// Primary key, if assigned.
    pub fn id(&self) -> Option<&UuidString> {
        self.id.as_ref()
    }

    /// Owning username, if recorded.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CourseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

impl From<Course> for CourseDto {
    fn from(value: Course) -> Self {
        let Course { id, username } = value;
        Self {
            id: id.map(String::from),
            username,
        }
    }
}

impl TryFrom<CourseDto> for Course {
    type Error = FormatError;

    fn try_from(value: CourseDto) -> Result<Self, Self::Error> {
        Course::try_from_strings(value.id.as_deref(), value.username)
    }
}
