//! Database table names.
//!
//! The strings are an external contract: the hosted database is keyed by
//! them, so each variant maps to its literal explicitly instead of deriving
//! the name from the variant identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string names no known table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown table name: {name}")]
pub struct UnknownTableName {
    /// The rejected input.
    pub name: String,
}

/// Tables exposed by the hosted database.
///
/// # Examples
/// ```
/// use backend::outbound::TableName;
///
/// assert_eq!(TableName::Courses.to_string(), "courses");
/// assert_eq!("all_courses".parse::<TableName>(), Ok(TableName::AllCourses));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TableName {
    /// Catalogue of every offered course.
    AllCourses,
    /// Courses taken by users.
    Courses,
    /// Academic terms.
    Terms,
    /// Registered users.
    Users,
}

impl TableName {
    /// Every table, in declaration order.
    pub const ALL: [Self; 4] = [Self::AllCourses, Self::Courses, Self::Terms, Self::Users];

    /// Literal table name used by the database.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllCourses => "all_courses",
            Self::Courses => "courses",
            Self::Terms => "terms",
            Self::Users => "users",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableName {
    type Err = UnknownTableName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|table| table.as_str() == s)
            .ok_or_else(|| UnknownTableName { name: s.to_owned() })
    }
}

impl TryFrom<String> for TableName {
    type Error = UnknownTableName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TableName> for &'static str {
    fn from(value: TableName) -> Self {
        value.as_str()
    }
}
