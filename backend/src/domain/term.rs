//! Academic term record.

use serde::{Deserialize, Serialize};

use super::format::{FormatError, UuidString};

/// Term row as stored in the `terms` table.
///
/// `name` conventionally reads `SEASON YEAR - YEAR` (for example
/// `Fall 2022 - 2023`) but any string is accepted.
///
/// ## Invariants
/// - `id`, when present, is a hyphenated UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TermDto", into = "TermDto")]
pub struct Term {
    id: Option<UuidString>,
    name: String,
}

impl Term {
    /// Build a [`Term`] from an already validated identifier.
    pub fn new(id: Option<UuidString>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Fallible constructor validating the identifier.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Term;
    ///
    /// let term = Term::try_from_strings(None, "Fall 2022 - 2023").unwrap();
    /// assert_eq!(term.name(), "Fall 2022 - 2023");
    /// ```
    pub fn try_from_strings(
        id: Option<&str>,
        name: impl Into<String>,
    ) -> Result<Self, FormatError> {
        let id = UuidString::parse_optional(id)?;
        Ok(Self::new(id, name))
    }

    /// Primary key, if assigned.
    pub fn id(&self) -> Option<&UuidString> {
        self.id.as_ref()
    }

    /// Display name of the term.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TermDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
}

impl From<Term> for TermDto {
    fn from(value: Term) -> Self {
        let Term { id, name } = value;
        Self {
            id: id.map(String::from),
            name,
        }
    }
}

impl TryFrom<TermDto> for Term {
    type Error = FormatError;

    fn try_from(value: TermDto) -> Result<Self, Self::Error> {
        Term::try_from_strings(value.id.as_deref(), value.name)
    }
}
