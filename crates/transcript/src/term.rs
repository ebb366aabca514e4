//! Registrar term codes.
//!
//! A term code packs a year and a semester as `YYYYSS`, for example `202310`
//! for the fall semester of 2023.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semester encoded in the last two digits of a [`TermCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
    /// Code `10`.
    Fall,
    /// Code `15`.
    Winter,
    /// Code `20`.
    Spring,
    /// Code `30`.
    Summer,
}

impl Semester {
    /// Decode the two-digit semester code.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            10 => Some(Self::Fall),
            15 => Some(Self::Winter),
            20 => Some(Self::Spring),
            30 => Some(Self::Summer),
            _ => None,
        }
    }

    /// Two-digit semester code.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Fall => 10,
            Self::Winter => 15,
            Self::Spring => 20,
            Self::Summer => 30,
        }
    }

    /// English semester name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        }
    }
}

/// Registrar term code in `YYYYSS` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermCode(u32);

impl TermCode {
    /// Wrap a raw term code.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Raw numeric code.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Year part of the code.
    #[must_use]
    pub const fn year(self) -> u32 {
        self.0.div_euclid(100)
    }

    /// Semester part of the code, if it is a known semester.
    #[must_use]
    pub const fn semester(self) -> Option<Semester> {
        Semester::from_code(self.0.rem_euclid(100))
    }
}

impl fmt::Display for TermCode {
    /// Writes `"{Semester} {year}"`, or just the year for an unknown semester.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(semester) = self.semester() {
            return write!(f, "{} {}", semester.name(), self.year());
        }
        write!(f, "{}", self.year())
    }
}

/// Format a raw term code for display.
///
/// # Examples
///
/// ```
/// use transcript::format_term_name;
///
/// assert_eq!(format_term_name(202_310), "Fall 2023");
/// assert_eq!(format_term_name(202_430), "Summer 2024");
/// ```
#[must_use]
pub fn format_term_name(code: u32) -> String {
    TermCode::new(code).to_string()
}

#[cfg(test)]
mod tests {
    //! Covers term code decoding and display.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(202_310, "Fall 2023")]
    #[case(202_315, "Winter 2023")]
    #[case(202_320, "Spring 2023")]
    #[case(202_330, "Summer 2023")]
    fn formats_known_semesters(#[case] code: u32, #[case] expected: &str) {
        assert_eq!(format_term_name(code), expected);
    }

    #[rstest]
    #[case(202_399, "2023")]
    #[case(202_300, "2023")]
    #[case(0, "0")]
    fn unknown_semester_shows_only_the_year(#[case] code: u32, #[case] expected: &str) {
        assert_eq!(format_term_name(code), expected);
    }

    #[test]
    fn semester_codes_round_trip() {
        for semester in [
            Semester::Fall,
            Semester::Winter,
            Semester::Spring,
            Semester::Summer,
        ] {
            assert_eq!(Semester::from_code(semester.code()), Some(semester));
        }
    }

    #[test]
    fn term_code_is_a_bare_number_in_json() {
        let code: TermCode = serde_json::from_str("202320").expect("numeric term code");
        assert_eq!(code.year(), 2023);
        assert_eq!(code.semester(), Some(Semester::Spring));
        assert_eq!(serde_json::to_string(&code).expect("serialise"), "202320");
    }
}
