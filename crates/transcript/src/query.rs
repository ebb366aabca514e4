//! Grade queries typed into the course search box.

use std::sync::OnceLock;

use regex::Regex;

use crate::grade::LetterGrade;

/// How a [`GradeQuery`] compares a course grade with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `>`: strictly better than the target.
    Better,
    /// `>=`: the target or better.
    AtLeast,
    /// `<`: strictly worse than the target.
    Worse,
    /// `<=`: the target or worse.
    AtMost,
    /// `=` or no operator: exactly the target.
    Exact,
}

/// Parsed grade query such as `>=B+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradeQuery {
    /// Comparison to apply.
    pub comparison: Comparison,
    /// Grade to compare against; always on the A to F scale.
    pub target: LetterGrade,
}

static GRADE_QUERY_RE: OnceLock<Regex> = OnceLock::new();

fn grade_query_regex() -> &'static Regex {
    GRADE_QUERY_RE.get_or_init(|| {
        let pattern = r"(?i)^([<>]=?|=)?([A-D][+-]?|F)$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("grade query regex failed to compile: {error}"))
    })
}

impl GradeQuery {
    /// Parse a query; returns `None` when the text is not a grade query.
    ///
    /// Letters are case-insensitive and surrounding whitespace is not
    /// trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use transcript::{Comparison, GradeQuery, LetterGrade};
    ///
    /// let query = GradeQuery::parse(">=b+").expect("grade query");
    /// assert_eq!(query.comparison, Comparison::AtLeast);
    /// assert_eq!(query.target, LetterGrade::BPlus);
    /// assert!(GradeQuery::parse("eece 230").is_none());
    /// ```
    #[must_use]
    pub fn parse(query: &str) -> Option<Self> {
        let captures = grade_query_regex().captures(query)?;
        let comparison = match captures.get(1).map(|op| op.as_str()) {
            Some(">") => Comparison::Better,
            Some(">=") => Comparison::AtLeast,
            Some("<") => Comparison::Worse,
            Some("<=") => Comparison::AtMost,
            _ => Comparison::Exact,
        };
        let target = captures.get(2)?.as_str().to_uppercase().parse().ok()?;
        Some(Self { comparison, target })
    }

    /// `true` when `grade` satisfies the query.
    ///
    /// Ordered comparisons use [`crate::GRADE_ORDER`]; a pass has no rank and
    /// only ever matches an exact query for itself.
    #[must_use]
    pub fn matches(&self, grade: LetterGrade) -> bool {
        if self.comparison == Comparison::Exact {
            return grade == self.target;
        }
        let (Some(course), Some(target)) = (grade.rank(), self.target.rank()) else {
            return false;
        };
        match self.comparison {
            Comparison::Better => course < target,
            Comparison::AtLeast => course <= target,
            Comparison::Worse => course > target,
            Comparison::AtMost => course >= target,
            Comparison::Exact => course == target,
        }
    }
}
