//! Course search, sorting, and grouping for transcript views.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grade::LetterGrade;
use crate::query::GradeQuery;
use crate::term::TermCode;

/// Course row as returned by the transcript API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Stable key of the course row.
    pub id: String,
    /// Subject prefix, for example `EECE`.
    pub subject: String,
    /// Course number within the subject, for example `230`.
    pub course_code: String,
    /// Term the course was taken in.
    pub term: TermCode,
    /// Credit hours.
    pub credits: u32,
    /// Recorded grade points, if any.
    pub grade: Option<f64>,
    /// `false` for pass/fail courses.
    pub graded: bool,
}

impl CourseEntry {
    /// Letter grade derived from the recorded points.
    #[must_use]
    pub fn letter_grade(&self) -> LetterGrade {
        LetterGrade::from_points(self.grade, self.graded)
    }

    /// `SUBJECT-CODE` label, for example `EECE-230`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}-{}", self.subject, self.course_code)
    }
}

/// One term of a transcript with its courses in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSummary {
    /// Term label.
    pub name: String,
    /// Term grade point average.
    pub gpa: f64,
    /// Credits earned in the term.
    pub credits: u32,
    /// Courses taken in the term.
    pub courses: Vec<CourseEntry>,
}

/// Grade ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeSort {
    /// Lowest grade points first.
    Ascending,
    /// Highest grade points first.
    Descending,
}

/// Grouping applied after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Group under the formatted term name.
    Term,
    /// Group under the subject prefix.
    Subject,
}

/// Post-processing requested alongside a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Optional grade ordering.
    pub sort: Option<GradeSort>,
    /// Optional grouping.
    pub group: Option<Grouping>,
}

impl FilterOptions {
    /// Build options from the flag names used by the transcript view.
    ///
    /// Recognised flags are `gradeAscending`, `gradeDescending`, `term`, and
    /// `subject`; others are ignored. `gradeAscending` wins over
    /// `gradeDescending` and `term` wins over `subject`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transcript::{FilterOptions, GradeSort, Grouping};
    ///
    /// let options = FilterOptions::from_flags(["subject", "gradeDescending"]);
    /// assert_eq!(options.sort, Some(GradeSort::Descending));
    /// assert_eq!(options.group, Some(Grouping::Subject));
    /// ```
    #[must_use]
    pub fn from_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected: Vec<S> = flags.into_iter().collect();
        let has = |name: &str| selected.iter().any(|flag| flag.as_ref() == name);

        let sort = if has("gradeAscending") {
            Some(GradeSort::Ascending)
        } else if has("gradeDescending") {
            Some(GradeSort::Descending)
        } else {
            None
        };
        let group = if has("term") {
            Some(Grouping::Term)
        } else if has("subject") {
            Some(Grouping::Subject)
        } else {
            None
        };
        Self { sort, group }
    }
}

/// Courses sharing a group label.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseGroup {
    /// Term name or subject.
    pub label: String,
    /// Courses in the group, in result order.
    pub courses: Vec<CourseEntry>,
}

/// Result of [`filter_courses`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilteredCourses {
    /// Matching courses without grouping.
    Flat(Vec<CourseEntry>),
    /// Matching courses grouped in order of first appearance.
    Grouped(Vec<CourseGroup>),
}

impl FilteredCourses {
    /// Total number of courses across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(courses) => courses.len(),
            Self::Grouped(groups) => groups.iter().map(|group| group.courses.len()).sum(),
        }
    }

    /// `true` when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static COURSE_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn course_name_regex() -> &'static Regex {
    COURSE_NAME_RE.get_or_init(|| {
        // Subject letters followed by the course number, spaces optional.
        let pattern = r"(?i)^([a-z]+)\s*(\d+)$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("course name regex failed to compile: {error}"))
    })
}

enum Matcher {
    Grade(GradeQuery),
    FullName { subject: String, code: String },
    Text(String),
}

impl Matcher {
    fn new(query: &str) -> Self {
        let normalized = query.trim().to_lowercase();
        if let Some(grade) = GradeQuery::parse(&normalized) {
            return Self::Grade(grade);
        }
        if let Some(captures) = course_name_regex().captures(&normalized) {
            let part = |index| {
                captures
                    .get(index)
                    .map_or_else(String::new, |found| found.as_str().to_owned())
            };
            return Self::FullName {
                subject: part(1),
                code: part(2),
            };
        }
        Self::Text(normalized)
    }

    fn matches(&self, course: &CourseEntry) -> bool {
        let subject = course.subject.to_lowercase();
        let code = course.course_code.to_lowercase();
        match self {
            Self::Grade(query) => query.matches(course.letter_grade()),
            Self::FullName {
                subject: wanted_subject,
                code: wanted_code,
            } => subject == *wanted_subject && code == *wanted_code,
            Self::Text(text) => {
                subject == *text
                    || code == *text
                    || course.display_name().to_lowercase().contains(text.as_str())
            }
        }
    }
}

/// Search courses across `terms` and apply the requested post-processing.
///
/// The query is trimmed and lower-cased, then interpreted as, in order:
///
/// 1. a grade query such as `>=B+` (see [`GradeQuery`]);
/// 2. a full course name such as `eece 230` or `eece230`, matched exactly
///    on subject and number;
/// 3. free text, matching a course whose subject or number equals the text
///    or whose `SUBJECT-CODE` label contains it.
///
/// An empty query matches every course. Sorting places courses without
/// recorded points last and keeps the original order among equal grades.
#[must_use]
pub fn filter_courses(
    terms: &[TermSummary],
    query: &str,
    options: &FilterOptions,
) -> FilteredCourses {
    let matcher = Matcher::new(query);
    let mut courses: Vec<CourseEntry> = terms
        .iter()
        .flat_map(|term| term.courses.iter())
        .filter(|course| matcher.matches(course))
        .cloned()
        .collect();

    if let Some(sort) = options.sort {
        courses.sort_by(|left, right| compare_grades(left.grade, right.grade, sort));
    }

    match options.group {
        None => FilteredCourses::Flat(courses),
        Some(grouping) => FilteredCourses::Grouped(group_courses(courses, grouping)),
    }
}

fn compare_grades(lhs: Option<f64>, rhs: Option<f64>, sort: GradeSort) -> Ordering {
    match (lhs, rhs) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => match sort {
            GradeSort::Ascending => left.total_cmp(&right),
            GradeSort::Descending => right.total_cmp(&left),
        },
    }
}

fn group_courses(courses: Vec<CourseEntry>, grouping: Grouping) -> Vec<CourseGroup> {
    let mut groups: Vec<CourseGroup> = Vec::new();
    for course in courses {
        let label = match grouping {
            Grouping::Term => course.term.to_string(),
            Grouping::Subject => course.subject.clone(),
        };
        if let Some(group) = groups.iter_mut().find(|group| group.label == label) {
            group.courses.push(course);
            continue;
        }
        groups.push(CourseGroup {
            label,
            courses: vec![course],
        });
    }
    groups
}
