//! Letter grades, term codes, and course search for AUB transcripts.
//!
//! This crate holds the presentation rules a transcript view applies to the
//! course rows returned by the backend. It is independent of the backend
//! record types so it can be reused by any client of the API.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Formatting registrar term codes such as `202310` as `Fall 2023`
//! - Mapping grade points to letter grades for graded and pass/fail courses
//! - Parsing grade queries such as `>=B+`
//! - Filtering, sorting, and grouping courses from a search box query
//!
//! # Example
//!
//! ```
//! use transcript::{CourseEntry, FilterOptions, FilteredCourses, TermCode, TermSummary, filter_courses};
//!
//! let term = TermSummary {
//!     name: "Fall 2023".to_owned(),
//!     gpa: 3.7,
//!     credits: 3,
//!     courses: vec![CourseEntry {
//!         id: "eece-230-fall".to_owned(),
//!         subject: "EECE".to_owned(),
//!         course_code: "230".to_owned(),
//!         term: TermCode::new(202_310),
//!         credits: 3,
//!         grade: Some(3.7),
//!         graded: true,
//!     }],
//! };
//!
//! let FilteredCourses::Flat(courses) = filter_courses(&[term], ">=B", &FilterOptions::default())
//! else {
//!     panic!("no grouping requested");
//! };
//! assert_eq!(courses.len(), 1);
//! ```

mod error;
mod filter;
mod grade;
mod query;
mod term;

pub use error::TranscriptError;
pub use filter::{
    CourseEntry, CourseGroup, FilterOptions, FilteredCourses, GradeSort, Grouping, TermSummary,
    filter_courses,
};
pub use grade::{GRADE_ORDER, LetterGrade};
pub use query::{Comparison, GradeQuery};
pub use term::{Semester, TermCode, format_term_name};
