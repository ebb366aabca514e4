//! Letter grades and their grade-point mapping.

use std::fmt;
use std::str::FromStr;

use crate::error::TranscriptError;

/// Letter grade shown for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    /// 4.3 points.
    APlus,
    /// 4.0 points.
    A,
    /// 3.7 points.
    AMinus,
    /// 3.3 points.
    BPlus,
    /// 3.0 points.
    B,
    /// 2.7 points.
    BMinus,
    /// 2.3 points.
    CPlus,
    /// 2.0 points.
    C,
    /// 1.7 points.
    CMinus,
    /// 1.3 points.
    DPlus,
    /// 1.0 points.
    D,
    /// Fail: 0.0 points, graded or pass/fail.
    F,
    /// Withdrawn.
    W,
    /// No grade recorded yet.
    NotComplete,
    /// Pass in a pass/fail course.
    Pass,
}

/// Ranking of letter grades from best to worst.
///
/// [`LetterGrade::Pass`] is deliberately absent: a pass carries no rank.
pub const GRADE_ORDER: [LetterGrade; 14] = [
    LetterGrade::APlus,
    LetterGrade::A,
    LetterGrade::AMinus,
    LetterGrade::BPlus,
    LetterGrade::B,
    LetterGrade::BMinus,
    LetterGrade::CPlus,
    LetterGrade::C,
    LetterGrade::CMinus,
    LetterGrade::DPlus,
    LetterGrade::D,
    LetterGrade::F,
    LetterGrade::W,
    LetterGrade::NotComplete,
];

const GRADED_POINTS: [(f64, LetterGrade); 12] = [
    (4.3, LetterGrade::APlus),
    (4.0, LetterGrade::A),
    (3.7, LetterGrade::AMinus),
    (3.3, LetterGrade::BPlus),
    (3.0, LetterGrade::B),
    (2.7, LetterGrade::BMinus),
    (2.3, LetterGrade::CPlus),
    (2.0, LetterGrade::C),
    (1.7, LetterGrade::CMinus),
    (1.3, LetterGrade::DPlus),
    (1.0, LetterGrade::D),
    (0.0, LetterGrade::F),
];

impl LetterGrade {
    /// Map recorded grade points to a letter grade.
    ///
    /// Graded courses use the A+ to F scale and fall back to
    /// [`LetterGrade::NotComplete`] for points off the scale. Pass/fail
    /// courses record `1` for a pass, `0` for a fail, and `-1` for a
    /// withdrawal. A missing grade is always [`LetterGrade::NotComplete`].
    ///
    /// # Examples
    ///
    /// ```
    /// use transcript::LetterGrade;
    ///
    /// assert_eq!(LetterGrade::from_points(Some(3.7), true), LetterGrade::AMinus);
    /// assert_eq!(LetterGrade::from_points(Some(1.0), false), LetterGrade::Pass);
    /// assert_eq!(LetterGrade::from_points(None, true), LetterGrade::NotComplete);
    /// ```
    #[must_use]
    pub fn from_points(points: Option<f64>, graded: bool) -> Self {
        let Some(recorded) = points else {
            return Self::NotComplete;
        };
        if graded {
            return GRADED_POINTS
                .iter()
                .find(|(scale, _)| same_points(*scale, recorded))
                .map_or(Self::NotComplete, |(_, grade)| *grade);
        }
        if same_points(recorded, 1.0) {
            Self::Pass
        } else if same_points(recorded, 0.0) {
            Self::F
        } else if same_points(recorded, -1.0) {
            Self::W
        } else {
            Self::NotComplete
        }
    }

    /// Position in [`GRADE_ORDER`]; lower is better. `None` for a pass.
    #[must_use]
    pub fn rank(self) -> Option<usize> {
        GRADE_ORDER.iter().position(|grade| *grade == self)
    }

    /// Display label, for example `"B+"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
            Self::W => "W",
            Self::NotComplete => "NC",
            Self::Pass => "P",
        }
    }
}

#[expect(
    clippy::float_cmp,
    reason = "grade points are recorded verbatim from a fixed scale"
)]
const fn same_points(left: f64, right: f64) -> bool {
    left == right
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterGrade {
    type Err = TranscriptError;

    /// Parse a display label; matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GRADE_ORDER
            .into_iter()
            .chain([Self::Pass])
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| TranscriptError::UnknownLetterGrade {
                value: s.to_owned(),
            })
    }
}
