//! Domain records and their format validators.
//!
//! Purpose: Define the course, term, and user records exchanged with the
//! hosted database. Records are immutable once built and can only be built
//! through constructors that run the validators in [`format`], so holding a
//! record means holding valid data. Serialisation contracts (serde) are
//! documented on each type.
//!
//! Public surface:
//! - FormatError — the single validation error raised by constructors.
//! - UuidString / InstitutionalEmail — validated string value objects.
//! - Course, Term, User — table records.

pub mod course;
pub mod format;
pub mod term;
pub mod user;

pub use self::course::Course;
pub use self::format::{
    ALLOWED_EMAIL_DOMAINS, FormatError, InstitutionalEmail, UuidString,
    validate_institutional_email, validate_uuid,
};
pub use self::term::Term;
pub use self::user::{User, UserFields};
