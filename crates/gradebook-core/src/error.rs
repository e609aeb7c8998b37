//! Validation error type.
//!
//! Every failed rating, comparison or aggregate in the gradebook surfaces as a
//! [`ValidationError`]. Nothing is recovered locally; callers propagate with `?`.

use thiserror::Error;

/// Errors raised when an operation is attempted against the wrong participant
/// or outside of a shared course.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A student tried to rate someone who does not give lectures.
    #[error("students can only rate lecturers")]
    NotALecturer,

    /// A reviewer tried to grade someone who is not a student.
    #[error("homework can only be graded for students")]
    NotAStudent,

    /// The rater and the rated party are not both attached to the course.
    #[error("student or mentor is not attached to course {course:?}")]
    CourseNotShared { course: String },

    /// One side of a comparison has no grade record.
    #[error("cannot compare different types")]
    IncomparableTypes,

    /// A participant has no grades for the course and the policy rejects that.
    #[error("participant has no grades for course {course:?}")]
    MissingGrades { course: String },

    /// An aggregate was requested over a group with nobody to average.
    #[error("no participants to average for course {course:?}")]
    EmptyGroup { course: String },
}

impl ValidationError {
    pub(crate) fn course_not_shared(course: &str) -> Self {
        ValidationError::CourseNotShared {
            course: course.to_string(),
        }
    }
}
