//! Course-level averages across a group of participants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ValidationError;
use crate::grading::Gradeable;
use crate::model::ParticipantRef;

/// What to do with a participant who has no grades for the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingGradePolicy {
    /// Count the participant with an average of 0.
    Zero,
    /// Leave the participant out of the average.
    Skip,
    /// Fail with [`ValidationError::MissingGrades`].
    Reject,
}

impl fmt::Display for MissingGradePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingGradePolicy::Zero => write!(f, "zero"),
            MissingGradePolicy::Skip => write!(f, "skip"),
            MissingGradePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for MissingGradePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(MissingGradePolicy::Zero),
            "skip" => Ok(MissingGradePolicy::Skip),
            "reject" => Ok(MissingGradePolicy::Reject),
            other => Err(format!("unknown missing-grade policy: {other}")),
        }
    }
}

/// Mean homework grade for `course` over the students in `participants`.
///
/// Participants of other roles are ignored.
pub fn average_grade_for_students(
    participants: &[ParticipantRef<'_>],
    course: &str,
    policy: MissingGradePolicy,
) -> Result<f64, ValidationError> {
    let students = participants.iter().filter_map(|p| match p {
        ParticipantRef::Student(s) => Some(*s as &dyn Gradeable),
        _ => None,
    });
    average_over(students, course, policy)
}

/// Mean lecture rating for `course` over the lecturers in `participants`.
///
/// Participants of other roles are ignored.
pub fn average_grade_for_lecturers(
    participants: &[ParticipantRef<'_>],
    course: &str,
    policy: MissingGradePolicy,
) -> Result<f64, ValidationError> {
    let lecturers = participants.iter().filter_map(|p| match p {
        ParticipantRef::Lecturer(l) => Some(*l as &dyn Gradeable),
        _ => None,
    });
    average_over(lecturers, course, policy)
}

fn average_over<'a>(
    group: impl Iterator<Item = &'a dyn Gradeable>,
    course: &str,
    policy: MissingGradePolicy,
) -> Result<f64, ValidationError> {
    let mut averages = Vec::new();
    for member in group {
        match (member.average_grade(Some(course)), policy) {
            (Some(avg), _) => averages.push(avg),
            (None, MissingGradePolicy::Zero) => {
                warn!(course, "participant without grades counted as 0");
                averages.push(0.0);
            }
            (None, MissingGradePolicy::Skip) => {}
            (None, MissingGradePolicy::Reject) => {
                return Err(ValidationError::MissingGrades {
                    course: course.to_string(),
                });
            }
        }
    }

    if averages.is_empty() {
        return Err(ValidationError::EmptyGroup {
            course: course.to_string(),
        });
    }
    Ok(averages.iter().sum::<f64>() / averages.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lecturer, Person, Reviewer, Student};

    fn lecturer(grades: &[(&str, u8)]) -> Lecturer {
        let mut l = Lecturer::new(Person::new("Nikolai", "Parolev", None));
        for (course, grade) in grades {
            l.grades.add(course, *grade);
        }
        l
    }

    fn student(grades: &[(&str, u8)]) -> Student {
        let mut s = Student::new(Person::new("Lika", "Vebova", None));
        for (course, grade) in grades {
            s.grades.add(course, *grade);
        }
        s
    }

    #[test]
    fn lecturers_without_grades_count_as_zero() {
        let l1 = lecturer(&[("GIT", 8), ("GIT", 6), ("Python", 10)]);
        let l2 = lecturer(&[("HTML", 9)]);
        let group = [ParticipantRef::from(&l1), ParticipantRef::from(&l2)];

        let avg = average_grade_for_lecturers(&group, "GIT", MissingGradePolicy::Zero).unwrap();
        assert!((avg - 3.5).abs() < f64::EPSILON, "got {avg}");
    }

    #[test]
    fn skip_policy_drops_ungraded() {
        let l1 = lecturer(&[("GIT", 8)]);
        let l2 = lecturer(&[]);
        let group = [ParticipantRef::from(&l1), ParticipantRef::from(&l2)];

        let avg = average_grade_for_lecturers(&group, "GIT", MissingGradePolicy::Skip).unwrap();
        assert!((avg - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reject_policy_fails_on_ungraded_student() {
        let s1 = student(&[("GIT", 7)]);
        let s2 = student(&[("CSS", 7)]);
        let group = [ParticipantRef::from(&s1), ParticipantRef::from(&s2)];

        assert_eq!(
            average_grade_for_students(&group, "GIT", MissingGradePolicy::Reject),
            Err(ValidationError::MissingGrades {
                course: "GIT".into()
            })
        );
    }

    #[test]
    fn students_average_uses_course_average() {
        let s1 = student(&[("GIT", 10), ("GIT", 8), ("CSS", 1)]);
        let s2 = student(&[("GIT", 6)]);
        let group = [ParticipantRef::from(&s1), ParticipantRef::from(&s2)];

        let avg = average_grade_for_students(&group, "GIT", MissingGradePolicy::Reject).unwrap();
        assert!((avg - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn other_roles_are_ignored() {
        let s = student(&[("GIT", 4)]);
        let l = lecturer(&[("GIT", 10)]);
        let r = Reviewer::new(Person::new("Viktor", "Ivanov", None));
        let group = [
            ParticipantRef::from(&s),
            ParticipantRef::from(&l),
            ParticipantRef::from(&r),
        ];

        let students =
            average_grade_for_students(&group, "GIT", MissingGradePolicy::Reject).unwrap();
        let lecturers =
            average_grade_for_lecturers(&group, "GIT", MissingGradePolicy::Reject).unwrap();
        assert!((students - 4.0).abs() < f64::EPSILON);
        assert!((lecturers - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_group_is_an_error() {
        assert!(matches!(
            average_grade_for_lecturers(&[], "GIT", MissingGradePolicy::Zero),
            Err(ValidationError::EmptyGroup { .. })
        ));
        let l = lecturer(&[]);
        assert!(matches!(
            average_grade_for_lecturers(
                &[ParticipantRef::from(&l)],
                "GIT",
                MissingGradePolicy::Skip
            ),
            Err(ValidationError::EmptyGroup { .. })
        ));
    }

    #[test]
    fn policy_parse_and_display() {
        assert_eq!("ZERO".parse::<MissingGradePolicy>().unwrap(), MissingGradePolicy::Zero);
        assert_eq!(MissingGradePolicy::Reject.to_string(), "reject");
        assert!("ignore".parse::<MissingGradePolicy>().is_err());
    }
}
