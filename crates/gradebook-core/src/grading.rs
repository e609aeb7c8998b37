//! Grade records and the shared grading capability.
//!
//! Students and lecturers both receive grades from the opposite role. Instead
//! of sharing a base type they each own a [`GradeRecord`] and implement
//! [`Gradeable`], which supplies averaging and comparison on top of it.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::ParticipantRef;

/// Grades received per course, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeRecord {
    courses: BTreeMap<String, Vec<u8>>,
}

impl GradeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a grade under `course`, creating the course entry if needed.
    pub fn add(&mut self, course: &str, grade: u8) {
        self.courses.entry(course.to_string()).or_default().push(grade);
    }

    /// Grades recorded for one course.
    pub fn grades_for(&self, course: &str) -> Option<&[u8]> {
        self.courses.get(course).map(Vec::as_slice)
    }

    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.courses
            .iter()
            .map(|(course, grades)| (course.as_str(), grades.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.courses.values().all(Vec::is_empty)
    }
}

impl<const N: usize> From<[(&str, Vec<u8>); N]> for GradeRecord {
    fn from(entries: [(&str, Vec<u8>); N]) -> Self {
        Self {
            courses: entries
                .into_iter()
                .map(|(course, grades)| (course.to_string(), grades))
                .collect(),
        }
    }
}

/// Anything that receives grades.
pub trait Gradeable {
    fn grades(&self) -> &GradeRecord;

    /// Mean of per-course means, rounded to one decimal place.
    ///
    /// With `Some(course)` only that course is considered. Returns `None` when
    /// no qualifying course has any grades.
    fn average_grade(&self, course: Option<&str>) -> Option<f64> {
        let means: Vec<f64> = self
            .grades()
            .iter()
            .filter(|(name, grades)| !grades.is_empty() && course.map_or(true, |c| c == *name))
            .map(|(_, grades)| {
                grades.iter().map(|&g| f64::from(g)).sum::<f64>() / grades.len() as f64
            })
            .collect();

        if means.is_empty() {
            return None;
        }
        Some(round_one_decimal(
            means.iter().sum::<f64>() / means.len() as f64,
        ))
    }

    /// Order by overall average. A side without grades ranks lowest.
    fn cmp_average(&self, other: &dyn Gradeable) -> Ordering {
        cmp_optional(self.average_grade(None), other.average_grade(None))
    }

    fn same_average(&self, other: &dyn Gradeable) -> bool {
        self.cmp_average(other) == Ordering::Equal
    }
}

/// Compare two participants by overall average.
///
/// Fails when either side does not receive grades.
pub fn compare<'a, 'b>(
    a: impl Into<ParticipantRef<'a>>,
    b: impl Into<ParticipantRef<'b>>,
) -> Result<Ordering, ValidationError> {
    let (a, b) = (a.into(), b.into());
    match (a.as_gradeable(), b.as_gradeable()) {
        (Some(a), Some(b)) => Ok(a.cmp_average(b)),
        _ => Err(ValidationError::IncomparableTypes),
    }
}

/// Render an average for reports, or a marker when there is none.
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{avg:.1}"),
        None => "no grades".to_string(),
    }
}

/// Round on the exact binary value with ties to even.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

fn cmp_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, Lecturer, Person, Student};

    fn student_with(grades: GradeRecord) -> Student {
        let mut student = Student::new(Person::new("Ivan", "Ivanov", Some(Gender::Male)));
        student.grades = grades;
        student
    }

    #[test]
    fn average_without_grades_is_none() {
        let student = student_with(GradeRecord::new());
        assert_eq!(student.average_grade(None), None);
        assert_eq!(student.average_grade(Some("GIT")), None);
    }

    #[test]
    fn average_is_mean_of_course_means() {
        let student = student_with(GradeRecord::from([("A", vec![8, 10]), ("B", vec![6])]));
        assert_eq!(student.average_grade(None), Some(7.5));
        assert_eq!(student.average_grade(Some("A")), Some(9.0));
        assert_eq!(student.average_grade(Some("B")), Some(6.0));
        assert_eq!(student.average_grade(Some("C")), None);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let student = student_with(GradeRecord::from([("A", vec![7, 8, 8])]));
        assert_eq!(student.average_grade(None), Some(7.7));
    }

    #[test]
    fn average_rounds_exact_ties_to_even() {
        // Course means 7.5 and 7.0 give exactly 7.25.
        let student = student_with(GradeRecord::from([("A", vec![7, 8]), ("B", vec![7])]));
        assert_eq!(student.average_grade(None), Some(7.2));

        // 8.75 ties upward to the even digit.
        let student = student_with(GradeRecord::from([("A", vec![9, 10]), ("B", vec![8])]));
        assert_eq!(student.average_grade(None), Some(8.8));
    }

    #[test]
    fn equal_averages_compare_equal() {
        let a = student_with(GradeRecord::from([("A", vec![8, 10])]));
        let b = student_with(GradeRecord::from([("B", vec![9])]));
        assert!(a.same_average(&b));
        assert_eq!(compare(&a, &b).unwrap(), Ordering::Equal);
    }

    #[test]
    fn higher_average_is_greater() {
        let a = student_with(GradeRecord::from([("A", vec![10])]));
        let mut lecturer = Lecturer::new(Person::new("Vika", "Vebova", Some(Gender::Female)));
        lecturer.grades.add("A", 4);

        assert_eq!(a.cmp_average(&lecturer), Ordering::Greater);
        assert_eq!(compare(&lecturer, &a).unwrap(), Ordering::Less);
    }

    #[test]
    fn missing_average_ranks_lowest() {
        let graded = student_with(GradeRecord::from([("A", vec![1])]));
        let empty = student_with(GradeRecord::new());
        assert_eq!(empty.cmp_average(&graded), Ordering::Less);
        assert!(empty.same_average(&student_with(GradeRecord::new())));
    }

    #[test]
    fn comparing_with_plain_person_fails() {
        let student = student_with(GradeRecord::from([("A", vec![5])]));
        let person = Person::new("Lika", "Stileva", Some(Gender::Female));
        assert_eq!(
            compare(&student, &person),
            Err(ValidationError::IncomparableTypes)
        );
    }

    #[test]
    fn format_average_marker() {
        assert_eq!(format_average(Some(9.0)), "9.0");
        assert_eq!(format_average(None), "no grades");
    }
}
