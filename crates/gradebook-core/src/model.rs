//! Course participants.
//!
//! Roles are composed rather than inherited: a [`Student`] embeds a [`Person`],
//! a [`Lecturer`] or [`Reviewer`] embeds a [`Mentor`], and the two roles that
//! receive grades own a [`GradeRecord`]. Call sites that accept "any
//! participant" take a [`ParticipantRef`] or [`ParticipantMut`] and match on the
//! role they need.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::grading::{format_average, GradeRecord, Gradeable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Identity shared by every participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl Person {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, gender: Option<Gender>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            gender,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nSurname: {}", self.name, self.surname)
    }
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// A person taking courses. Receives homework grades from reviewers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub courses_in_progress: Vec<String>,
    #[serde(default)]
    pub finished_courses: Vec<String>,
    /// Homework grades received from reviewers.
    #[serde(default)]
    pub grades: GradeRecord,
}

impl Student {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            courses_in_progress: Vec::new(),
            finished_courses: Vec::new(),
            grades: GradeRecord::new(),
        }
    }

    /// Start a course. No-op if it is already in progress.
    pub fn enroll(&mut self, course: &str) {
        if !self.is_in_progress(course) {
            self.courses_in_progress.push(course.to_string());
        }
    }

    /// Move `course` from in-progress to finished.
    pub fn finish_course(&mut self, course: &str) {
        self.courses_in_progress.retain(|c| c != course);
        if !self.finished_courses.iter().any(|c| c == course) {
            self.finished_courses.push(course.to_string());
        }
        debug!(student = %self.person.surname, course, "course finished");
    }

    pub fn is_in_progress(&self, course: &str) -> bool {
        self.courses_in_progress.iter().any(|c| c == course)
    }

    /// Rate a lecture given by `lecturer` for `course`.
    ///
    /// Both parties must be attached to the course. The grade is recorded on
    /// the lecturer, not on the student.
    pub fn rate_lecture<'a>(
        &self,
        lecturer: impl Into<ParticipantMut<'a>>,
        course: &str,
        grade: u8,
    ) -> Result<(), ValidationError> {
        let target: ParticipantMut<'a> = lecturer.into();
        let ParticipantMut::Lecturer(lecturer) = target else {
            return Err(ValidationError::NotALecturer);
        };
        if !self.is_in_progress(course) || !lecturer.mentor.is_attached(course) {
            return Err(ValidationError::course_not_shared(course));
        }
        lecturer.grades.add(course, grade);
        debug!(
            student = %self.person.surname,
            lecturer = %lecturer.mentor.person.surname,
            course,
            grade,
            "lecture rated"
        );
        Ok(())
    }
}

impl Gradeable for Student {
    fn grades(&self) -> &GradeRecord {
        &self.grades
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.person)?;
        writeln!(
            f,
            "Average homework grade: {}",
            format_average(self.average_grade(None))
        )?;
        writeln!(
            f,
            "Courses in progress: {}",
            self.courses_in_progress.join(", ")
        )?;
        write!(f, "Finished courses: {}", self.finished_courses.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Mentors
// ---------------------------------------------------------------------------

/// Course staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mentor {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub courses_attached: Vec<String>,
}

impl Mentor {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            courses_attached: Vec::new(),
        }
    }

    /// Attach to a course. No-op if already attached.
    pub fn attach(&mut self, course: &str) {
        if !self.is_attached(course) {
            self.courses_attached.push(course.to_string());
        }
    }

    pub fn is_attached(&self, course: &str) -> bool {
        self.courses_attached.iter().any(|c| c == course)
    }
}

impl fmt::Display for Mentor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}

/// A mentor who gives lectures. Receives lecture ratings from students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    #[serde(flatten)]
    pub mentor: Mentor,
    /// Lecture ratings received from students.
    #[serde(default)]
    pub grades: GradeRecord,
}

impl Lecturer {
    pub fn new(person: Person) -> Self {
        Self {
            mentor: Mentor::new(person),
            grades: GradeRecord::new(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.mentor.person
    }
}

impl Gradeable for Lecturer {
    fn grades(&self) -> &GradeRecord {
        &self.grades
    }
}

impl fmt::Display for Lecturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.mentor.person)?;
        write!(
            f,
            "Average lecture grade: {}",
            format_average(self.average_grade(None))
        )
    }
}

/// A mentor who checks homework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reviewer {
    #[serde(flatten)]
    pub mentor: Mentor,
}

impl Reviewer {
    pub fn new(person: Person) -> Self {
        Self {
            mentor: Mentor::new(person),
        }
    }

    pub fn person(&self) -> &Person {
        &self.mentor.person
    }

    /// Grade `student`'s homework for `course`.
    ///
    /// The reviewer must be attached to the course and the student must have
    /// it in progress. The grade is recorded on the student.
    pub fn rate_homework<'a>(
        &self,
        student: impl Into<ParticipantMut<'a>>,
        course: &str,
        grade: u8,
    ) -> Result<(), ValidationError> {
        let target: ParticipantMut<'a> = student.into();
        let ParticipantMut::Student(student) = target else {
            return Err(ValidationError::NotAStudent);
        };
        if !self.mentor.is_attached(course) || !student.is_in_progress(course) {
            return Err(ValidationError::course_not_shared(course));
        }
        student.grades.add(course, grade);
        debug!(
            reviewer = %self.mentor.person.surname,
            student = %student.person.surname,
            course,
            grade,
            "homework graded"
        );
        Ok(())
    }
}

impl fmt::Display for Reviewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mentor, f)
    }
}

// ---------------------------------------------------------------------------
// Role-erased handles
// ---------------------------------------------------------------------------

/// Participant role, used for run-time capability checks and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Person,
    Student,
    Mentor,
    Lecturer,
    Reviewer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Person => write!(f, "person"),
            Role::Student => write!(f, "student"),
            Role::Mentor => write!(f, "mentor"),
            Role::Lecturer => write!(f, "lecturer"),
            Role::Reviewer => write!(f, "reviewer"),
        }
    }
}

/// Shared borrow of a participant of any role.
#[derive(Debug, Clone, Copy)]
pub enum ParticipantRef<'a> {
    Person(&'a Person),
    Student(&'a Student),
    Mentor(&'a Mentor),
    Lecturer(&'a Lecturer),
    Reviewer(&'a Reviewer),
}

impl<'a> ParticipantRef<'a> {
    pub fn role(&self) -> Role {
        match self {
            ParticipantRef::Person(_) => Role::Person,
            ParticipantRef::Student(_) => Role::Student,
            ParticipantRef::Mentor(_) => Role::Mentor,
            ParticipantRef::Lecturer(_) => Role::Lecturer,
            ParticipantRef::Reviewer(_) => Role::Reviewer,
        }
    }

    pub fn person(&self) -> &'a Person {
        match *self {
            ParticipantRef::Person(p) => p,
            ParticipantRef::Student(s) => &s.person,
            ParticipantRef::Mentor(m) => &m.person,
            ParticipantRef::Lecturer(l) => &l.mentor.person,
            ParticipantRef::Reviewer(r) => &r.mentor.person,
        }
    }

    /// The grading capability, if this role receives grades.
    pub fn as_gradeable(&self) -> Option<&'a dyn Gradeable> {
        match *self {
            ParticipantRef::Student(s) => Some(s),
            ParticipantRef::Lecturer(l) => Some(l),
            _ => None,
        }
    }

    /// Courses the participant is enrolled in or attached to.
    pub fn courses(&self) -> &'a [String] {
        match *self {
            ParticipantRef::Person(_) => &[],
            ParticipantRef::Student(s) => &s.courses_in_progress,
            ParticipantRef::Mentor(m) => &m.courses_attached,
            ParticipantRef::Lecturer(l) => &l.mentor.courses_attached,
            ParticipantRef::Reviewer(r) => &r.mentor.courses_attached,
        }
    }
}

/// Exclusive borrow of a participant of any role; the target of a rating.
#[derive(Debug)]
pub enum ParticipantMut<'a> {
    Person(&'a mut Person),
    Student(&'a mut Student),
    Mentor(&'a mut Mentor),
    Lecturer(&'a mut Lecturer),
    Reviewer(&'a mut Reviewer),
}

macro_rules! participant_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for ParticipantRef<'a> {
                fn from(value: &'a $ty) -> Self {
                    ParticipantRef::$variant(value)
                }
            }

            impl<'a> From<&'a mut $ty> for ParticipantMut<'a> {
                fn from(value: &'a mut $ty) -> Self {
                    ParticipantMut::$variant(value)
                }
            }
        )*
    };
}

participant_from! {
    Person => Person,
    Student => Student,
    Mentor => Mentor,
    Lecturer => Lecturer,
    Reviewer => Reviewer,
}
