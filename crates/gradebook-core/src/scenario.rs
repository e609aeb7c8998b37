//! The scripted gradebook scenario.
//!
//! Two students, two reviewers and two lecturers split across a frontend and a
//! backend track. Students rate lectures, reviewers grade homework and courses
//! are finished along the way. The final state feeds [`ScenarioReport`].

use rand::Rng;
use tracing::info;

use crate::config::GradebookConfig;
use crate::error::ValidationError;
use crate::generator::PersonGenerator;
use crate::model::{Lecturer, ParticipantRef, Reviewer, Student};
use crate::report::ScenarioReport;

pub const FRONTEND_COURSES: &[&str] = &["HTML", "CSS", "Javascript", "GIT"];
pub const BACKEND_COURSES: &[&str] = &["Python", "SQL", "GIT"];

/// Everybody taking part in the scenario.
#[derive(Debug, Clone)]
pub struct Cohort {
    pub student_frontend: Student,
    pub student_backend: Student,
    pub reviewer_frontend: Reviewer,
    pub reviewer_backend: Reviewer,
    pub lecturer_frontend: Lecturer,
    pub lecturer_backend: Lecturer,
}

impl Cohort {
    /// Enroll students and hire staff for both tracks.
    pub fn enroll<R: Rng>(generator: &mut PersonGenerator<R>) -> Self {
        let mut student_frontend = Student::new(generator.next_person());
        let mut student_backend = Student::new(generator.next_person());
        for course in FRONTEND_COURSES {
            student_frontend.enroll(course);
        }
        for course in BACKEND_COURSES {
            student_backend.enroll(course);
        }

        let mut reviewer_frontend = Reviewer::new(generator.next_person());
        let mut reviewer_backend = Reviewer::new(generator.next_person());
        let mut lecturer_frontend = Lecturer::new(generator.next_person());
        let mut lecturer_backend = Lecturer::new(generator.next_person());
        for course in FRONTEND_COURSES {
            reviewer_frontend.mentor.attach(course);
            lecturer_frontend.mentor.attach(course);
        }
        for course in BACKEND_COURSES {
            reviewer_backend.mentor.attach(course);
            lecturer_backend.mentor.attach(course);
        }

        Self {
            student_frontend,
            student_backend,
            reviewer_frontend,
            reviewer_backend,
            lecturer_frontend,
            lecturer_backend,
        }
    }

    pub fn students(&self) -> [&Student; 2] {
        [&self.student_frontend, &self.student_backend]
    }

    pub fn lecturers(&self) -> [&Lecturer; 2] {
        [&self.lecturer_frontend, &self.lecturer_backend]
    }

    pub fn participants(&self) -> Vec<ParticipantRef<'_>> {
        vec![
            ParticipantRef::from(&self.student_frontend),
            ParticipantRef::from(&self.student_backend),
            ParticipantRef::from(&self.reviewer_frontend),
            ParticipantRef::from(&self.reviewer_backend),
            ParticipantRef::from(&self.lecturer_frontend),
            ParticipantRef::from(&self.lecturer_backend),
        ]
    }

    /// Students rate the lectures they attended.
    pub fn rate_lectures<R: Rng>(
        &mut self,
        generator: &mut PersonGenerator<R>,
    ) -> Result<(), ValidationError> {
        let front = &self.student_frontend;
        front.rate_lecture(&mut self.lecturer_frontend, "HTML", generator.grade())?;
        front.rate_lecture(&mut self.lecturer_frontend, "Javascript", generator.grade())?;
        front.rate_lecture(&mut self.lecturer_backend, "GIT", generator.grade())?;

        let back = &self.student_backend;
        back.rate_lecture(&mut self.lecturer_backend, "Python", generator.grade())?;
        back.rate_lecture(&mut self.lecturer_backend, "SQL", generator.grade())?;
        back.rate_lecture(&mut self.lecturer_frontend, "GIT", generator.grade())?;
        Ok(())
    }

    /// Reviewers grade homework; each course is finished once graded.
    pub fn grade_homework<R: Rng>(
        &mut self,
        generator: &mut PersonGenerator<R>,
    ) -> Result<(), ValidationError> {
        let front = &mut self.student_frontend;
        let back = &mut self.student_backend;
        let (rf, rb) = (&self.reviewer_frontend, &self.reviewer_backend);

        rf.rate_homework(&mut *front, "HTML", generator.grade())?;
        front.finish_course("HTML");
        rf.rate_homework(&mut *front, "Javascript", generator.grade())?;
        front.finish_course("Javascript");
        rf.rate_homework(&mut *front, "GIT", generator.grade())?;
        rb.rate_homework(&mut *front, "GIT", generator.grade())?;
        front.finish_course("GIT");

        rb.rate_homework(&mut *back, "Python", generator.grade())?;
        back.finish_course("Python");
        rb.rate_homework(&mut *back, "GIT", generator.grade())?;
        rf.rate_homework(&mut *back, "GIT", generator.grade())?;
        back.finish_course("GIT");
        Ok(())
    }
}

/// Runs the full script against a configuration.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    config: GradebookConfig,
}

/// Final cohort state and the report built from it.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub cohort: Cohort,
    pub report: ScenarioReport,
}

impl Scenario {
    pub fn new(config: GradebookConfig) -> Self {
        Self { config }
    }

    pub fn run<R: Rng>(
        &self,
        generator: &mut PersonGenerator<R>,
    ) -> Result<Outcome, ValidationError> {
        info!(course = %self.config.report_course, "starting gradebook scenario");

        let mut cohort = Cohort::enroll(generator);
        cohort.rate_lectures(generator)?;
        cohort.grade_homework(generator)?;

        let report = ScenarioReport::build(&cohort, &self.config)?;
        info!(
            lecture_average = report.lecture_average,
            homework_average = report.homework_average,
            "scenario complete"
        );
        Ok(Outcome { cohort, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::Gradeable;

    fn run(seed: u64) -> Outcome {
        Scenario::default()
            .run(&mut PersonGenerator::seeded(seed))
            .unwrap()
    }

    #[test]
    fn script_finishes_expected_courses() {
        let outcome = run(1);
        let cohort = &outcome.cohort;
        assert_eq!(
            cohort.student_frontend.finished_courses,
            vec!["HTML", "Javascript", "GIT"]
        );
        assert_eq!(cohort.student_frontend.courses_in_progress, vec!["CSS"]);
        assert_eq!(cohort.student_backend.finished_courses, vec!["Python", "GIT"]);
        assert_eq!(cohort.student_backend.courses_in_progress, vec!["SQL"]);
    }

    #[test]
    fn grades_land_on_the_rated_party() {
        let outcome = run(2);
        let cohort = &outcome.cohort;

        assert_eq!(cohort.student_frontend.grades.grades_for("GIT").map(<[u8]>::len), Some(2));
        assert_eq!(cohort.student_backend.grades.grades_for("GIT").map(<[u8]>::len), Some(2));
        assert!(cohort.student_backend.grades.grades_for("SQL").is_none());

        let front_courses: Vec<&str> = cohort.lecturer_frontend.grades.courses().collect();
        assert_eq!(front_courses, vec!["GIT", "HTML", "Javascript"]);
        let back_courses: Vec<&str> = cohort.lecturer_backend.grades.courses().collect();
        assert_eq!(back_courses, vec!["GIT", "Python", "SQL"]);
    }

    #[test]
    fn every_grade_is_in_range() {
        let outcome = run(3);
        for student in outcome.cohort.students() {
            for (_, grades) in student.grades().iter() {
                assert!(grades.iter().all(|g| (1..=10).contains(g)));
            }
        }
        for lecturer in outcome.cohort.lecturers() {
            assert!(lecturer.average_grade(None).is_some());
        }
    }

    #[test]
    fn same_seed_same_outcome() {
        let a = run(99);
        let b = run(99);
        assert_eq!(
            a.report.render_text(40),
            b.report.render_text(40),
        );
    }

    #[test]
    fn cohort_lists_all_participants() {
        let outcome = run(4);
        assert_eq!(outcome.cohort.participants().len(), 6);
    }
}
