//! Scenario report: best participants and course averages.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::aggregate::{average_grade_for_lecturers, average_grade_for_students};
use crate::config::GradebookConfig;
use crate::error::ValidationError;
use crate::grading::compare;
use crate::model::{Lecturer, Student};
use crate::scenario::Cohort;

/// Outcome of a scenario run in reportable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// The better student, or both when their averages tie.
    pub best_students: Vec<Student>,
    /// The better lecturer, or both when their averages tie.
    pub best_lecturers: Vec<Lecturer>,
    /// Course the averages below refer to.
    pub course: String,
    /// Mean lecture rating for `course` across lecturers.
    pub lecture_average: f64,
    /// Mean homework grade for `course` across students.
    pub homework_average: f64,
}

impl ScenarioReport {
    pub fn build(cohort: &Cohort, config: &GradebookConfig) -> Result<Self, ValidationError> {
        let (sf, sb) = (&cohort.student_frontend, &cohort.student_backend);
        let best_students = match compare(sb, sf)? {
            Ordering::Equal => vec![sf.clone(), sb.clone()],
            Ordering::Greater => vec![sb.clone()],
            Ordering::Less => vec![sf.clone()],
        };

        let (lf, lb) = (&cohort.lecturer_frontend, &cohort.lecturer_backend);
        let best_lecturers = match compare(lb, lf)? {
            Ordering::Equal => vec![lf.clone(), lb.clone()],
            Ordering::Less => vec![lf.clone()],
            Ordering::Greater => vec![lb.clone()],
        };

        let participants = cohort.participants();
        let course = config.report_course.as_str();
        let lecture_average =
            average_grade_for_lecturers(&participants, course, config.lecturer_missing_grades)?;
        let homework_average =
            average_grade_for_students(&participants, course, config.student_missing_grades)?;

        Ok(Self {
            best_students,
            best_lecturers,
            course: course.to_string(),
            lecture_average,
            homework_average,
        })
    }

    /// Human-readable report, blocks separated by a dash rule.
    pub fn render_text(&self, rule_width: usize) -> String {
        let rule = "-".repeat(rule_width);
        let mut out = String::new();

        out.push_str(&ranking_block("student", &self.best_students));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&ranking_block("lecturer", &self.best_lecturers));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "Average lecture grade for course {}: {:.2}\n",
            self.course, self.lecture_average
        ));
        out.push_str(&format!(
            "Average homework grade for course {}: {:.2}\n",
            self.course, self.homework_average
        ));
        out
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }
}

fn ranking_block<T: std::fmt::Display>(role: &str, best: &[T]) -> String {
    let blocks: Vec<String> = best.iter().map(ToString::to_string).collect();
    let heading = if blocks.len() > 1 {
        format!("Best {role}s:")
    } else {
        format!("Best {role}:")
    };
    format!("{heading}\n{}", blocks.join("\n\n"))
}
