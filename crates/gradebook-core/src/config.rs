//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::aggregate::MissingGradePolicy;

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Seed for the random source. `None` draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Course used for the aggregate lines at the end of the report.
    #[serde(default = "default_report_course")]
    pub report_course: String,
    /// Width of the dash rule between report blocks.
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
    /// How students without grades for the report course are averaged.
    #[serde(default = "default_student_policy")]
    pub student_missing_grades: MissingGradePolicy,
    /// How lecturers without ratings for the report course are averaged.
    #[serde(default = "default_lecturer_policy")]
    pub lecturer_missing_grades: MissingGradePolicy,
}

fn default_report_course() -> String {
    "GIT".to_string()
}
fn default_rule_width() -> usize {
    40
}
fn default_student_policy() -> MissingGradePolicy {
    MissingGradePolicy::Reject
}
fn default_lecturer_policy() -> MissingGradePolicy {
    MissingGradePolicy::Zero
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            seed: None,
            report_course: default_report_course(),
            rule_width: default_rule_width(),
            student_missing_grades: default_student_policy(),
            lecturer_missing_grades: default_lecturer_policy(),
        }
    }
}

/// Load config from an explicit path, or from `gradebook.toml` in the current
/// directory when present, falling back to defaults.
///
/// `GRADEBOOK_SEED` overrides the seed when it parses as an integer.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("gradebook.toml");
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config(&path)?,
        None => GradebookConfig::default(),
    };

    if let Some(seed) = std::env::var("GRADEBOOK_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
    {
        config.seed = Some(seed);
    }

    Ok(config)
}

fn parse_config(path: &Path) -> Result<GradebookConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config: {}", path.display()))
}
