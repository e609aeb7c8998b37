pub mod people;
pub mod roster;
pub mod run;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use gradebook_core::aggregate::MissingGradePolicy;
use gradebook_core::config::{load_config_from, GradebookConfig};
use gradebook_core::generator::PersonGenerator;
use gradebook_core::scenario::{Outcome, Scenario};

/// Options shared by every command that runs the scenario.
#[derive(Debug, Args)]
pub struct ScenarioArgs {
    /// Seed for the random source (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Students without grades for the report course: zero, skip, reject
    #[arg(long)]
    pub student_missing_grades: Option<MissingGradePolicy>,

    /// Lecturers without ratings for the report course: zero, skip, reject
    #[arg(long)]
    pub lecturer_missing_grades: Option<MissingGradePolicy>,
}

/// Load config, apply CLI overrides and run the scenario.
pub(crate) fn run_scenario(args: ScenarioArgs) -> Result<(GradebookConfig, Outcome)> {
    let mut config = load_config_from(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(policy) = args.student_missing_grades {
        config.student_missing_grades = policy;
    }
    if let Some(policy) = args.lecturer_missing_grades {
        config.lecturer_missing_grades = policy;
    }
    tracing::debug!(
        students = %config.student_missing_grades,
        lecturers = %config.lecturer_missing_grades,
        "missing-grade policies"
    );

    let mut generator = generator_for(config.seed);
    let outcome = Scenario::new(config.clone()).run(&mut generator)?;
    Ok((config, outcome))
}

pub(crate) fn generator_for(seed: Option<u64>) -> PersonGenerator {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded generator");
            PersonGenerator::seeded(seed)
        }
        None => PersonGenerator::from_os_rng(),
    }
}
