//! The `gradebook roster` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::grading::{format_average, Gradeable};

use super::ScenarioArgs;

pub fn execute(args: ScenarioArgs) -> Result<()> {
    let (_, outcome) = super::run_scenario(args)?;

    let mut table = Table::new();
    table.set_header(vec!["Role", "Name", "Surname", "Gender", "Average", "Courses"]);

    for participant in outcome.cohort.participants() {
        let person = participant.person();
        let average = participant
            .as_gradeable()
            .map(|g| format_average(g.average_grade(None)))
            .unwrap_or_else(|| "-".to_string());
        let gender = person
            .gender
            .map(|g| g.to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(participant.role()),
            Cell::new(&person.name),
            Cell::new(&person.surname),
            Cell::new(gender),
            Cell::new(average),
            Cell::new(participant.courses().join(", ")),
        ]);
    }

    println!("{table}");
    Ok(())
}
