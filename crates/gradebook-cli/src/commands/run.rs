//! The `gradebook run` command.

use anyhow::Result;

use super::ScenarioArgs;

pub fn execute(args: ScenarioArgs, format: String) -> Result<()> {
    if !matches!(format.as_str(), "text" | "json") {
        anyhow::bail!("unknown format: {format} (expected text or json)");
    }

    let (config, outcome) = super::run_scenario(args)?;

    match format.as_str() {
        "json" => println!("{}", outcome.report.to_json()?),
        _ => print!("{}", outcome.report.render_text(config.rule_width)),
    }

    Ok(())
}
