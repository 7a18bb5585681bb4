use chrono::Local;
use tracing::info;

use crate::commands::report_format::{
    complete_contact, default_report_file_name, format_analysis_report,
};
use crate::commands::{CommandError, write_file};
use crate::services::profile_yaml::load_profile_from_yaml_file;
use crate::services::simulation::{simulate, simulate_seeded};

pub fn report_command(
    input: &str,
    output: Option<&str>,
    trials: usize,
    seed: Option<u64>,
) -> Result<(), CommandError> {
    let profile = load_profile_from_yaml_file(input)?;
    // Lead gate runs before any sampling.
    let company = complete_contact(&profile)?.company.clone();

    let summary = match seed {
        Some(seed) => simulate_seeded(&profile, trials, seed)?,
        None => simulate(&profile, trials)?,
    };
    let report = format_analysis_report(&profile, &summary, Local::now().date_naive())?;

    let path = match output {
        Some(path) => path.to_string(),
        None => default_report_file_name(&company),
    };
    write_file(&path, report)?;
    info!(path = path.as_str(), "analysis report written");

    println!("Analysis report for {company} written to {path}");
    Ok(())
}
