use tracing::info;

use crate::commands::base_commands::OutputFormat;
use crate::commands::report_format::format_simulation_report;
use crate::commands::{CommandError, write_file};
use crate::services::simulation::simulate_from_profile_file;
use crate::services::simulation_types::SimulationOutput;

pub fn simulate_command(
    input: &str,
    output: &str,
    trials: usize,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CommandError> {
    let histogram_path = format!("{output}.png");
    let simulation = simulate_from_profile_file(input, trials, seed, &histogram_path)?;

    let contents = serialize_output(&simulation, format)?;
    write_file(output, contents)?;
    info!(path = output, ?format, "simulation output written");

    println!("{}", format_simulation_report(&simulation));
    println!("Simulation result for {trials} trials written to {output}");
    println!("Simulation histogram written to {histogram_path}");
    Ok(())
}

fn serialize_output(
    simulation: &SimulationOutput,
    format: OutputFormat,
) -> Result<String, CommandError> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(simulation).map_err(|e| CommandError::Serialize(e.to_string()))
        }
        OutputFormat::Json => serde_json::to_string_pretty(simulation)
            .map_err(|e| CommandError::Serialize(e.to_string())),
    }
}
