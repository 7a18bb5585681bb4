use crate::commands::CommandError;
use crate::commands::report_format::format_cost_breakdown;
use crate::services::cost_breakdown::cost_breakdown;
use crate::services::profile_yaml::load_profile_from_yaml_file;

pub fn breakdown_command(input: &str) -> Result<(), CommandError> {
    let profile = load_profile_from_yaml_file(input)?;
    println!(
        "Current OpEx: ${:.2}M",
        profile.current_operating_expense()
    );
    println!("{}", format_cost_breakdown(&cost_breakdown(&profile)));
    Ok(())
}
