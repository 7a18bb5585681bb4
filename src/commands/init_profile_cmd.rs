use crate::commands::{CommandError, write_file};
use crate::domain::profile::BusinessProfile;
use crate::services::profile_yaml::serialize_profile_to_yaml;

pub fn init_profile_command(output: &str) -> Result<(), CommandError> {
    let mut buffer = Vec::new();
    serialize_profile_to_yaml(&mut buffer, &BusinessProfile::small_business_default())
        .map_err(|e| CommandError::Serialize(e.to_string()))?;
    write_file(output, buffer)?;
    println!("Default profile written to {output}");
    Ok(())
}
