use thiserror::Error;

use crate::commands::report_format::ReportFormatError;
use crate::services::profile_yaml::ProfileYamlError;
use crate::services::simulation::SimulationError;

pub mod base_commands;
pub mod breakdown_cmd;
pub mod init_profile_cmd;
pub mod report_cmd;
pub mod report_format;
pub mod simulate_cmd;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to simulate profile: {0}")]
    Simulation(#[from] SimulationError),
    #[error("failed to load profile: {0}")]
    Profile(#[from] ProfileYamlError),
    #[error("failed to build report: {0}")]
    Report(#[from] ReportFormatError),
    #[error("failed to serialize output: {0}")]
    Serialize(String),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

pub(crate) fn write_file(path: &str, contents: impl AsRef<[u8]>) -> Result<(), CommandError> {
    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_string(),
        source,
    })
}
