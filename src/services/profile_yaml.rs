use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::profile::{BusinessProfile, LeadContact, ProfileError};

#[derive(Error, Debug)]
pub enum ProfileYamlError {
    #[error("failed to read profile file {path}: {source}")]
    ReadFile { path: String, source: io::Error },
    #[error("failed to parse profile yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("{0}")]
    Invalid(#[from] ProfileError),
}

#[derive(Debug, Deserialize, Serialize)]
struct ProfileRecord {
    annual_revenue_millions: f64,
    opex_percent_of_revenue: f64,
    tech_spend_percent_of_opex: f64,
    ai_readiness: String,
    process_maturity_percent: f64,
    outsourcing_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    headcount: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact: Option<ContactRecord>,
}

#[derive(Debug, Deserialize, Serialize)]
struct ContactRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

pub fn load_profile_from_yaml_file(path: &str) -> Result<BusinessProfile, ProfileYamlError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| ProfileYamlError::ReadFile {
        path: path.to_string(),
        source,
    })?;
    debug!(path, "loaded profile file");
    deserialize_profile_from_yaml_str(&yaml)
}

/// Parses and validates a profile. Selector strings are resolved here, so an
/// unknown `ai_readiness` or `outsourcing_level` never reaches the simulator.
pub fn deserialize_profile_from_yaml_str(yaml: &str) -> Result<BusinessProfile, ProfileYamlError> {
    let record: ProfileRecord = serde_yaml::from_str(yaml)?;
    let profile = BusinessProfile {
        annual_revenue_millions: record.annual_revenue_millions,
        opex_percent_of_revenue: record.opex_percent_of_revenue,
        tech_spend_percent_of_opex: record.tech_spend_percent_of_opex,
        ai_readiness: record.ai_readiness.parse()?,
        process_maturity_percent: record.process_maturity_percent,
        outsourcing_level: record.outsourcing_level.parse()?,
        headcount: record.headcount,
        contact: record.contact.map(|c| LeadContact {
            name: c.name,
            company: c.company,
            email: c.email,
            phone: c.phone,
        }),
    };
    profile.validate()?;
    Ok(profile)
}

pub fn serialize_profile_to_yaml<W: Write>(
    writer: &mut W,
    profile: &BusinessProfile,
) -> io::Result<()> {
    let record = ProfileRecord {
        annual_revenue_millions: profile.annual_revenue_millions,
        opex_percent_of_revenue: profile.opex_percent_of_revenue,
        tech_spend_percent_of_opex: profile.tech_spend_percent_of_opex,
        ai_readiness: profile.ai_readiness.to_string(),
        process_maturity_percent: profile.process_maturity_percent,
        outsourcing_level: profile.outsourcing_level.to_string(),
        headcount: profile.headcount,
        contact: profile.contact.as_ref().map(|c| ContactRecord {
            name: c.name.clone(),
            company: c.company.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
        }),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
