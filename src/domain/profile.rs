use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error("invalid {field}: {value:?} (expected one of: {expected})")]
    InvalidSelector {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidNumber { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiReadiness {
    Beginner,
    Learning,
    EarlyAdopter,
}

impl AiReadiness {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiReadiness::Beginner => "beginner",
            AiReadiness::Learning => "learning",
            AiReadiness::EarlyAdopter => "adopter",
        }
    }
}

impl FromStr for AiReadiness {
    type Err = ProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(AiReadiness::Beginner),
            "learning" => Ok(AiReadiness::Learning),
            "adopter" | "early-adopter" | "early_adopter" | "earlyadopter" => {
                Ok(AiReadiness::EarlyAdopter)
            }
            _ => Err(ProfileError::InvalidSelector {
                field: "ai_readiness",
                value: value.to_string(),
                expected: "beginner, learning, adopter",
            }),
        }
    }
}

impl fmt::Display for AiReadiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutsourcingLevel {
    Low,
    Medium,
    High,
}

impl OutsourcingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutsourcingLevel::Low => "low",
            OutsourcingLevel::Medium => "medium",
            OutsourcingLevel::High => "high",
        }
    }
}

impl FromStr for OutsourcingLevel {
    type Err = ProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(OutsourcingLevel::Low),
            "medium" => Ok(OutsourcingLevel::Medium),
            "high" => Ok(OutsourcingLevel::High),
            _ => Err(ProfileError::InvalidSelector {
                field: "outsourcing_level",
                value: value.to_string(),
                expected: "low, medium, high",
            }),
        }
    }
}

impl fmt::Display for OutsourcingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadContact {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
}

impl LeadContact {
    /// Name, company and email must all be present before a report is released.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.company, &self.email]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Business parameters that drive one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessProfile {
    pub annual_revenue_millions: f64,
    pub opex_percent_of_revenue: f64,
    pub tech_spend_percent_of_opex: f64,
    pub ai_readiness: AiReadiness,
    pub process_maturity_percent: f64,
    pub outsourcing_level: OutsourcingLevel,
    pub headcount: Option<u32>,
    pub contact: Option<LeadContact>,
}

impl BusinessProfile {
    /// Defaults of the intake form.
    pub fn small_business_default() -> Self {
        Self {
            annual_revenue_millions: 20.0,
            opex_percent_of_revenue: 35.0,
            tech_spend_percent_of_opex: 8.0,
            ai_readiness: AiReadiness::Beginner,
            process_maturity_percent: 60.0,
            outsourcing_level: OutsourcingLevel::Low,
            headcount: Some(85),
            contact: None,
        }
    }

    pub fn current_operating_expense(&self) -> f64 {
        self.annual_revenue_millions * self.opex_percent_of_revenue / 100.0
    }

    /// Rejects non-finite or negative numeric fields. Range checks beyond that
    /// are left to whoever builds the profile.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let fields = [
            ("annual_revenue_millions", self.annual_revenue_millions),
            ("opex_percent_of_revenue", self.opex_percent_of_revenue),
            ("tech_spend_percent_of_opex", self.tech_spend_percent_of_opex),
            ("process_maturity_percent", self.process_maturity_percent),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidNumber { field, value });
            }
        }
        Ok(())
    }
}
