use crate::domain::profile::{AiReadiness, BusinessProfile, OutsourcingLevel};
use crate::domain::savings_range::SavingsRange;
use crate::services::savings_sampler::SavingsSampler;

// A SavingsSampler that always returns one end of the requested range
pub struct FixedSampler {
    use_max: bool,
}

impl FixedSampler {
    pub fn min() -> Self {
        Self { use_max: false }
    }

    pub fn max() -> Self {
        Self { use_max: true }
    }
}

impl SavingsSampler for FixedSampler {
    fn sample(&mut self, range: SavingsRange) -> f64 {
        if self.use_max { range.max } else { range.min }
    }
}

pub fn build_profile(
    ai_readiness: AiReadiness,
    outsourcing_level: OutsourcingLevel,
    process_maturity_percent: f64,
    tech_spend_percent_of_opex: f64,
) -> BusinessProfile {
    BusinessProfile {
        ai_readiness,
        outsourcing_level,
        process_maturity_percent,
        tech_spend_percent_of_opex,
        ..BusinessProfile::small_business_default()
    }
}
