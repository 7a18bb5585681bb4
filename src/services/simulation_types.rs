use serde::Serialize;

use crate::domain::trial::SampledTrial;
use crate::services::cost_breakdown::CostBreakdownEntry;
use crate::services::distribution::DistributionBucket;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SavingsPercentile {
    pub percent: f64,
    pub amount: f64,
}

/// Result of one run. `percent` and `amount` of each percentile come from two
/// independent sort orders, so they need not belong to the same trial.
#[derive(Serialize, Debug, Clone)]
pub struct SimulationSummary {
    pub trial_count: usize,
    pub current_operating_expense: f64,
    pub p10: SavingsPercentile,
    pub p50: SavingsPercentile,
    pub p90: SavingsPercentile,
    pub trials: Vec<SampledTrial>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SimulationOutput {
    pub data_source: String,
    pub seed: Option<u64>,
    pub summary: SimulationSummary,
    pub cost_breakdown: Vec<CostBreakdownEntry>,
    pub distribution: Vec<DistributionBucket>,
}
