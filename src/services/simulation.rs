use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::profile::{BusinessProfile, ProfileError};
use crate::domain::savings_range::{
    CHANGE_SUCCESS, MAX_TECH_MULTIPLIER, PROCESS_SAVINGS, ai_savings_range,
    outsourcing_savings_range,
};
use crate::domain::trial::SampledTrial;
use crate::services::cost_breakdown::cost_breakdown;
use crate::services::distribution::savings_distribution;
use crate::services::histogram::{HistogramError, write_histogram_png};
use crate::services::percentiles::{nearest_rank, sorted_ascending};
use crate::services::profile_yaml::{ProfileYamlError, load_profile_from_yaml_file};
use crate::services::savings_sampler::{SavingsSampler, UniformSampler};
use crate::services::simulation_types::{SavingsPercentile, SimulationOutput, SimulationSummary};

pub const DEFAULT_TRIAL_COUNT: usize = 3000;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("failed to load profile: {0}")]
    LoadProfile(#[from] ProfileYamlError),
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),
    #[error("trial count must be greater than zero")]
    InvalidTrialCount,
    #[error("failed to render histogram: {0}")]
    Histogram(#[from] HistogramError),
}

/// Loads a profile, simulates it and renders the distribution histogram.
pub(crate) fn simulate_from_profile_file(
    profile_path: &str,
    trial_count: usize,
    seed: Option<u64>,
    histogram_path: &str,
) -> Result<SimulationOutput, SimulationError> {
    let profile = load_profile_from_yaml_file(profile_path)?;
    let output = build_simulation_output(&profile, trial_count, seed, data_source_name(profile_path))?;
    write_histogram_png(histogram_path, &output.distribution)?;
    info!(path = histogram_path, "histogram written");
    Ok(output)
}

pub(crate) fn build_simulation_output(
    profile: &BusinessProfile,
    trial_count: usize,
    seed: Option<u64>,
    data_source: String,
) -> Result<SimulationOutput, SimulationError> {
    let summary = match seed {
        Some(seed) => simulate_seeded(profile, trial_count, seed)?,
        None => simulate(profile, trial_count)?,
    };
    Ok(SimulationOutput {
        data_source,
        seed,
        cost_breakdown: cost_breakdown(profile),
        distribution: savings_distribution(&summary.trials),
        summary,
    })
}

/// Runs `trial_count` draws from a fresh thread-local random source.
pub fn simulate(
    profile: &BusinessProfile,
    trial_count: usize,
) -> Result<SimulationSummary, SimulationError> {
    let mut sampler = UniformSampler::new(rand::thread_rng());
    run_simulation_with_sampler(profile, trial_count, &mut sampler)
}

/// Same as [`simulate`] but reproducible for a given seed.
pub fn simulate_seeded(
    profile: &BusinessProfile,
    trial_count: usize,
    seed: u64,
) -> Result<SimulationSummary, SimulationError> {
    let mut sampler = UniformSampler::new(StdRng::seed_from_u64(seed));
    run_simulation_with_sampler(profile, trial_count, &mut sampler)
}

pub fn run_simulation_with_sampler<S: SavingsSampler + ?Sized>(
    profile: &BusinessProfile,
    trial_count: usize,
    sampler: &mut S,
) -> Result<SimulationSummary, SimulationError> {
    if trial_count == 0 {
        return Err(SimulationError::InvalidTrialCount);
    }
    profile.validate()?;

    let current_operating_expense = profile.current_operating_expense();
    if !current_operating_expense.is_finite() {
        return Err(ProfileError::InvalidNumber {
            field: "current_operating_expense",
            value: current_operating_expense,
        }
        .into());
    }
    debug!(
        trial_count,
        current_operating_expense,
        ai_readiness = %profile.ai_readiness,
        outsourcing_level = %profile.outsourcing_level,
        "running savings simulation"
    );

    let trials: Vec<SampledTrial> = (0..trial_count)
        .map(|_| sample_trial(profile, current_operating_expense, sampler))
        .collect();

    Ok(summarize(trials, current_operating_expense))
}

fn sample_trial<S: SavingsSampler + ?Sized>(
    profile: &BusinessProfile,
    current_operating_expense: f64,
    sampler: &mut S,
) -> SampledTrial {
    let ai_savings = sampler.sample(ai_savings_range(profile.ai_readiness));
    let process_savings = sampler.sample(PROCESS_SAVINGS);
    let outsourcing_savings = sampler.sample(outsourcing_savings_range(profile.outsourcing_level));
    let change_success = sampler.sample(CHANGE_SUCCESS);

    let maturity_multiplier = profile.process_maturity_percent / 100.0;
    let tech_multiplier = (profile.tech_spend_percent_of_opex / 10.0).min(MAX_TECH_MULTIPLIER);

    let total_savings_fraction = (ai_savings
        + process_savings * maturity_multiplier
        + outsourcing_savings)
        * change_success
        * tech_multiplier;

    SampledTrial {
        savings_percent: total_savings_fraction * 100.0,
        savings_amount: current_operating_expense * total_savings_fraction,
    }
}

fn summarize(trials: Vec<SampledTrial>, current_operating_expense: f64) -> SimulationSummary {
    let by_percent = sorted_ascending(trials.iter().map(|t| t.savings_percent));
    let by_amount = sorted_ascending(trials.iter().map(|t| t.savings_amount));

    let percentile = |fraction: f64| SavingsPercentile {
        percent: nearest_rank(&by_percent, fraction).unwrap_or(0.0),
        amount: nearest_rank(&by_amount, fraction).unwrap_or(0.0),
    };

    SimulationSummary {
        trial_count: trials.len(),
        current_operating_expense,
        p10: percentile(0.1),
        p50: percentile(0.5),
        p90: percentile(0.9),
        trials,
    }
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
