pub mod cost_breakdown;
pub mod distribution;
pub mod histogram;
pub mod percentiles;
pub mod profile_yaml;
pub mod savings_sampler;
pub mod simulation;
pub mod simulation_types;
