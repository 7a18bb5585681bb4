use serde::Serialize;

/// One Monte Carlo draw through the savings formula.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SampledTrial {
    pub savings_percent: f64,
    /// Same scale as the derived operating expense (millions).
    pub savings_amount: f64,
}
