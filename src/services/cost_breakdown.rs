use serde::Serialize;

use crate::domain::profile::BusinessProfile;

const PERSONNEL_SHARE: f64 = 0.65;
const OPERATIONS_SHARE: f64 = 0.15;
const OVERHEAD_SHARE: f64 = 0.12;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostBreakdownEntry {
    pub name: String,
    /// Millions, same scale as the operating expense.
    pub value: f64,
    pub color: String,
}

/// Splits current operating expense into the four reporting categories.
/// Technology follows the profile's tech spend; the rest are fixed shares,
/// so the entries need not sum to the total.
pub fn cost_breakdown(profile: &BusinessProfile) -> Vec<CostBreakdownEntry> {
    let opex = profile.current_operating_expense();
    vec![
        entry("Personnel", opex * PERSONNEL_SHARE, "#3B82F6"),
        entry(
            "Technology",
            opex * (profile.tech_spend_percent_of_opex / 100.0),
            "#10B981",
        ),
        entry("Operations", opex * OPERATIONS_SHARE, "#F59E0B"),
        entry("Overhead", opex * OVERHEAD_SHARE, "#EF4444"),
    ]
}

fn entry(name: &str, value: f64, color: &str) -> CostBreakdownEntry {
    CostBreakdownEntry {
        name: name.to_string(),
        value,
        color: color.to_string(),
    }
}
