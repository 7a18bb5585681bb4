use crate::domain::profile::{AiReadiness, OutsourcingLevel};

/// Closed interval of savings expressed as a fraction of operating expense.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsRange {
    pub min: f64,
    pub max: f64,
}

impl SavingsRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

pub const PROCESS_SAVINGS: SavingsRange = SavingsRange::new(0.05, 0.20);
pub const CHANGE_SUCCESS: SavingsRange = SavingsRange::new(0.65, 0.85);

/// Upper bound of the tech spend multiplier.
pub const MAX_TECH_MULTIPLIER: f64 = 1.2;

pub fn ai_savings_range(readiness: AiReadiness) -> SavingsRange {
    match readiness {
        AiReadiness::Beginner => SavingsRange::new(0.03, 0.08),
        AiReadiness::Learning => SavingsRange::new(0.06, 0.12),
        AiReadiness::EarlyAdopter => SavingsRange::new(0.10, 0.18),
    }
}

pub fn outsourcing_savings_range(level: OutsourcingLevel) -> SavingsRange {
    match level {
        OutsourcingLevel::Low => SavingsRange::new(0.02, 0.06),
        OutsourcingLevel::Medium => SavingsRange::new(0.04, 0.10),
        OutsourcingLevel::High => SavingsRange::new(0.06, 0.15),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_ranges_grow_with_readiness() {
        let beginner = ai_savings_range(AiReadiness::Beginner);
        let learning = ai_savings_range(AiReadiness::Learning);
        let adopter = ai_savings_range(AiReadiness::EarlyAdopter);

        assert_eq!(beginner, SavingsRange::new(0.03, 0.08));
        assert!(beginner.max < adopter.max);
        assert!(learning.min < adopter.min);
    }

    #[test]
    fn selector_tables_match_published_ranges() {
        let ai = [
            (AiReadiness::Beginner, 0.03, 0.08),
            (AiReadiness::Learning, 0.06, 0.12),
            (AiReadiness::EarlyAdopter, 0.10, 0.18),
        ];
        for (readiness, min, max) in ai {
            assert_eq!(ai_savings_range(readiness), SavingsRange::new(min, max), "{readiness}");
        }

        let outsourcing = [
            (OutsourcingLevel::Low, 0.02, 0.06),
            (OutsourcingLevel::Medium, 0.04, 0.10),
            (OutsourcingLevel::High, 0.06, 0.15),
        ];
        for (level, min, max) in outsourcing {
            assert_eq!(outsourcing_savings_range(level), SavingsRange::new(min, max), "{level}");
        }

        assert_eq!(PROCESS_SAVINGS, SavingsRange::new(0.05, 0.20));
        assert_eq!(CHANGE_SUCCESS, SavingsRange::new(0.65, 0.85));
    }

    #[test]
    fn every_range_has_min_below_max() {
        let ranges = [
            ai_savings_range(AiReadiness::Beginner),
            ai_savings_range(AiReadiness::Learning),
            ai_savings_range(AiReadiness::EarlyAdopter),
            outsourcing_savings_range(OutsourcingLevel::Low),
            outsourcing_savings_range(OutsourcingLevel::Medium),
            outsourcing_savings_range(OutsourcingLevel::High),
            PROCESS_SAVINGS,
            CHANGE_SUCCESS,
        ];
        for range in ranges {
            assert!(range.min < range.max, "{range:?}");
        }
    }
}
