use serde::Serialize;

use crate::domain::trial::SampledTrial;

pub const BUCKET_COUNT: usize = 15;
pub const MAX_PERCENT: f64 = 25.0;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DistributionBucket {
    pub range: String,
    pub count: usize,
    pub probability: f64,
}

pub fn bucket_size() -> f64 {
    MAX_PERCENT / BUCKET_COUNT as f64
}

/// Groups trials into fixed buckets over 0-25 % savings. Values above the
/// top land in the last bucket, values below zero in the first.
pub fn savings_distribution(trials: &[SampledTrial]) -> Vec<DistributionBucket> {
    let size = bucket_size();
    let mut counts = [0usize; BUCKET_COUNT];
    for trial in trials {
        let index = (trial.savings_percent / size).floor().max(0.0) as usize;
        counts[index.min(BUCKET_COUNT - 1)] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(index, count)| DistributionBucket {
            range: format!(
                "{:.1}-{:.1}%",
                index as f64 * size,
                (index + 1) as f64 * size
            ),
            count: *count,
            probability: if trials.is_empty() {
                0.0
            } else {
                *count as f64 / trials.len() as f64 * 100.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(percent: f64) -> SampledTrial {
        SampledTrial {
            savings_percent: percent,
            savings_amount: percent / 100.0,
        }
    }

    #[test]
    fn buckets_cover_zero_to_twenty_five_percent() {
        let buckets = savings_distribution(&[]);
        assert_eq!(buckets.len(), BUCKET_COUNT);
        assert_eq!(buckets[0].range, "0.0-1.7%");
        assert_eq!(buckets[14].range, "23.3-25.0%");
        assert!(buckets.iter().all(|b| b.count == 0 && b.probability == 0.0));
    }

    #[test]
    fn values_are_counted_and_clamped() {
        let trials = [trial(0.5), trial(2.0), trial(2.1), trial(40.0), trial(-3.0)];
        let buckets = savings_distribution(&trials);

        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].count, 2);
        assert_eq!(buckets[14].count, 1);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), trials.len());
        assert!((buckets[0].probability - 40.0).abs() < 1e-9);
    }
}
