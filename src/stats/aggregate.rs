use serde::{Deserialize, Serialize};

use crate::{broadband::MetricRecord, common::round_percent, types::Tier};

/// Download speed at or above which a region counts as high-speed.
/// Fixed; independent of the user-adjustable threshold.
pub const HIGH_SPEED_MBPS: f64 = 100.0;

/// Coverage aggregates over a metric set at one threshold.
/// Always derived from scratch by [`compute`]; replaced wholesale, never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStatistics {
    pub threshold_mbps: f64,
    pub total_regions: usize,
    pub no_service: usize,
    pub below_threshold: usize,
    pub high_speed: usize,
    pub avg_speed_mbps: u32,
    pub total_population: u64,
    pub underserved_population: u64,
    pub underserved_percent: u32,
}

impl AggregateStatistics {
    /// Share of regions at or above [`HIGH_SPEED_MBPS`], rounded; 0 when there are no regions.
    pub fn high_speed_percent(&self) -> u32 {
        round_percent(self.high_speed as u64, self.total_regions as u64)
    }

    #[inline] pub fn is_empty(&self) -> bool { self.total_regions == 0 }
}

/// Compute coverage statistics for `records` at `threshold_mbps`.
/// An empty record set yields all-zero statistics.
pub fn compute(records: &[MetricRecord], threshold_mbps: f64) -> AggregateStatistics {
    let mut stats = AggregateStatistics { threshold_mbps, ..Default::default() };
    let mut speed_sum = 0.0;

    for record in records {
        let below = record.is_below(threshold_mbps);
        stats.total_regions += 1;
        stats.no_service += usize::from(record.tier == Tier::NoService);
        stats.below_threshold += usize::from(below);
        stats.high_speed += usize::from(record.max_down_mbps >= HIGH_SPEED_MBPS);
        stats.total_population += record.population_estimate;
        if below {
            stats.underserved_population += record.population_estimate;
        }
        speed_sum += record.max_down_mbps;
    }

    if stats.total_regions > 0 {
        stats.avg_speed_mbps = (speed_sum / stats.total_regions as f64).round() as u32;
    }
    stats.underserved_percent = round_percent(stats.underserved_population, stats.total_population);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeoId;

    fn record(id: &str, down: f64, population: u64, tier: Tier) -> MetricRecord {
        MetricRecord {
            region_id: GeoId::new(id),
            county_fips: None,
            name: None,
            max_down_mbps: down,
            max_up_mbps: down / 5.0,
            tier,
            provider_count: 1,
            population_estimate: population,
            percent_covered: 100.0,
            color_hint: None,
        }
    }

    #[test]
    fn counts_and_population() {
        let records = vec![
            record("54001000100", 0.0, 50, Tier::NoService),
            record("54001000200", 10.0, 150, Tier::Basic),
            record("54001000300", 100.0, 300, Tier::HighSpeed),
            record("54001000400", 1000.0, 500, Tier::Gigabit),
        ];
        let stats = compute(&records, 25.0);
        assert_eq!(stats.total_regions, 4);
        assert_eq!(stats.no_service, 1);
        assert_eq!(stats.below_threshold, 2);
        assert_eq!(stats.high_speed, 2);
        assert_eq!(stats.avg_speed_mbps, 278); // 1110 / 4 = 277.5
        assert_eq!(stats.total_population, 1000);
        assert_eq!(stats.underserved_population, 200);
        assert_eq!(stats.underserved_percent, 20);
        assert_eq!(stats.high_speed_percent(), 50);
    }

    #[test]
    fn empty_records_are_all_zero() {
        let stats = compute(&[], 25.0);
        assert_eq!(stats, AggregateStatistics { threshold_mbps: 25.0, ..Default::default() });
        assert_eq!(stats.high_speed_percent(), 0);
        assert!(stats.is_empty());
    }

    #[test]
    fn zero_population_percent_is_zero() {
        let stats = compute(&[record("54001000100", 5.0, 0, Tier::Basic)], 25.0);
        assert_eq!(stats.below_threshold, 1);
        assert_eq!(stats.underserved_percent, 0);
    }

    #[test]
    fn high_speed_cutoff_ignores_threshold() {
        let records = vec![record("54001000100", 150.0, 10, Tier::HighSpeed)];
        assert_eq!(compute(&records, 1.0).high_speed, 1);
        assert_eq!(compute(&records, 100.0).high_speed, 1);
    }
}
