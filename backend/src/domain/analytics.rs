//! Aggregate views over a customer batch.
//!
//! Pure single-pass reducers feeding the dashboard's region bar chart,
//! sales funnel, and metric cards. Aggregates are recomputed in full
//! whenever the underlying batch changes; there is no incremental state.

use log::debug;

use shared::{
    CustomerStatus, FunnelStage, FunnelStageKind, Kindergarten, MetricsSummary, Region,
    RegionCount,
};

/// Tally records per region, sorted by descending count.
///
/// Ties keep canonical region order: the tally walks `Region::ALL` and the
/// descending sort is stable.
pub fn region_distribution(records: &[Kindergarten]) -> Vec<RegionCount> {
    let mut counts = [0usize; Region::ALL.len()];
    for record in records {
        counts[record.region as usize] += 1;
    }

    let mut distribution: Vec<RegionCount> = Region::ALL
        .into_iter()
        .map(|region| RegionCount {
            region,
            count: counts[region as usize],
            full_name: region.full_name().to_string(),
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count));

    debug!("Region distribution over {} records", records.len());
    distribution
}

/// Build the four-stage sales funnel.
///
/// Stage membership is nested (all ⊇ contacted ⊇ interested ⊇ closed), so
/// the counts are non-increasing by construction.
pub fn funnel(records: &[Kindergarten]) -> Vec<FunnelStage> {
    let total = records.len();
    let contacted = records.iter().filter(|k| k.is_contacted()).count();
    let interested = records
        .iter()
        .filter(|k| {
            matches!(
                k.status,
                CustomerStatus::Interested | CustomerStatus::Closed
            )
        })
        .count();
    let closed = records
        .iter()
        .filter(|k| k.status == CustomerStatus::Closed)
        .count();

    vec![
        FunnelStage {
            stage: FunnelStageKind::AllCustomers,
            count: total,
        },
        FunnelStage {
            stage: FunnelStageKind::Contacted,
            count: contacted,
        },
        FunnelStage {
            stage: FunnelStageKind::Interested,
            count: interested,
        },
        FunnelStage {
            stage: FunnelStageKind::Closed,
            count: closed,
        },
    ]
}

/// Headline counts for the metric cards.
pub fn metrics(records: &[Kindergarten]) -> MetricsSummary {
    let mut summary = MetricsSummary {
        total: records.len(),
        closed: 0,
        interested: 0,
        not_contacted: 0,
    };
    for record in records {
        match record.status {
            CustomerStatus::Closed => summary.closed += 1,
            CustomerStatus::Interested => summary.interested += 1,
            CustomerStatus::NotContacted => summary.not_contacted += 1,
            CustomerStatus::Contacted => {}
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generator::generate_kindergartens;
    use shared::{Category, Rating};

    fn test_record(id: &str, region: Region, status: CustomerStatus) -> Kindergarten {
        Kindergarten {
            id: id.to_string(),
            name: "Test Kindergarten".to_string(),
            region,
            suburb: "Testville".to_string(),
            address: "1 Main Street, Testville".to_string(),
            phone: "02 5550 0000".to_string(),
            email: "test0@gmail.com".to_string(),
            website: String::new(),
            category: Category::LongDayCare,
            rating: Rating::Meeting,
            capacity: 50,
            approved_date: "2015-06-14".to_string(),
            status,
            source_channel: None,
            tags: Vec::new(),
            last_contact_date: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_region_distribution_counts_and_order() {
        let records = vec![
            test_record("AU-000001", Region::Vic, CustomerStatus::NotContacted),
            test_record("AU-000002", Region::Vic, CustomerStatus::NotContacted),
            test_record("AU-000003", Region::Nt, CustomerStatus::NotContacted),
        ];

        let distribution = region_distribution(&records);
        assert_eq!(distribution.len(), 8);
        assert_eq!(distribution[0].region, Region::Vic);
        assert_eq!(distribution[0].count, 2);
        assert_eq!(distribution[0].full_name, "Victoria");
        assert_eq!(distribution[1].region, Region::Nt);
        assert_eq!(distribution[1].count, 1);

        let total: usize = distribution.iter().map(|d| d.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_region_distribution_ties_keep_canonical_order() {
        // Every region at zero: the order must be exactly Region::ALL.
        let distribution = region_distribution(&[]);
        let order: Vec<Region> = distribution.iter().map(|d| d.region).collect();
        assert_eq!(order, Region::ALL.to_vec());
    }

    #[test]
    fn test_funnel_stage_counts() {
        let records = vec![
            test_record("AU-000001", Region::Nsw, CustomerStatus::NotContacted),
            test_record("AU-000002", Region::Nsw, CustomerStatus::Contacted),
            test_record("AU-000003", Region::Nsw, CustomerStatus::Interested),
            test_record("AU-000004", Region::Nsw, CustomerStatus::Closed),
        ];

        let stages = funnel(&records);
        assert_eq!(stages.len(), 4);
        assert_eq!(stages[0].stage, FunnelStageKind::AllCustomers);
        assert_eq!(stages[0].count, 4);
        assert_eq!(stages[1].count, 3);
        assert_eq!(stages[2].count, 2);
        assert_eq!(stages[3].count, 1);
    }

    #[test]
    fn test_funnel_is_monotonic_on_generated_batch() {
        let records = generate_kindergartens(3000, 21).unwrap();
        let stages = funnel(&records);
        for window in stages.windows(2) {
            assert!(window[0].count >= window[1].count);
        }
        let closed = records
            .iter()
            .filter(|k| k.status == CustomerStatus::Closed)
            .count();
        assert_eq!(stages[3].count, closed);
    }

    #[test]
    fn test_metrics_agree_with_funnel() {
        let records = generate_kindergartens(3000, 33).unwrap();
        let summary = metrics(&records);
        let stages = funnel(&records);

        assert_eq!(summary.total, stages[0].count);
        assert_eq!(summary.closed, stages[3].count);
        assert_eq!(summary.total - summary.not_contacted, stages[1].count);
        assert_eq!(summary.interested + summary.closed, stages[2].count);
    }

    #[test]
    fn test_region_distribution_totals_on_generated_batch() {
        let records = generate_kindergartens(2700, 77).unwrap();
        let distribution = region_distribution(&records);
        let total: usize = distribution.iter().map(|d| d.count).sum();
        assert_eq!(total, records.len());
    }
}
