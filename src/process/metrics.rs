use serde::Serialize;

use super::occupancy::round1;
use crate::schema::ResolvedTable;

/// Table-wide totals shown in the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub total_units: u64,
    pub total_preleased: u64,
    pub total_available: u64,
    pub overall_occupancy: f64,
}

impl Metrics {
    pub fn from_table(table: &ResolvedTable) -> Self {
        let total_units = table.sum_by(|r| r.total_units);
        let total_preleased = table.sum_by(|r| r.preleased);
        let total_available = table.sum_by(|r| r.available);

        Self {
            total_units,
            total_preleased,
            total_available,
            overall_occupancy: overall_occupancy(total_preleased, total_units),
        }
    }
}

/// `preleased / units * 100` to one decimal; zero when there are no units.
pub fn overall_occupancy(preleased: u64, units: u64) -> f64 {
    if units == 0 {
        return 0.0;
    }
    round1(preleased as f64 / units as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::sample_table;
    use crate::process::resolve_occupancy;

    #[test]
    fn test_sample_metrics() {
        let metrics = Metrics::from_table(&resolve_occupancy(sample_table()));
        assert_eq!(
            metrics,
            Metrics {
                total_units: 600,
                total_preleased: 490,
                total_available: 110,
                overall_occupancy: 81.7,
            }
        );
    }

    #[test]
    fn test_empty_table_guards_division() {
        let metrics = Metrics::from_table(&ResolvedTable::default());
        assert_eq!(metrics.total_units, 0);
        assert_eq!(metrics.overall_occupancy, 0.0);
    }

    #[test]
    fn test_overall_ignores_row_percentages() {
        let mut table = resolve_occupancy(sample_table());
        for row in &mut table.rows {
            row.occupancy_pct = 1.0;
        }
        assert_eq!(Metrics::from_table(&table).overall_occupancy, 81.7);
        assert_eq!(overall_occupancy(1, 3), 33.3);
        assert_eq!(overall_occupancy(2, 3), 66.7);
    }
}
