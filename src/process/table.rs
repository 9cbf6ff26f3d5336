use super::metrics::Metrics;
use crate::schema::{OccupancyClass, ResolvedRow, ResolvedTable, TableRow};

pub const TOTALS_LABEL: &str = "Total";

impl From<&ResolvedRow> for TableRow {
    fn from(row: &ResolvedRow) -> Self {
        Self {
            unit_type: row.unit_type.clone(),
            total_units: u64::from(row.total_units),
            preleased: u64::from(row.preleased),
            available: u64::from(row.available),
            new_leases: u64::from(row.new_leases),
            renewals: u64::from(row.renewals),
            occupancy: row.occupancy_pct,
            occupancy_class: OccupancyClass::classify(row.occupancy_pct),
        }
    }
}

/// One display row per unit type, in source order.
pub fn table_rows(table: &ResolvedTable) -> Vec<TableRow> {
    table.rows.iter().map(TableRow::from).collect()
}

/// Footer row: column sums with the overall occupancy.
pub fn totals_row(table: &ResolvedTable, metrics: &Metrics) -> TableRow {
    TableRow {
        unit_type: TOTALS_LABEL.to_string(),
        total_units: metrics.total_units,
        preleased: metrics.total_preleased,
        available: metrics.total_available,
        new_leases: table.sum_by(|r| r.new_leases),
        renewals: table.sum_by(|r| r.renewals),
        occupancy: metrics.overall_occupancy,
        occupancy_class: OccupancyClass::classify(metrics.overall_occupancy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::sample_table;
    use crate::process::resolve_occupancy;
    use crate::schema::{RawOccupancy, Row, Table};

    fn row_with_pct(unit_type: &str, pct: f64) -> Row {
        Row {
            unit_type: unit_type.to_string(),
            total_units: 100,
            preleased: 50,
            available: 50,
            new_leases: 25,
            renewals: 25,
            occupancy_pct: Some(RawOccupancy::bare(pct)),
        }
    }

    #[test]
    fn test_class_boundaries_in_rows() {
        let table = resolve_occupancy(Table::new(vec![
            row_with_pct("a", 69.9),
            row_with_pct("b", 70.0),
            row_with_pct("c", 89.9),
            row_with_pct("d", 90.0),
        ]));
        let classes: Vec<_> = table_rows(&table)
            .iter()
            .map(|r| r.occupancy_class)
            .collect();
        assert_eq!(
            classes,
            vec![
                OccupancyClass::Low,
                OccupancyClass::Mid,
                OccupancyClass::Mid,
                OccupancyClass::High
            ]
        );
    }

    #[test]
    fn test_sample_rows_keep_order_and_counts() {
        let table = resolve_occupancy(sample_table());
        let rows = table_rows(&table);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].unit_type, "Studio");
        assert_eq!(rows[0].occupancy, 90.0);
        assert_eq!(rows[0].occupancy_class, OccupancyClass::High);
        assert_eq!(rows[4].unit_type, "2BR+Den");
        assert_eq!(rows[4].occupancy_class, OccupancyClass::Mid);
        assert_eq!(rows[1].total_units, 150);
        assert_eq!(rows[1].renewals, 50);
    }

    #[test]
    fn test_totals_row() {
        let table = resolve_occupancy(sample_table());
        let metrics = Metrics::from_table(&table);
        let totals = totals_row(&table, &metrics);
        assert_eq!(totals.unit_type, TOTALS_LABEL);
        assert_eq!(totals.total_units, 600);
        assert_eq!(totals.new_leases + totals.renewals, totals.preleased);
        assert_eq!(totals.occupancy, 81.7);
        assert_eq!(totals.occupancy_class, OccupancyClass::Mid);
    }
}
