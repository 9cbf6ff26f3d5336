use tracing::debug;

use crate::schema::{ResolvedRow, ResolvedTable, Table};

/// Round half-up to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Settle every row's occupancy percentage. Runs once per report.
///
/// - no row carries a value: derive `preleased / total_units * 100` for every row
/// - otherwise the table-wide maximum decides the unit: `<= 1` means every value is a
///   fraction and gets scaled by 100, unless any cell was written with `%`
/// - a row missing its value while others carry one is derived from its counts
///
/// All results are rounded to one decimal.
pub fn resolve_occupancy(table: Table) -> ResolvedTable {
    let present: Vec<_> = table.rows().iter().filter_map(|r| r.occupancy_pct).collect();
    let max_present = present
        .iter()
        .map(|o| o.value)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))));
    let any_percent_sign = present.iter().any(|o| o.percent_sign);

    let scale = match max_present {
        Some(max) if max <= 1.0 && !any_percent_sign => {
            debug!(max, "occupancy given as fractions; scaling by 100");
            100.0
        }
        _ => 1.0,
    };

    let rows = table
        .into_rows()
        .into_iter()
        .map(|row| {
            let pct = match row.occupancy_pct {
                Some(o) => round1(o.value * scale),
                None => round1(row.derived_occupancy()),
            };
            ResolvedRow::from_row(row, pct)
        })
        .collect();

    ResolvedTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RawOccupancy, Row};

    fn row(unit_type: &str, total_units: u32, preleased: u32, pct: Option<f64>) -> Row {
        Row {
            unit_type: unit_type.to_string(),
            total_units,
            preleased,
            available: total_units - preleased,
            new_leases: preleased,
            renewals: 0,
            occupancy_pct: pct.map(RawOccupancy::bare),
        }
    }

    fn pcts(table: &ResolvedTable) -> Vec<f64> {
        table.rows.iter().map(|r| r.occupancy_pct).collect()
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(81.666_666), 81.7);
        assert_eq!(round1(81.64), 81.6);
        assert_eq!(round1(81.25), 81.3);
        assert_eq!(round1(90.0), 90.0);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_derived_when_absent() {
        let resolved = resolve_occupancy(Table::new(vec![
            row("Studio", 80, 72, None),
            row("1BR", 150, 120, None),
            row("1BR+Den", 100, 82, None),
            row("3BR", 3, 2, None),
        ]));
        assert_eq!(pcts(&resolved), vec![90.0, 80.0, 82.0, 66.7]);
    }

    #[test]
    fn test_fractions_are_scaled() {
        let resolved = resolve_occupancy(Table::new(vec![
            row("Studio", 80, 72, Some(0.9)),
            row("1BR", 150, 120, Some(0.8)),
            row("2BR", 140, 112, Some(0.8234)),
            row("Full", 10, 10, Some(1.0)),
        ]));
        assert_eq!(pcts(&resolved), vec![90.0, 80.0, 82.3, 100.0]);
    }

    #[test]
    fn test_percentages_pass_through_rounded() {
        // one value above 1 means none of them are fractions
        let resolved = resolve_occupancy(Table::new(vec![
            row("Studio", 80, 72, Some(90.04)),
            row("Tiny", 100, 1, Some(0.5)),
            row("1BR", 150, 120, Some(80.0)),
        ]));
        assert_eq!(pcts(&resolved), vec![90.0, 0.5, 80.0]);
    }

    #[test]
    fn test_missing_cells_are_derived() {
        let resolved = resolve_occupancy(Table::new(vec![
            row("Studio", 80, 72, Some(0.5)),
            row("1BR", 150, 120, None),
        ]));
        assert_eq!(pcts(&resolved), vec![50.0, 80.0]);
    }

    #[test]
    fn test_percent_marked_values_are_never_scaled() {
        let mut studio = row("Studio", 200, 1, None);
        studio.occupancy_pct = Some(RawOccupancy::percent(0.5));
        let mut one_br = row("1BR", 100, 0, None);
        one_br.occupancy_pct = Some(RawOccupancy::percent(0.0));

        let resolved = resolve_occupancy(Table::new(vec![studio, one_br]));
        assert_eq!(pcts(&resolved), vec![0.5, 0.0]);
    }

    #[test]
    fn test_empty_table() {
        assert!(resolve_occupancy(Table::default()).rows.is_empty());
    }
}
