use crate::schema::{Row, Table};

/// (unit_type, total_units, preleased, available, new_leases, renewals)
const SAMPLE_ROWS: [(&str, u32, u32, u32, u32, u32); 6] = [
    ("Studio", 80, 72, 8, 45, 27),
    ("1BR", 150, 120, 30, 70, 50),
    ("1BR+Den", 100, 82, 18, 50, 32),
    ("2BR", 140, 112, 28, 65, 47),
    ("2BR+Den", 80, 60, 20, 35, 25),
    ("3BR", 50, 44, 6, 25, 19),
];

/// Built-in demonstration data used when no CSV is available.
pub fn sample_table() -> Table {
    Table::new(
        SAMPLE_ROWS
            .iter()
            .map(
                |&(unit_type, total_units, preleased, available, new_leases, renewals)| Row {
                    unit_type: unit_type.to_string(),
                    total_units,
                    preleased,
                    available,
                    new_leases,
                    renewals,
                    occupancy_pct: None,
                },
            )
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_table_literals() {
        let table = sample_table();
        assert_eq!(table.len(), 6);

        let rows = table.rows();
        assert_eq!(rows[0].unit_type, "Studio");
        assert_eq!(rows[5].unit_type, "3BR");

        let units: u32 = rows.iter().map(|r| r.total_units).sum();
        let preleased: u32 = rows.iter().map(|r| r.preleased).sum();
        let available: u32 = rows.iter().map(|r| r.available).sum();
        assert_eq!((units, preleased, available), (600, 490, 110));

        for r in rows {
            assert_eq!(r.new_leases + r.renewals, r.preleased, "{}", r.unit_type);
            assert!(r.occupancy_pct.is_none());
        }
    }
}
