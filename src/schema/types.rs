// src/schema/types.rs

use serde::Serialize;

/// Occupancy exactly as the source cell gave it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawOccupancy {
    pub value: f64,
    /// The cell carried a `%` suffix, so `value` is already a percentage.
    pub percent_sign: bool,
}

impl RawOccupancy {
    /// A bare number: either a 0-1 fraction or a percentage, decided table-wide.
    pub fn bare(value: f64) -> Self {
        Self {
            value,
            percent_sign: false,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            percent_sign: true,
        }
    }
}

/// One unit type as read from the source table.
#[derive(Debug, PartialEq, Clone)]
pub struct Row {
    pub unit_type: String,
    pub total_units: u32,
    pub preleased: u32,
    pub available: u32,
    pub new_leases: u32,
    pub renewals: u32,
    pub occupancy_pct: Option<RawOccupancy>,
}

impl Row {
    /// `preleased / total_units * 100`, unrounded. Zero when the row has no units.
    pub fn derived_occupancy(&self) -> f64 {
        if self.total_units == 0 {
            return 0.0;
        }
        f64::from(self.preleased) / f64::from(self.total_units) * 100.0
    }
}

/// Ordered rows with every zero-unit row removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into_iter().filter(|r| r.total_units > 0).collect(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A row whose occupancy percentage has been settled.
#[derive(Debug, PartialEq, Clone)]
pub struct ResolvedRow {
    pub unit_type: String,
    pub total_units: u32,
    pub preleased: u32,
    pub available: u32,
    pub new_leases: u32,
    pub renewals: u32,
    pub occupancy_pct: f64,
}

impl ResolvedRow {
    pub fn from_row(row: Row, occupancy_pct: f64) -> Self {
        Self {
            unit_type: row.unit_type,
            total_units: row.total_units,
            preleased: row.preleased,
            available: row.available,
            new_leases: row.new_leases,
            renewals: row.renewals,
            occupancy_pct,
        }
    }
}

/// Output of the occupancy normalization step; the input to every report component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTable {
    pub rows: Vec<ResolvedRow>,
}

impl ResolvedTable {
    pub fn sum_by<F>(&self, f: F) -> u64
    where
        F: Fn(&ResolvedRow) -> u32,
    {
        self.rows.iter().map(|r| u64::from(f(r))).sum()
    }

    pub fn unit_types(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.unit_type.clone()).collect()
    }
}

/// Occupancy tier used for the table's CSS hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyClass {
    Low,
    Mid,
    High,
}

impl OccupancyClass {
    pub const MID_FLOOR: f64 = 70.0;
    pub const HIGH_FLOOR: f64 = 90.0;

    pub fn classify(occupancy: f64) -> Self {
        if occupancy < Self::MID_FLOOR {
            OccupancyClass::Low
        } else if occupancy < Self::HIGH_FLOOR {
            OccupancyClass::Mid
        } else {
            OccupancyClass::High
        }
    }
}

/// One display row of the report table.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TableRow {
    pub unit_type: String,
    pub total_units: u64,
    pub preleased: u64,
    pub available: u64,
    pub new_leases: u64,
    pub renewals: u64,
    pub occupancy: f64,
    pub occupancy_class: OccupancyClass,
}
