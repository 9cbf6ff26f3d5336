//! Chart-ready payloads. Field names are the keys the dashboard's Plotly code reads.

use serde::Serialize;

use crate::schema::ResolvedTable;

pub const DONUT_LABELS: [&str; 3] = ["New Leases", "Renewals", "Available"];

/// Horizontal bar: pre-lease % by unit type, ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Composition of all units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutChart {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// New leases vs renewals per unit type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedChart {
    pub labels: Vec<String>,
    pub new_leases: Vec<u32>,
    pub renewals: Vec<u32>,
}

/// Pre-leased vs available per unit type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityChart {
    pub labels: Vec<String>,
    pub preleased: Vec<u32>,
    pub available: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub occupancy_chart: OccupancyChart,
    pub donut_chart: DonutChart,
    pub stacked_chart: StackedChart,
    pub availability_chart: AvailabilityChart,
}

impl ChartSet {
    pub fn from_table(table: &ResolvedTable) -> Self {
        Self {
            occupancy_chart: OccupancyChart::from_table(table),
            donut_chart: DonutChart::from_table(table),
            stacked_chart: StackedChart::from_table(table),
            availability_chart: AvailabilityChart::from_table(table),
        }
    }
}

impl OccupancyChart {
    pub fn from_table(table: &ResolvedTable) -> Self {
        let mut sorted: Vec<_> = table.rows.iter().collect();
        // stable: ties keep source order
        sorted.sort_by(|a, b| a.occupancy_pct.total_cmp(&b.occupancy_pct));

        Self {
            labels: sorted.iter().map(|r| r.unit_type.clone()).collect(),
            values: sorted.iter().map(|r| r.occupancy_pct).collect(),
        }
    }
}

impl DonutChart {
    pub fn from_table(table: &ResolvedTable) -> Self {
        Self {
            labels: DONUT_LABELS.iter().map(|s| s.to_string()).collect(),
            values: vec![
                table.sum_by(|r| r.new_leases),
                table.sum_by(|r| r.renewals),
                table.sum_by(|r| r.available),
            ],
        }
    }
}

impl StackedChart {
    pub fn from_table(table: &ResolvedTable) -> Self {
        Self {
            labels: table.unit_types(),
            new_leases: table.rows.iter().map(|r| r.new_leases).collect(),
            renewals: table.rows.iter().map(|r| r.renewals).collect(),
        }
    }
}

impl AvailabilityChart {
    pub fn from_table(table: &ResolvedTable) -> Self {
        Self {
            labels: table.unit_types(),
            preleased: table.rows.iter().map(|r| r.preleased).collect(),
            available: table.rows.iter().map(|r| r.available).collect(),
        }
    }
}
