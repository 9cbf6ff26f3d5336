// src/process/mod.rs
pub mod charts;
pub mod metrics;
pub mod occupancy;
pub mod table;

pub use charts::{AvailabilityChart, ChartSet, DonutChart, OccupancyChart, StackedChart};
pub use metrics::Metrics;
pub use occupancy::{resolve_occupancy, round1};
pub use table::{table_rows, totals_row};
