// src/pipeline.rs
use anyhow::Result;
use chrono::NaiveDate;
use std::{fmt, path::PathBuf};
use tracing::{info, warn};

use crate::config::ReportRequest;
use crate::load::load_table;
use crate::process::{resolve_occupancy, table_rows, totals_row, ChartSet, Metrics};
use crate::render::{write_report, ReportContext, Renderer};
use crate::schema::Table;

/// What a finished run reports back to the console.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub path: PathBuf,
    pub metrics: Metrics,
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());

        writeln!(f, "Report generated: {}", self.path.display())?;
        writeln!(f, "Total Units: {}", self.metrics.total_units)?;
        writeln!(f, "Overall Pre-Lease: {:.1}%", self.metrics.overall_occupancy)?;
        writeln!(f, "Projected Availability: {}", self.metrics.total_available)?;
        writeln!(f)?;
        write!(
            f,
            "Open {} in a browser to view. Use Cmd+P (Mac) or Ctrl+P (Windows) to print to PDF.",
            file_name
        )
    }
}

/// Render the dashboard HTML for an already loaded table.
pub fn render_table(
    table: Table,
    renderer: &Renderer,
    date: NaiveDate,
) -> Result<(String, Metrics)> {
    let resolved = resolve_occupancy(table);

    let metrics = Metrics::from_table(&resolved);
    let charts = ChartSet::from_table(&resolved);
    let totals = totals_row(&resolved, &metrics);
    let context = ReportContext::new(&metrics, &charts, table_rows(&resolved), totals, date)?;

    Ok((renderer.render(&context)?, metrics))
}

/// Load → aggregate → render → write.
pub fn generate_report(request: &ReportRequest, date: NaiveDate) -> Result<ReportSummary> {
    // template errors surface before any input is read
    let renderer = Renderer::new(request.template.as_deref())?;

    let table = load_table(&request.source)?;
    if table.is_empty() {
        warn!("no unit types with rentable units; the report will be empty");
    }
    info!(unit_types = table.len(), "table ready");

    let (html, metrics) = render_table(table, &renderer, date)?;
    let path = write_report(&request.output, &html)?;

    Ok(ReportSummary { path, metrics })
}
