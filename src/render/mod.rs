// src/render/mod.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::process::{ChartSet, Metrics};
use crate::schema::TableRow;

pub const TEMPLATE_NAME: &str = "report";
pub const DATE_FORMAT: &str = "%B %d, %Y";

const BUILTIN_TEMPLATE: &str = include_str!("../../templates/report.html");

/// `1234567` → `1,234,567`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

handlebars_helper!(thousands: |n: u64| format_thousands(n));
handlebars_helper!(pct: |v: f64| format!("{:.1}", v));

/// Serialize a chart payload for embedding inside a `<script>` block.
fn embed_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).context("serializing chart payload")?;
    Ok(json.replace("</", "<\\/"))
}

/// Every value the report template reads.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub report_date: String,
    pub total_units: u64,
    pub overall_occupancy: f64,
    pub total_available: u64,
    pub total_preleased: u64,
    pub occupancy_chart_data: String,
    pub donut_chart_data: String,
    pub stacked_chart_data: String,
    pub availability_chart_data: String,
    pub table_data: Vec<TableRow>,
    pub totals: TableRow,
}

impl ReportContext {
    pub fn new(
        metrics: &Metrics,
        charts: &ChartSet,
        table_data: Vec<TableRow>,
        totals: TableRow,
        date: NaiveDate,
    ) -> Result<Self> {
        Ok(Self {
            report_date: date.format(DATE_FORMAT).to_string(),
            total_units: metrics.total_units,
            overall_occupancy: metrics.overall_occupancy,
            total_available: metrics.total_available,
            total_preleased: metrics.total_preleased,
            occupancy_chart_data: embed_json(&charts.occupancy_chart)?,
            donut_chart_data: embed_json(&charts.donut_chart)?,
            stacked_chart_data: embed_json(&charts.stacked_chart)?,
            availability_chart_data: embed_json(&charts.availability_chart)?,
            table_data,
            totals,
        })
    }
}

/// Handlebars registry holding the one report template.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Use the template at `template`, or the built-in one when `None`.
    pub fn new(template: Option<&Path>) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_helper("thousands", Box::new(thousands));
        registry.register_helper("pct", Box::new(pct));

        match template {
            Some(path) => {
                debug!(path = %path.display(), "loading template file");
                registry
                    .register_template_file(TEMPLATE_NAME, path)
                    .with_context(|| format!("Failed to load template: {:?}", path))?;
            }
            None => registry
                .register_template_string(TEMPLATE_NAME, BUILTIN_TEMPLATE)
                .context("Failed to compile built-in template")?,
        }

        Ok(Self { registry })
    }

    pub fn render(&self, context: &ReportContext) -> Result<String> {
        self.registry
            .render(TEMPLATE_NAME, context)
            .context("Failed to render report template")
    }
}

/// Write `html` to `path` through a temporary file in the same directory, so the
/// destination is either replaced whole or left untouched. Returns the absolute path.
#[tracing::instrument(level = "info", skip(path, html), fields(path = %path.display(), bytes = html.len()))]
pub fn write_report(path: &Path, html: &str) -> Result<PathBuf> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir)
        .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;
    tmp.write_all(html.as_bytes())
        .with_context(|| format!("Failed to write report: {:?}", path))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush report: {:?}", path))?;

    // temp files are created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .with_context(|| format!("Failed to set permissions on {:?}", tmp.path()))?;
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to move report into place: {:?}", path))?;

    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    info!(path = %absolute.display(), "wrote report");
    Ok(absolute)
}
