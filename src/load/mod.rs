// src/load/mod.rs
use anyhow::{anyhow, bail, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::{
    collections::HashMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

use crate::schema::{rename_headers, Field, RawOccupancy, Row, Table};

pub mod clean;
pub mod sample;

pub use sample::sample_table;

use clean::{clean_str, parse_count, parse_number};

/// Where the report's rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Csv(PathBuf),
    Sample,
}

/// Load the table for `source`. A CSV path that does not exist falls back to the sample
/// table with a notice; a CSV that exists but cannot be parsed is an error.
pub fn load_table(source: &InputSource) -> Result<Table> {
    match source {
        InputSource::Csv(path) if path.exists() => read_csv_path(path),
        InputSource::Csv(path) => {
            warn!(
                path = %path.display(),
                "CSV not found. Using sample data for demonstration."
            );
            Ok(sample_table())
        }
        InputSource::Sample => {
            info!("using sample data");
            Ok(sample_table())
        }
    }
}

#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_csv_path<P: AsRef<Path>>(path: P) -> Result<Table> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;
    let table =
        read_csv(file).with_context(|| format!("Failed to parse CSV file: {:?}", path.as_ref()))?;
    info!(rows = table.len(), "loaded unit types");
    Ok(table)
}

/// Read a leasing summary from any reader. Headers are renamed to canonical fields,
/// rows with no rentable units are dropped.
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rename_headers(rdr.headers().context("reading CSV header")?);
    let columns = ColumnIndex::locate(&headers)?;
    debug!(headers = ?headers, "renamed headers");

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let record = result.context("reading CSV record")?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match columns
            .parse_row(&record)
            .with_context(|| format!("line {}", line))?
        {
            Some(row) => rows.push(row),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "dropped rows without rentable units");
    }
    Ok(Table::new(rows))
}

/// Position of each canonical field in the renamed header row.
struct ColumnIndex {
    positions: HashMap<Field, usize>,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let mut positions = HashMap::new();
        for field in Field::ALL {
            match headers.iter().position(|h| h == field.as_str()) {
                Some(idx) => {
                    positions.insert(field, idx);
                }
                None if field.is_required() => bail!(
                    "missing column {:?} (expected header {:?})",
                    field.as_str(),
                    field.source_header()
                ),
                None => {}
            }
        }
        Ok(Self { positions })
    }

    fn cell<'r>(&self, record: &'r StringRecord, field: Field) -> Option<&'r str> {
        self.positions.get(&field).and_then(|&i| record.get(i))
    }

    fn count(&self, record: &StringRecord, field: Field) -> Result<Option<i64>> {
        let raw = self.cell(record, field).unwrap_or_default();
        parse_count(raw).with_context(|| format!("column {:?}", field.as_str()))
    }

    fn required_count(&self, record: &StringRecord, field: Field) -> Result<u32> {
        let value = self
            .count(record, field)?
            .ok_or_else(|| anyhow!("column {:?} is empty", field.as_str()))?;
        u32::try_from(value)
            .map_err(|_| anyhow!("column {:?} out of range: {}", field.as_str(), value))
    }

    /// `Ok(None)` when the row has no rentable units.
    fn parse_row(&self, record: &StringRecord) -> Result<Option<Row>> {
        let total_units = match self.count(record, Field::TotalUnits)? {
            Some(n) if n > 0 => u32::try_from(n)
                .map_err(|_| anyhow!("column \"total_units\" out of range: {}", n))?,
            _ => return Ok(None),
        };

        let occupancy_pct = match self.cell(record, Field::OccupancyPct) {
            Some(raw) => parse_number(raw)
                .context("column \"occupancy_pct\"")?
                .map(|n| RawOccupancy {
                    value: n.value,
                    percent_sign: n.percent_sign,
                }),
            None => None,
        };

        Ok(Some(Row {
            unit_type: clean_str(self.cell(record, Field::UnitType).unwrap_or_default())
                .to_string(),
            total_units,
            preleased: self.required_count(record, Field::Preleased)?,
            available: self.required_count(record, Field::Available)?,
            new_leases: self.required_count(record, Field::NewLeases)?,
            renewals: self.required_count(record, Field::Renewals)?,
            occupancy_pct,
        }))
    }
}
