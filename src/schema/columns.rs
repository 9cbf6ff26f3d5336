// src/schema/columns.rs

use csv::StringRecord;

/// Canonical fields of a leasing summary row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    UnitType,
    TotalUnits,
    Preleased,
    NewLeases,
    Renewals,
    OccupancyPct,
    Available,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::UnitType,
        Field::TotalUnits,
        Field::Preleased,
        Field::NewLeases,
        Field::Renewals,
        Field::OccupancyPct,
        Field::Available,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::UnitType => "unit_type",
            Field::TotalUnits => "total_units",
            Field::Preleased => "preleased",
            Field::NewLeases => "new_leases",
            Field::Renewals => "renewals",
            Field::OccupancyPct => "occupancy_pct",
            Field::Available => "available",
        }
    }

    /// Header used for this field in the property-management export.
    pub fn source_header(&self) -> &'static str {
        COLUMN_MAPPING
            .iter()
            .find(|(_, field)| field == self)
            .map(|(header, _)| *header)
            .unwrap_or_else(|| self.as_str())
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::OccupancyPct)
    }
}

/// Source header → canonical field.
pub static COLUMN_MAPPING: &[(&str, Field)] = &[
    ("Unit Type", Field::UnitType),
    ("Rentable Units", Field::TotalUnits),
    ("Pre-Leased - Total", Field::Preleased),
    ("Pre-Leased - New Lease", Field::NewLeases),
    ("Pre-Leased - Renewal", Field::Renewals),
    ("Pre-Leased - %", Field::OccupancyPct),
    ("Projected Availability", Field::Available),
];

fn clean_header(raw: &str) -> &str {
    raw.trim_start_matches('\u{feff}').trim()
}

/// Canonical name for a header. Unknown headers come back trimmed but otherwise untouched.
pub fn canonical_name(header: &str) -> &str {
    let header = clean_header(header);
    COLUMN_MAPPING
        .iter()
        .find(|(source, _)| *source == header)
        .map(|(_, field)| field.as_str())
        .unwrap_or(header)
}

/// Rename every known source header to its canonical field name.
pub fn rename_headers(headers: &StringRecord) -> StringRecord {
    headers.iter().map(canonical_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_known_headers() {
        let headers = StringRecord::from(vec![
            "Unit Type",
            "Rentable Units",
            "Pre-Leased - Total",
            "Pre-Leased - New Lease",
            "Pre-Leased - Renewal",
            "Pre-Leased - %",
            "Projected Availability",
        ]);
        let renamed = rename_headers(&headers);
        assert_eq!(
            renamed.iter().collect::<Vec<_>>(),
            vec![
                "unit_type",
                "total_units",
                "preleased",
                "new_leases",
                "renewals",
                "occupancy_pct",
                "available"
            ]
        );
    }

    #[test]
    fn test_unknown_and_canonical_headers_pass_through() {
        let headers = StringRecord::from(vec!["\u{feff}Unit Type", " Notes ", "total_units"]);
        let renamed = rename_headers(&headers);
        assert_eq!(
            renamed.iter().collect::<Vec<_>>(),
            vec!["unit_type", "Notes", "total_units"]
        );
    }

    #[test]
    fn test_source_header_lookup() {
        assert_eq!(Field::Available.source_header(), "Projected Availability");
        assert!(!Field::OccupancyPct.is_required());
        assert!(Field::ALL.iter().filter(|f| f.is_required()).count() == 6);
    }
}
