pub mod columns;
pub mod types;

pub use columns::{canonical_name, rename_headers, Field, COLUMN_MAPPING};
pub use types::{OccupancyClass, RawOccupancy, ResolvedRow, ResolvedTable, Row, Table, TableRow};
