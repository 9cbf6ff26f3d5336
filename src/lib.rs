pub mod config;
pub mod load;
pub mod pipeline;
pub mod process;
pub mod render;
pub mod schema;

pub use config::{Args, ReportConfig, ReportRequest};
pub use pipeline::{generate_report, ReportSummary};
