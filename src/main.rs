use anyhow::Result;
use chrono::Local;
use clap::Parser;
use prelease_report::{generate_report, Args, ReportRequest};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) resolve input, output, template ─────────────────────────
    let request = ReportRequest::from_args(Args::parse())?;
    debug!(?request, "resolved request");

    // ─── 3) build + write the report ────────────────────────────────
    let summary = generate_report(&request, Local::now().date_naive())?;
    info!(path = %summary.path.display(), "done");

    println!("{}", summary);
    Ok(())
}
