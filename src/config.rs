// src/config.rs
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::load::InputSource;

/// Export file picked up when no input is named.
pub const DEFAULT_INPUT: &str = "Pre-Lease - Summary.csv";
pub const DEFAULT_OUTPUT: &str = "report.html";

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Generate a dark-themed pre-lease HTML dashboard from a leasing summary CSV"
)]
pub struct Args {
    /// Leasing summary CSV; a missing file falls back to sample data
    pub input: Option<PathBuf>,
    /// Ignore any CSV and use the built-in sample data
    #[arg(long)]
    pub sample: bool,
    /// Where to write the report [default: report.html]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Handlebars template to use instead of the built-in one
    #[arg(long)]
    pub template: Option<PathBuf>,
    /// YAML file with default_input / output / template
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Settings that may come from a YAML file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub default_input: PathBuf,
    pub output: PathBuf,
    pub template: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            template: None,
        }
    }
}

impl ReportConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("parsing report config")
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }
}

/// Fully resolved inputs of one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub source: InputSource,
    pub output: PathBuf,
    pub template: Option<PathBuf>,
}

impl ReportRequest {
    /// CLI flags win over the config file, which wins over built-in defaults.
    pub fn resolve(args: Args, config: ReportConfig) -> Self {
        let source = if args.sample {
            InputSource::Sample
        } else {
            InputSource::Csv(args.input.unwrap_or(config.default_input))
        };

        Self {
            source,
            output: args.output.unwrap_or(config.output),
            template: args.template.or(config.template),
        }
    }

    /// Load the config file named on the command line, if any, and resolve.
    pub fn from_args(args: Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => ReportConfig::from_yaml_file(path)?,
            None => ReportConfig::default(),
        };
        Ok(Self::resolve(args, config))
    }
}
