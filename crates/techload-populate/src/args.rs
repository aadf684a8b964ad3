//! Output settings shared by the CLI and the populate entry point.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Serialization format for generated jobs.
#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One pretty-printed JSON array
    #[default]
    Json,
    /// One job per line
    Jsonl,
    /// A YAML sequence
    Yaml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Fully resolved inputs for one generate-and-write run.
#[derive(Clone, Debug)]
pub struct PopulateArgs {
    /// Key the jobs are generated from
    pub key: String,

    /// Requested job count; non-positive or absent uses the drawn count
    pub count: Option<i64>,

    /// Date the history timeline walks back from
    pub reference_date: NaiveDate,

    pub format: OutputFormat,

    /// Output file; stdout when absent
    pub output: Option<PathBuf>,

    /// Wrap the jobs in a response envelope
    pub envelope: bool,
}
