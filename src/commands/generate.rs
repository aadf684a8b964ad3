//! `generate` command handler.

use crate::config::{Overrides, Profile, Settings};
use crate::key::validate_key;
use anyhow::Context;
use chrono::Local;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use techload_populate::{populate, JobsWriter, OutputFormat, PopulateArgs};
use techload_types::JobsResponse;
use tracing::info;

/// Arguments for `techload generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Key the jobs are derived from (e.g. ab123c)
    #[arg(long, short = 'k')]
    pub key: String,

    /// Number of jobs; zero, negative or non-numeric values use the count drawn from the key.
    /// Unbounded; only JSON Lines without --envelope streams large counts
    #[arg(long, short = 'n', env = "TECHLOAD_COUNT", allow_hyphen_values = true)]
    pub count: Option<String>,

    /// Reference date for history timelines: today, yesterday, YYYY-MM-DD or M/D/YYYY
    #[arg(long, env = "TECHLOAD_DATE")]
    pub date: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, env = "TECHLOAD_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Wrap output in a { flowStatus, flowStatusMessage, jobData } envelope
    #[arg(long)]
    pub envelope: bool,

    /// Accept keys that do not match the two letters, three digits, one letter-or-digit shape
    #[arg(long)]
    pub allow_any_key: bool,

    /// YAML profile supplying defaults for the options above
    #[arg(long, env = "TECHLOAD_PROFILE")]
    pub profile: Option<PathBuf>,
}

impl GenerateArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            count: self.count.clone(),
            date: self.date.clone(),
            format: self.format,
            envelope: self.envelope,
            allow_any_key: self.allow_any_key,
        }
    }
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let profile = match &args.profile {
        Some(path) => Profile::from_file(path)
            .with_context(|| format!("Failed to load profile from {path:?}"))?,
        None => Profile::default(),
    };
    let settings = Settings::resolve(&args.overrides(), &profile, Local::now().date_naive())?;

    if !settings.allow_any_key {
        if let Err(e) = validate_key(&args.key) {
            if settings.envelope {
                write_failure(&settings, args.output.as_ref(), &e.to_string())?;
            }
            return Err(e).context("Refusing to generate jobs (use --allow-any-key to bypass)");
        }
    }

    let populate_args = PopulateArgs {
        key: args.key,
        count: settings.count,
        reference_date: settings.reference_date,
        format: settings.format,
        output: args.output,
        envelope: settings.envelope,
    };
    let metrics = populate(&populate_args).context("Failed to write jobs")?;

    info!(
        "Generated {} jobs ({} bytes) in {:?}",
        metrics.jobs_written, metrics.bytes_written, metrics.duration
    );
    Ok(())
}

fn write_failure(
    settings: &Settings,
    output: Option<&PathBuf>,
    message: &str,
) -> anyhow::Result<()> {
    let writer = JobsWriter::new(settings.format);
    let response = JobsResponse::failure(message);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {path:?}"))?;
            writer.write_response_to(&response, BufWriter::new(file))?;
        }
        None => {
            writer.write_response_to(&response, io::stdout().lock())?;
        }
    }
    Ok(())
}
