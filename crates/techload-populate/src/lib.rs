//! Job output for techload.
//!
//! Serializes generated job lists to a file or stdout as a pretty JSON
//! array, JSON Lines or a YAML sequence, optionally wrapped in a response
//! envelope, and reports write metrics.
//!
//! # Example
//!
//! ```ignore
//! use techload_populate::{JobsWriter, OutputFormat};
//!
//! let jobs = techload_generator::generate("ab123c", None, reference_date);
//! let metrics = JobsWriter::new(OutputFormat::Jsonl).write_to_path(&jobs, "jobs.jsonl")?;
//! println!("Wrote {} jobs in {:?}", metrics.jobs_written, metrics.duration);
//! ```

pub mod args;
pub mod error;
pub mod writer;

pub use args::{OutputFormat, PopulateArgs};
pub use error::PopulateError;
pub use writer::{populate, JobsWriter, WriteMetrics};
