//! Job writers for JSON, JSON Lines and YAML output.

use crate::args::{OutputFormat, PopulateArgs};
use crate::error::PopulateError;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use techload_generator::TechLoad;
use techload_types::{Job, JobsResponse};
use tracing::{debug, info};

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of jobs written.
    pub jobs_written: u64,
    /// Bytes written to the sink.
    pub bytes_written: u64,
    /// Total time taken.
    pub duration: Duration,
}

impl WriteMetrics {
    /// Calculate jobs per second.
    pub fn jobs_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.jobs_written as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Serializes job lists in one [`OutputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JobsWriter {
    format: OutputFormat,
    envelope: bool,
}

impl JobsWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            envelope: false,
        }
    }

    /// Wrap written jobs in a SUCCESS [`JobsResponse`].
    pub fn with_envelope(mut self, envelope: bool) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether jobs are written one at a time as they are generated.
    ///
    /// Only bare JSON Lines streams. JSON arrays, YAML sequences and
    /// envelopes are serialized from the full list, so they hold every job
    /// in memory at once.
    pub fn is_streaming(&self) -> bool {
        self.format == OutputFormat::Jsonl && !self.envelope
    }

    /// Write jobs from an iterator to a new file at `path`.
    pub fn write_stream_to_path<I, P>(&self, jobs: I, path: P) -> Result<WriteMetrics, PopulateError>
    where
        I: IntoIterator<Item = Job>,
        P: AsRef<Path>,
    {
        if !self.is_streaming() {
            let jobs: Vec<Job> = jobs.into_iter().collect();
            return self.write_to_path(&jobs, path);
        }

        let path = path.as_ref();
        info!("Streaming jobs as {} to '{}'", self.format, path.display());

        let file = File::create(path)?;
        let metrics =
            self.write_stream_to(jobs, BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))?;

        info!(
            "Write complete: {} jobs, {} bytes in {:?} ({:.2} jobs/sec)",
            metrics.jobs_written,
            metrics.bytes_written,
            metrics.duration,
            metrics.jobs_per_second()
        );
        Ok(metrics)
    }

    /// Write jobs from an iterator to `writer` and flush it.
    ///
    /// When [`is_streaming`](Self::is_streaming) each job is serialized and
    /// dropped before the next one is pulled; otherwise the iterator is
    /// collected first.
    pub fn write_stream_to<I, W>(&self, jobs: I, writer: W) -> Result<WriteMetrics, PopulateError>
    where
        I: IntoIterator<Item = Job>,
        W: Write,
    {
        if !self.is_streaming() {
            let jobs: Vec<Job> = jobs.into_iter().collect();
            return self.write_to(&jobs, writer);
        }

        let start_time = Instant::now();
        let mut sink = CountingWriter::new(writer);
        let jobs_written = write_lines(&mut sink, jobs)?;
        sink.flush()?;

        Ok(WriteMetrics {
            jobs_written,
            bytes_written: sink.count,
            duration: start_time.elapsed(),
        })
    }

    /// Write `jobs` to a new file at `path`, replacing any existing file.
    pub fn write_to_path<P: AsRef<Path>>(
        &self,
        jobs: &[Job],
        path: P,
    ) -> Result<WriteMetrics, PopulateError> {
        let path = path.as_ref();
        info!(
            "Writing {} jobs as {} to '{}'",
            jobs.len(),
            self.format,
            path.display()
        );

        let file = File::create(path)?;
        let metrics = self.write_to(jobs, BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))?;

        info!(
            "Write complete: {} jobs, {} bytes in {:?} ({:.2} jobs/sec)",
            metrics.jobs_written,
            metrics.bytes_written,
            metrics.duration,
            metrics.jobs_per_second()
        );
        Ok(metrics)
    }

    /// Write `jobs` to `writer` and flush it.
    pub fn write_to<W: Write>(&self, jobs: &[Job], writer: W) -> Result<WriteMetrics, PopulateError> {
        if self.envelope {
            return self.write_response_to(&JobsResponse::success(jobs.to_vec()), writer);
        }

        let start_time = Instant::now();
        let mut sink = CountingWriter::new(writer);

        match self.format {
            OutputFormat::Json => write_json(&mut sink, &jobs)?,
            OutputFormat::Jsonl => {
                write_lines(&mut sink, jobs)?;
            }
            OutputFormat::Yaml => serde_yaml::to_writer(&mut sink, &jobs)?,
        }
        sink.flush()?;

        Ok(WriteMetrics {
            jobs_written: jobs.len() as u64,
            bytes_written: sink.count,
            duration: start_time.elapsed(),
        })
    }

    /// Write a response envelope to `writer` and flush it.
    ///
    /// JSON Lines output puts the whole envelope on one line.
    pub fn write_response_to<W: Write>(
        &self,
        response: &JobsResponse,
        writer: W,
    ) -> Result<WriteMetrics, PopulateError> {
        let start_time = Instant::now();
        let mut sink = CountingWriter::new(writer);

        match self.format {
            OutputFormat::Json => write_json(&mut sink, response)?,
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut sink, response)?;
                writeln!(sink)?;
            }
            OutputFormat::Yaml => serde_yaml::to_writer(&mut sink, response)?,
        }
        sink.flush()?;

        let jobs_written = response
            .job_data
            .as_ref()
            .map_or(0, |data| data.jobs.len() as u64);
        Ok(WriteMetrics {
            jobs_written,
            bytes_written: sink.count,
            duration: start_time.elapsed(),
        })
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<(), PopulateError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// One JSON document per line; returns the number of lines written.
fn write_lines<W, I>(writer: &mut W, items: I) -> Result<u64, PopulateError>
where
    W: Write,
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut written = 0u64;
    for item in items {
        serde_json::to_writer(&mut *writer, &item)?;
        writeln!(writer)?;
        written += 1;
        if written % 1000 == 0 {
            debug!("Written {} jobs", written);
        }
    }
    Ok(written)
}

/// Generate jobs for `args` and write them to the requested sink.
pub fn populate(args: &PopulateArgs) -> Result<WriteMetrics, PopulateError> {
    let mut generator = TechLoad::new(&args.key, args.count, args.reference_date);
    info!(
        "Generating {} jobs for key '{}' (seed {}, reference date {})",
        generator.job_count(),
        args.key,
        generator.seed(),
        args.reference_date
    );

    let writer = JobsWriter::new(args.format).with_envelope(args.envelope);
    match &args.output {
        Some(path) => writer.write_stream_to_path(generator.jobs(), path),
        None => writer.write_stream_to(generator.jobs(), io::stdout().lock()),
    }
}

/// Pass-through writer that counts bytes.
struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
