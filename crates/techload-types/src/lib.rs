//! Record types for the techload generator.
//!
//! This crate holds the output model shared by the generator, the writers
//! and the CLI:
//!
//! - [`Job`] - One synthetic service ticket
//! - [`Location`], [`HistoryEntry`], [`Facility`], [`Services`], [`Creature`] - Ticket parts
//! - [`JobType`], [`TransportType`], [`HistoryCategory`] - Closed category sets
//! - [`JobsResponse`] - The envelope a route layer hands back to its caller
//!
//! # Architecture
//!
//! ```text
//! techload-types (this crate)
//!    │
//!    ├─── techload-generator  (builds Jobs from a key)
//!    ├─── techload-populate   (writes Jobs as JSON / JSONL / YAML)
//!    └─── techload            (CLI, key validation, configuration)
//! ```
//!
//! All records serialize with the camelCase field names of the ticket wire
//! shape, e.g. `firstName`, `transportType`, `internetSpeed`.

pub mod job;
pub mod response;
pub mod types;

// Re-exports for convenience
pub use job::{Creature, Facility, HistoryEntry, Job, Location, Services, Sprites, Wiring};
pub use response::{FlowStatus, JobData, JobsResponse};
pub use types::{HistoryCategory, JobType, TransportType};
