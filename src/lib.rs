//! TechLoad library
//!
//! Generates deterministic synthetic field-technician service tickets from a
//! short key. The same key, requested count and reference date always yield
//! the same list of jobs.
//!
//! # Crates
//!
//! - `techload_types` - Job record model and response envelope
//! - `techload_generator` - Seed derivation, cursor engine and field generators
//! - `techload_populate` - JSON, JSON Lines and YAML writers
//!
//! This crate adds what sits in front of the generator: key-shape
//! validation, requested-count parsing and layered configuration for the
//! `techload` binary.
//!
//! # CLI Usage
//!
//! ```bash
//! # Jobs for a key, pretty JSON on stdout
//! techload generate --key ab123c
//!
//! # Twelve jobs as JSON Lines, history walking back from a fixed date
//! techload generate --key ab123c --count 12 --date 2024-01-15 --format jsonl -o jobs.jsonl
//!
//! # Seed, drawn job count and the first cursor draws
//! techload inspect --key ab123c
//! ```

pub mod commands;
pub mod config;
pub mod count;
pub mod key;

pub use config::{parse_reference_date, DateParseError, Profile, ProfileError, Settings};
pub use count::RequestedCount;
pub use key::{validate_key, KeyError, KeyPattern};

// Re-export the workspace crates for convenience
pub use techload_generator as generator;
pub use techload_populate as populate;
pub use techload_types as types;
