//! Deterministic synthetic job-record generator.
//!
//! A short key (e.g. `ab123c`) is hashed into a seed; the seed drives a
//! counter-based pseudorandom cursor; the cursor's draws are consumed in a
//! fixed order to build a list of service tickets. The same key, requested
//! count and reference date always yield a byte-identical list.
//!
//! # Architecture
//!
//! ```text
//! key ("ab123c")
//!        │ derive_seed
//!        ▼
//! ┌──────────────────┐
//! │    TechLoad      │
//! │                  │
//! │  - cursor        │  seed + position -> draw in [0, 1)
//! │  - counts        │  two draws, always consumed
//! │  - reference date│
//! └────────┬─────────┘
//!          │ field generators, fixed draw order
//!          ▼
//!    Vec<Job> { person, location, history, facilities, services, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use techload_generator::TechLoad;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let mut generator = TechLoad::new("ab123c", None, date);
//! assert_eq!(generator.job_count(), 5);
//!
//! let job = generator.next_job().unwrap();
//! println!("{} {}", job.first_name, job.last_name);
//! ```
//!
//! # Draw order
//!
//! Output is defined by the order in which draws are consumed. Per job:
//!
//! - first name, last name, street address
//! - job type, transport type
//! - account number, zip, state capital
//! - appointment window, email, phone
//! - history, facilities, services, creature

pub mod cursor;
pub mod generator;
pub mod generators;
pub mod sampling;
pub mod seed;
pub mod tables;

// Re-exports for convenience
pub use cursor::{Cursor, Draw};
pub use generator::{generate, JobIterator, TechLoad};
pub use sampling::{Sampling, MAX_DIGITS};
pub use seed::derive_seed;
