//! Command handlers for the `techload` binary.

pub mod generate;
pub mod inspect;

pub use generate::{run_generate, GenerateArgs};
pub use inspect::{inspect, run_inspect, InspectArgs, Inspection};
