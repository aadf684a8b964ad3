//! Field generators for job records.
//!
//! Each generator takes the draw source by `&mut` and consumes a fixed
//! pattern of draws for a given branch. Generators never look at anything
//! but their arguments and the draws, which keeps a record a pure function
//! of the key, the requested count and the reference date.

pub mod address;
pub mod creature;
pub mod facility;
pub mod history;
pub mod location;
pub mod person;
pub mod services;

use crate::cursor::Draw;
use crate::sampling::Sampling;
use crate::tables::APPOINTMENT_WINDOWS;
use techload_types::{JobType, TransportType};

pub use address::{
    generate_facility_address, generate_nearby_facility_address, generate_street_address,
};
pub use creature::generate_creature;
pub use facility::generate_facilities;
pub use history::generate_history;
pub use location::generate_location;
pub use person::{generate_email, generate_first_name, generate_last_name};
pub use services::generate_services;

/// Draw a job type. One draw.
pub fn generate_job_type<D: Draw + ?Sized>(draws: &mut D) -> JobType {
    *draws.pick(&JobType::ALL)
}

/// Draw a transport type for a job.
///
/// POTS jobs always ride copper. Other jobs flip a coin first and pick
/// copper on heads, fiber otherwise. One draw for POTS, two for the rest.
pub fn generate_transport_type<D: Draw + ?Sized>(draws: &mut D, job_type: JobType) -> TransportType {
    if job_type == JobType::Pots || draws.chance(0.5) {
        *draws.pick(&TransportType::COPPER)
    } else {
        *draws.pick(&TransportType::FIBER)
    }
}

/// Draw an appointment window. One draw.
pub fn generate_appointment<D: Draw + ?Sized>(draws: &mut D) -> String {
    draws.pick(&APPOINTMENT_WINDOWS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::Scripted;

    #[test]
    fn test_pots_skips_coin_flip() {
        // 0.6 picks POTS, 0.99 then picks the last copper transport directly.
        let mut draws = Scripted::new(&[0.6, 0.99]);
        let job_type = generate_job_type(&mut draws);
        assert_eq!(job_type, JobType::Pots);
        assert_eq!(generate_transport_type(&mut draws, job_type), TransportType::FttnBp);
        assert_eq!(draws.consumed(), 2);
    }

    #[test]
    fn test_coin_flip_selects_fiber() {
        let mut draws = Scripted::new(&[0.7, 0.5]);
        let transport = generate_transport_type(&mut draws, JobType::Repair);
        assert_eq!(transport, TransportType::FttpXgsPon);

        let mut draws = Scripted::new(&[0.2, 0.0]);
        let transport = generate_transport_type(&mut draws, JobType::Install);
        assert_eq!(transport, TransportType::IpCo);
    }

    #[test]
    fn test_appointment_window() {
        let mut draws = Scripted::new(&[0.99]);
        assert_eq!(generate_appointment(&mut draws), "4-8");
    }
}
