//! Customer location generator.

use crate::cursor::Draw;
use crate::sampling::Sampling;
use crate::tables::STATE_CAPITALS;
use techload_types::Location;

/// Draw a 5-digit zip, then a state capital, and merge in the street address.
pub fn generate_location<D: Draw + ?Sized>(draws: &mut D, street_address: &str) -> Location {
    let zip = draws.digits(5, None);
    let capital = draws.pick(&STATE_CAPITALS);

    Location {
        zip: Some(zip),
        street_address: street_address.to_string(),
        state: capital.state.to_string(),
        city: capital.city.to_string(),
        lat: capital.lat,
        long: capital.long,
    }
}
