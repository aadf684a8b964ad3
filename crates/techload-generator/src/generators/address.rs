//! Street and facility address generators.

use crate::cursor::Draw;
use crate::sampling::Sampling;
use crate::tables::{FACILITY_PREFIXES, STREET_NAMES, STREET_TYPES};

/// Generate `"<3-5 digit number> <street> <type>"`, e.g. `"637 Washington St"`.
///
/// Four draws: two for the house number, one each for name and type.
pub fn generate_street_address<D: Draw + ?Sized>(draws: &mut D) -> String {
    let number = draws.digits(3, Some(6));
    let name = draws.pick(&STREET_NAMES);
    let kind = draws.pick(&STREET_TYPES);
    format!("{number} {name} {kind}")
}

/// Generate a facility address: a location-type letter and a street address.
///
/// The prefix is drawn first. When `street_address` is `None` a fresh street
/// address is generated after it.
pub fn generate_facility_address<D: Draw + ?Sized>(
    draws: &mut D,
    street_address: Option<&str>,
) -> String {
    let prefix = draws.pick(&FACILITY_PREFIXES);
    match street_address {
        Some(street) => format!("{prefix} {street}"),
        None => {
            let street = generate_street_address(draws);
            format!("{prefix} {street}")
        }
    }
}

/// Generate a facility address on the customer's street, a few doors away.
///
/// The house number moves by `(floor(r*5) - 2) * floor(r*6)`, so anywhere
/// from ten doors down to ten doors up, then gets a facility prefix.
pub fn generate_nearby_facility_address<D: Draw + ?Sized>(
    draws: &mut D,
    street_address: &str,
) -> String {
    let direction = i64::from(draws.below(5)) - 2;
    let distance = i64::from(draws.below(6));

    let nearby = match split_house_number(street_address) {
        Some((number, street)) => format!("{} {street}", number + direction * distance),
        None => street_address.to_string(),
    };

    generate_facility_address(draws, Some(&nearby))
}

/// Split `"637 Washington St"` into `(637, "Washington St")`.
fn split_house_number(street_address: &str) -> Option<(i64, &str)> {
    let (number, street) = street_address
        .split_once(' ')
        .unwrap_or((street_address, ""));
    number.parse().ok().map(|n| (n, street))
}
