//! Facility list generator.
//!
//! A facility list traces the physical path from the exchange to the
//! customer. The last entry is always the premises at the customer's street
//! address, the one before it (when there is one) is a terminal a few doors
//! away, and any earlier entries are feeder points elsewhere.

use crate::cursor::Draw;
use crate::generators::address::{generate_facility_address, generate_nearby_facility_address};
use crate::sampling::Sampling;
use crate::tables::{FIBER_FACILITY_HEADINGS, PREMISES_HEADING};
use techload_types::{Facility, TransportType, Wiring};

/// `(cable, pair, port)` upper bounds for the first hop, a high-capacity feeder.
const FEEDER_BOUNDS: (u32, u32, u32) = (24, 32, 800);

/// `(cable, pair, port)` upper bounds for every later hop.
const DISTRIBUTION_BOUNDS: (u32, u32, u32) = (144, 144, 12);

/// Generate the facility list for a transport and customer street address.
///
/// Fiber always has three entries headed `PFP`, `CFST`, `Prem`. Copper has
/// 1 to 6 entries headed `F1..` with the last one headed `Prem`; the count
/// is `floor(mean of three draws * 6) + 1`.
pub fn generate_facilities<D: Draw + ?Sized>(
    draws: &mut D,
    transport: TransportType,
    customer_address: &str,
) -> Vec<Facility> {
    let is_fiber = transport.is_fiber();
    let count = if is_fiber {
        FIBER_FACILITY_HEADINGS.len()
    } else {
        ((draws.draw() * 6.0 + draws.draw() * 6.0 + draws.draw() * 6.0) / 3.0).floor() as usize + 1
    };

    let mut facilities = Vec::with_capacity(count);
    for i in 0..count {
        let is_premises = i + 1 == count;

        let heading = if is_fiber {
            FIBER_FACILITY_HEADINGS[i].to_string()
        } else if is_premises {
            PREMISES_HEADING.to_string()
        } else {
            format!("F{}", i + 1)
        };

        let address = if is_premises {
            customer_address.to_string()
        } else if i + 2 == count {
            generate_nearby_facility_address(draws, customer_address)
        } else {
            generate_facility_address(draws, None)
        };

        let wiring = if is_premises {
            None
        } else {
            let (cable, pair, port) = if i == 0 {
                FEEDER_BOUNDS
            } else {
                DISTRIBUTION_BOUNDS
            };
            Some(Wiring {
                cable: draws.ceil_of(cable),
                pair: draws.ceil_of(pair),
                port: draws.ceil_of(port),
            })
        };

        facilities.push(Facility {
            heading,
            address,
            wiring,
        });
    }

    facilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::sampling::Scripted;

    #[test]
    fn test_fiber_shape() {
        let mut draws = Scripted::new(&[
            // PFP: fresh facility address (prefix + street), then wiring
            0.0, 0.0, 0.5, 0.0, 0.0, 0.5, 0.5, 0.5,
            // CFST: nearby (+0) with prefix, then wiring
            0.5, 0.5, 0.25, 0.5, 0.5, 0.5,
        ]);
        let facilities =
            generate_facilities(&mut draws, TransportType::FttpGpon, "637 Washington St");

        assert_eq!(draws.consumed(), 14);
        let headings: Vec<_> = facilities.iter().map(|f| f.heading.as_str()).collect();
        assert_eq!(headings, ["PFP", "CFST", "Prem"]);

        assert_eq!(facilities[0].address, "F 500 Main St");
        assert_eq!(
            facilities[0].wiring,
            Some(Wiring {
                cable: 12,
                pair: 16,
                port: 400
            })
        );

        assert_eq!(facilities[1].address, "S 637 Washington St");
        assert_eq!(
            facilities[1].wiring,
            Some(Wiring {
                cable: 72,
                pair: 72,
                port: 6
            })
        );

        assert_eq!(facilities[2].address, "637 Washington St");
        assert!(facilities[2].is_premises());
    }

    #[test]
    fn test_single_copper_entry_is_premises() {
        let mut draws = Scripted::new(&[0.0, 0.0, 0.0]);
        let facilities = generate_facilities(&mut draws, TransportType::IpCo, "12 Elm Rd");

        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].heading, "Prem");
        assert_eq!(facilities[0].address, "12 Elm Rd");
        assert!(facilities[0].is_premises());
    }

    #[test]
    fn test_two_copper_entries_use_feeder_bounds_for_terminal() {
        // count floor((1.2 + 1.2 + 1.2) / 3) + 1 = 2
        let mut draws = Scripted::new(&[0.2, 0.2, 0.2, 0.5, 0.5, 0.0, 0.99, 0.99, 0.99]);
        let facilities = generate_facilities(&mut draws, TransportType::Fttn, "12 Elm Rd");

        assert_eq!(facilities.len(), 2);
        assert_eq!(facilities[0].heading, "F1");
        assert_eq!(facilities[0].address, "F 12 Elm Rd");
        assert_eq!(
            facilities[0].wiring,
            Some(Wiring {
                cable: 24,
                pair: 32,
                port: 792
            })
        );
        assert_eq!(facilities[1].heading, "Prem");
    }

    #[test]
    fn test_copper_shape_over_many_draws() {
        let mut cursor = Cursor::new(1_425_925_102);
        for _ in 0..200 {
            let facilities = generate_facilities(&mut cursor, TransportType::FttnBp, "637 Washington St");
            assert!((1..=6).contains(&facilities.len()));

            let (last, rest) = facilities.split_last().unwrap();
            assert_eq!(last.heading, "Prem");
            assert_eq!(last.address, "637 Washington St");
            assert!(last.wiring.is_none());

            for (i, facility) in rest.iter().enumerate() {
                assert_eq!(facility.heading, format!("F{}", i + 1));
                let wiring = facility.wiring.expect("non-premises entries carry wiring");
                let (cable, pair, port) = if i == 0 {
                    FEEDER_BOUNDS
                } else {
                    DISTRIBUTION_BOUNDS
                };
                assert!(wiring.cable <= cable && wiring.pair <= pair && wiring.port <= port);
            }
            if let Some(terminal) = rest.last() {
                assert!(terminal.address.ends_with(" Washington St"));
            }
        }
    }
}
