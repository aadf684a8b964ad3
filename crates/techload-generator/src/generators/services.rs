//! Services bundle generator.

use crate::cursor::Draw;
use crate::sampling::Sampling;
use crate::tables::{
    COPPER_JACK, FIBER_GATEWAY, FIBER_JACK, FIBER_PREMIUM_JACK, FIBER_SPEEDS, FIBER_XGS_SPEEDS,
    GATEWAY_MODELS, IP_SPEEDS, UVERSE_GATEWAYS, UVERSE_PACKAGES, UVERSE_SET_TOP_BOXES,
    VDSL_BONDED_SPEEDS, VDSL_SPEEDS,
};
use techload_types::{Services, TransportType};

/// Generate the equipment list and optional products for a transport.
///
/// Draw order:
/// 1. jack (fiber only: 40% premium `010 Jack`)
/// 2. ONT signal level (fiber only)
/// 3. gateway model (drawn unless fiber with the basic jack, which is fixed)
/// 4. 15% U-verse package with a gateway and 0-5 set-top boxes
/// 5. 99% internet speed tier
/// 6. 5% POTS line, otherwise 20% VoIP with a 1% second line
pub fn generate_services<D: Draw + ?Sized>(draws: &mut D, transport: TransportType) -> Services {
    let is_fiber = transport.has_marker("FTTP");
    let premium_jack = is_fiber && draws.chance(0.4);

    let jack = match (is_fiber, premium_jack) {
        (false, _) => COPPER_JACK,
        (true, true) => FIBER_PREMIUM_JACK,
        (true, false) => FIBER_JACK,
    };
    let mut equipment = vec![jack.to_string()];

    if is_fiber {
        // Slimline jacks pair with the integrated ONT.
        let ont = if premium_jack { "ONT" } else { "iONT" };
        let whole = draws.below(10) + 15;
        let fraction = draws.below(1000);
        equipment.push(format!("{ont}: -{whole}.{fraction}dbm"));
    }

    if is_fiber && !premium_jack {
        equipment.push(FIBER_GATEWAY.to_string());
    } else {
        equipment.push(draws.pick(&GATEWAY_MODELS).to_string());
    }

    let mut services = Services {
        equipment,
        ..Default::default()
    };

    if draws.chance(0.15) {
        services.uverse_package = Some(draws.pick(&UVERSE_PACKAGES).to_string());
        let box_count = ((draws.draw() * 6.0 + draws.draw() * 6.0) / 2.0).floor() as usize;
        services
            .equipment
            .push(draws.pick(&UVERSE_GATEWAYS).to_string());
        for _ in 0..box_count {
            services
                .equipment
                .push(draws.pick(&UVERSE_SET_TOP_BOXES).to_string());
        }
    }

    if draws.chance(0.99) {
        services.internet_speed = Some(*draws.pick(&speed_tiers(transport)));
    }

    if draws.chance(0.05) {
        services.pots_number = Some(draws.digits(10, None));
    } else if draws.chance(0.2) {
        let mut numbers = vec![draws.digits(10, None)];
        if draws.chance(0.01) {
            numbers.push(draws.digits(10, None));
        }
        services.voip_numbers = Some(numbers);
    }

    services
}

/// Speed tiers (Mbps) offered over a transport, in draw order.
pub fn speed_tiers(transport: TransportType) -> Vec<u32> {
    if transport.has_marker("FTTP") {
        let mut tiers = FIBER_SPEEDS.to_vec();
        if transport.has_marker("XGS") {
            tiers.extend_from_slice(&FIBER_XGS_SPEEDS);
        }
        tiers
    } else if transport.has_marker("IP") {
        IP_SPEEDS.to_vec()
    } else {
        let mut tiers = VDSL_SPEEDS.to_vec();
        if transport.has_marker("BP") {
            tiers.extend_from_slice(&VDSL_BONDED_SPEEDS);
        }
        tiers
    }
}
