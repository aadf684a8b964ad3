//! Bonus starter creature draw.

use crate::cursor::Draw;
use crate::sampling::Sampling;
use crate::tables::{SPRITE_BASE_URL, STARTERS};
use techload_types::{Creature, Sprites};

/// 30% of the time nothing, otherwise one of the three starters.
pub fn generate_creature<D: Draw + ?Sized>(draws: &mut D) -> Option<Creature> {
    if draws.chance(0.3) {
        return None;
    }

    let (id, name) = *draws.pick(&STARTERS);
    Some(Creature {
        id,
        name: name.to_string(),
        sprites: Sprites {
            front_default: format!("{SPRITE_BASE_URL}/{id}.png"),
        },
    })
}
