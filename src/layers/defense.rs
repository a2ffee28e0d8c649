//! DefenseLayer: spends the turn's cores on destructors at weighted-random
//! own-half cells.
//!
//! Cells near the deepest unoccupied row get the heaviest weight: the rear of
//! the owned territory is hardest for enemy fire to reach directly, while
//! forward cells keep a nonzero chance. Weights are banded off the current
//! deepest candidate row and recomputed every iteration as the set shrinks.

use crate::arena::own_half_locations;
use crate::catalog::UnitType;
use crate::layer::{TurnLayer, TurnState};
use crate::location::Location;
use crate::memory::TurnMemory;
use crate::selection::{filter_unoccupied, pick_weighted};
use crate::snapshot::TurnDataSource;
use log::*;
use rand_chacha::ChaCha8Rng;

/// Rows within this distance of the deepest candidate row.
const REAR_BAND: i16 = 2;
/// Rows within this distance form the middle band.
const MID_BAND: i16 = 4;

const REAR_WEIGHT: u32 = 10;
const MID_WEIGHT: u32 = 5;
const BASE_WEIGHT: u32 = 1;

/// Builds destructors while cores last, rear rows favored.
pub struct DefenseLayer;

impl TurnLayer for DefenseLayer {
    fn name(&self) -> &str {
        "defense"
    }

    fn run(
        &self,
        state: &mut TurnState,
        data: &dyn TurnDataSource,
        memory: &mut TurnMemory,
        rng: &mut ChaCha8Rng,
    ) {
        let mut candidates =
            filter_unoccupied(own_half_locations(), |location| state.is_blocked(data, location));

        let mut placed = 0;
        while state.can_afford(UnitType::Destructor) && !candidates.is_empty() {
            let deepest = candidates
                .iter()
                .map(|location| location.y() as i16)
                .max()
                .unwrap_or(0);
            let picked = pick_weighted(&candidates, |location| band_weight(location, deepest), rng);
            let index = match picked {
                Ok(index) => index,
                Err(_) => break,
            };

            // The slot is forfeited for this turn whether or not the engine
            // would accept the spawn; no retry.
            let location = candidates.remove(index);
            if state
                .attempt_spawn(data, UnitType::Destructor, location)
                .is_placed()
            {
                placed += 1;
            }
        }

        debug!(
            "defense: placed {} destructors, {} candidates remain",
            placed,
            candidates.len()
        );
        memory.record_candidates(&candidates);
    }
}

/// Weight by distance from the deepest remaining candidate row.
fn band_weight(location: &Location, deepest: i16) -> u32 {
    let y = location.y() as i16;
    if y > deepest - REAR_BAND {
        REAR_WEIGHT
    } else if y > deepest - MID_BAND {
        MID_WEIGHT
    } else {
        BASE_WEIGHT
    }
}
