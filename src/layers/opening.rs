//! OpeningLayer: the fixed baseline formation, placed once at game start.
//!
//! Runs unconditionally before any heuristic logic on the first turn only.
//! Cheap filters and destructor anchors form a broad defensive arc across
//! the owned half, with a single encryptor near the center.

use crate::catalog::UnitType;
use crate::layer::{TurnLayer, TurnState};
use crate::location::Location;
use crate::memory::TurnMemory;
use crate::snapshot::TurnDataSource;
use log::*;
use rand_chacha::ChaCha8Rng;

/// Filter screen of the opening formation.
pub const OPENING_FILTERS: [(u8, u8); 6] =
    [(6, 11), (6, 9), (10, 6), (16, 6), (20, 9), (20, 11)];

/// Destructor anchors of the opening formation.
pub const OPENING_DESTRUCTORS: [(u8, u8); 5] = [(3, 12), (8, 8), (13, 10), (19, 7), (23, 12)];

/// The lone opening encryptor.
pub const OPENING_ENCRYPTOR: (u8, u8) = (13, 5);

/// Places the fixed opening formation.
pub struct OpeningLayer;

impl TurnLayer for OpeningLayer {
    fn name(&self) -> &str {
        "opening"
    }

    fn run(
        &self,
        state: &mut TurnState,
        data: &dyn TurnDataSource,
        _memory: &mut TurnMemory,
        _rng: &mut ChaCha8Rng,
    ) {
        let mut placed = 0;
        for (unit_type, coords) in [
            (UnitType::Filter, &OPENING_FILTERS[..]),
            (UnitType::Destructor, &OPENING_DESTRUCTORS[..]),
            (UnitType::Encryptor, std::slice::from_ref(&OPENING_ENCRYPTOR)),
        ] {
            for &(x, y) in coords {
                if state
                    .attempt_spawn(data, unit_type, Location::from_xy(x, y))
                    .is_placed()
                {
                    placed += 1;
                }
            }
        }
        debug!("opening: placed {placed} of 12 formation units");
    }
}
