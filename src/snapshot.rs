//! The engine-facing read boundary for one turn.
//!
//! The engine invokes the agent once per turn with a complete immutable
//! snapshot. [`TurnDataSource`] is everything the decision layers are allowed
//! to read from it; [`StaticTurnData`] is the plain-data implementation used
//! offline (tests, benches) and by embedders that already hold a decoded
//! frame.

use crate::arena::ArenaOccupancy;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    Own,
    Enemy,
}

impl Player {
    #[inline]
    fn index(self) -> usize {
        match self {
            Player::Own => 0,
            Player::Enemy => 1,
        }
    }
}

/// The two resource currencies: bits fund mobile units, cores fund
/// stationary structures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Bits,
    Cores,
}

/// Read access to the current turn's battlefield snapshot.
pub trait TurnDataSource {
    fn turn_number(&self) -> u32;
    fn resource(&self, kind: ResourceKind, player: Player) -> f32;
    fn health(&self, player: Player) -> u32;
    fn occupancy(&self) -> &ArenaOccupancy;
}

/// A snapshot held as plain data.
#[derive(Clone, Default)]
pub struct StaticTurnData {
    pub turn_number: u32,
    pub bits: [f32; 2],
    pub cores: [f32; 2],
    pub health: [u32; 2],
    pub occupancy: ArenaOccupancy,
}

impl TurnDataSource for StaticTurnData {
    fn turn_number(&self) -> u32 {
        self.turn_number
    }

    fn resource(&self, kind: ResourceKind, player: Player) -> f32 {
        match kind {
            ResourceKind::Bits => self.bits[player.index()],
            ResourceKind::Cores => self.cores[player.index()],
        }
    }

    fn health(&self, player: Player) -> u32 {
        self.health[player.index()]
    }

    fn occupancy(&self) -> &ArenaOccupancy {
        &self.occupancy
    }
}
