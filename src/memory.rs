//! State carried from one turn to the next.
//!
//! Owned exclusively by the turn controller. Read at turn start, overwritten
//! at turn end; never touched in between, so the layers always see the
//! previous turn's values.

use crate::location::Location;
use crate::snapshot::{Player, ResourceKind, TurnDataSource};
use fnv::FnvHashSet;

/// Snapshot of the previous turn's end, plus the two pieces of heuristic
/// state the deployment layers carry across turns.
#[derive(Clone, Debug)]
pub struct TurnMemory {
    pub own_bits: f32,
    pub enemy_bits: f32,
    pub own_cores: f32,
    pub enemy_cores: f32,
    pub own_health: u32,
    pub enemy_health: u32,
    /// Unoccupied own-half cells left over after the previous turn's builds.
    /// Recorded so a later turn can tell which cells vanished to destruction.
    pub prev_candidates: FnvHashSet<Location>,
    /// Where the last exploratory mobile deploy went.
    pub last_deploy: Option<Location>,
}

impl TurnMemory {
    /// Initial memory, captured once at game start.
    pub fn capture(data: &dyn TurnDataSource) -> Self {
        TurnMemory {
            own_bits: data.resource(ResourceKind::Bits, Player::Own),
            enemy_bits: data.resource(ResourceKind::Bits, Player::Enemy),
            own_cores: data.resource(ResourceKind::Cores, Player::Own),
            enemy_cores: data.resource(ResourceKind::Cores, Player::Enemy),
            own_health: data.health(Player::Own),
            enemy_health: data.health(Player::Enemy),
            prev_candidates: FnvHashSet::default(),
            last_deploy: None,
        }
    }

    /// Overwrite the resource/health fields with the turn's observed values.
    /// Called exactly once, after the turn's decisions are finalized.
    pub fn record_snapshot(&mut self, data: &dyn TurnDataSource) {
        self.own_bits = data.resource(ResourceKind::Bits, Player::Own);
        self.enemy_bits = data.resource(ResourceKind::Bits, Player::Enemy);
        self.own_cores = data.resource(ResourceKind::Cores, Player::Own);
        self.enemy_cores = data.resource(ResourceKind::Cores, Player::Enemy);
        self.own_health = data.health(Player::Own);
        self.enemy_health = data.health(Player::Enemy);
    }

    /// Record the candidate cells a build pass left unused.
    pub fn record_candidates(&mut self, candidates: &[Location]) {
        self.prev_candidates = candidates.iter().copied().collect();
    }
}
