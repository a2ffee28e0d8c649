//! The per-turn working state and the decision-layer trait.
//!
//! `TurnState` accumulates this turn's spawn requests and tracks the planned
//! spend against the snapshot's balances, so the layers can stop issuing
//! commands as soon as affordability fails. `TurnLayer` is the trait each
//! decision phase implements; the controller runs the stack in order.

use crate::arena::in_arena_bounds;
use crate::catalog::{UnitCatalog, UnitType};
use crate::command::{SpawnOutcome, SpawnRequest, TurnCommands};
use crate::location::Location;
use crate::memory::TurnMemory;
use crate::snapshot::{Player, ResourceKind, TurnDataSource};
use fnv::FnvHashSet;
use log::*;
use rand_chacha::ChaCha8Rng;

/// The evolving plan state for one turn.
pub struct TurnState<'a> {
    catalog: &'a UnitCatalog,
    bits: f32,
    cores: f32,
    /// Cells claimed by this turn's stationary placements, layered on top of
    /// the snapshot's occupancy.
    claimed: FnvHashSet<Location>,
    requests: Vec<SpawnRequest>,
}

impl<'a> TurnState<'a> {
    pub fn new(catalog: &'a UnitCatalog, data: &dyn TurnDataSource) -> Self {
        TurnState {
            catalog,
            bits: data.resource(ResourceKind::Bits, Player::Own),
            cores: data.resource(ResourceKind::Cores, Player::Own),
            claimed: FnvHashSet::default(),
            requests: Vec::new(),
        }
    }

    /// Bits still unspent by this turn's planned deploys.
    pub fn bits(&self) -> f32 {
        self.bits
    }

    /// Cores still unspent by this turn's planned builds.
    pub fn cores(&self) -> f32 {
        self.cores
    }

    pub fn can_afford(&self, unit_type: UnitType) -> bool {
        let cost = self.catalog.cost(unit_type);
        if unit_type.is_stationary() {
            cost <= self.cores
        } else {
            cost <= self.bits
        }
    }

    /// Whether a cell holds a stationary unit, in the snapshot or in this
    /// turn's pending placements.
    pub fn is_blocked(&self, data: &dyn TurnDataSource, location: Location) -> bool {
        data.occupancy().is_stationary(location) || self.claimed.contains(&location)
    }

    /// Try to add a spawn request for this turn.
    ///
    /// Mirrors the engine's acceptance rules so that `Rejected` attempts
    /// never reach the submitted command list: the cell must be in bounds,
    /// free of stationary units, and the cost must still be affordable.
    /// Rejections are silent; the caller moves on.
    pub fn attempt_spawn(
        &mut self,
        data: &dyn TurnDataSource,
        unit_type: UnitType,
        location: Location,
    ) -> SpawnOutcome {
        if !in_arena_bounds(location.x(), location.y())
            || self.is_blocked(data, location)
            || !self.can_afford(unit_type)
        {
            trace!(
                "spawn rejected: {:?} at ({}, {})",
                unit_type,
                location.x(),
                location.y()
            );
            return SpawnOutcome::Rejected;
        }

        let cost = self.catalog.cost(unit_type);
        if unit_type.is_stationary() {
            self.cores -= cost;
            self.claimed.insert(location);
        } else {
            self.bits -= cost;
        }
        self.requests.push(SpawnRequest {
            unit_type,
            location,
        });
        SpawnOutcome::Placed
    }

    /// Finalize into the ordered command list for submission.
    pub fn into_commands(self) -> TurnCommands {
        TurnCommands {
            requests: self.requests,
        }
    }
}

/// One phase of the per-turn decision stack.
///
/// Layers are stateless; everything mutable lives in `TurnState` (this
/// turn), `TurnMemory` (across turns), and the controller's RNG.
pub trait TurnLayer {
    /// Name for logging.
    fn name(&self) -> &str;

    fn run(
        &self,
        state: &mut TurnState,
        data: &dyn TurnDataSource,
        memory: &mut TurnMemory,
        rng: &mut ChaCha8Rng,
    );
}
