//! Public API for the per-turn decision engine.
//!
//! The engine collaborator calls [`TurnController::from_config_str`] (or
//! [`TurnController::new`]) once at game start, then [`TurnController::play_turn`]
//! once per turn with that turn's snapshot. The returned command list is
//! submitted to the engine atomically by the caller; nothing is sent
//! mid-turn.

use crate::catalog::UnitCatalog;
use crate::command::TurnCommands;
use crate::error::ConfigError;
use crate::layer::{TurnLayer, TurnState};
use crate::layers::{default_layers, OpeningLayer};
use crate::memory::TurnMemory;
use crate::snapshot::TurnDataSource;
use log::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Orchestrates one game's worth of turns.
///
/// Owns the cross-turn memory and the seeded random source; both are touched
/// only at well-defined points inside [`play_turn`](Self::play_turn), so the
/// whole engine is single-threaded and synchronous by construction.
pub struct TurnController {
    catalog: UnitCatalog,
    layers: Vec<Box<dyn TurnLayer>>,
    memory: Option<TurnMemory>,
    rng: ChaCha8Rng,
}

impl TurnController {
    /// Build a controller from an already-resolved unit catalog.
    pub fn new(catalog: UnitCatalog, seed: u64) -> Self {
        TurnController {
            catalog,
            layers: default_layers(),
            memory: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build a controller straight from the raw game-start configuration.
    ///
    /// Configuration problems are the only fatal errors in the crate; they
    /// surface here, before the first turn.
    pub fn from_config_str(config: &str, seed: u64) -> Result<Self, ConfigError> {
        let catalog = UnitCatalog::from_config_str(config)?;
        let controller = TurnController::new(catalog, seed);
        info!(
            "unit catalog resolved, {} decision layers",
            controller.layers.len()
        );
        Ok(controller)
    }

    /// Cross-turn memory, once the first turn has run.
    pub fn memory(&self) -> Option<&TurnMemory> {
        self.memory.as_ref()
    }

    /// Decide one turn: run the layer stack against the snapshot and return
    /// the ordered spawn requests for atomic submission.
    ///
    /// The fixed opening formation is placed on the first invocation only,
    /// before any heuristic layer. Memory is overwritten with the turn's
    /// observed snapshot after all decisions are final.
    pub fn play_turn(&mut self, data: &dyn TurnDataSource) -> TurnCommands {
        info!("planning turn {}", data.turn_number());
        let mut state = TurnState::new(&self.catalog, data);

        let first_turn = self.memory.is_none();
        let memory = self.memory.get_or_insert_with(|| TurnMemory::capture(data));
        if first_turn {
            OpeningLayer.run(&mut state, data, memory, &mut self.rng);
        }

        for layer in &self.layers {
            trace!("running layer {}", layer.name());
            layer.run(&mut state, data, memory, &mut self.rng);
        }

        memory.record_snapshot(data);
        let commands = state.into_commands();
        info!(
            "turn {}: submitting {} spawn requests",
            data.turn_number(),
            commands.len()
        );
        commands
    }
}
