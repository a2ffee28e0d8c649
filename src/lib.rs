//! Per-turn decision engine for a lane-based tower-defense agent.
//!
//! Each turn the game engine hands the agent an immutable battlefield
//! snapshot; the agent answers with an ordered list of spawn requests. The
//! crate covers only the decision logic: a rear-weighted random build
//! heuristic for stationary structures and a delta-adaptive deploy heuristic
//! for mobile units. Combat resolution, transport, and process startup
//! belong to the engine side of the [`snapshot::TurnDataSource`] /
//! [`command::TurnCommands`] boundary.

pub mod arena;
pub mod catalog;
pub mod command;
pub mod constants;
pub mod controller;
pub mod error;
pub mod layer;
pub mod layers;
pub mod location;
pub mod memory;
pub mod selection;
pub mod snapshot;

pub use catalog::{UnitCatalog, UnitSpec, UnitType};
pub use command::{SpawnOutcome, SpawnRequest, TurnCommands};
pub use controller::TurnController;
pub use error::{ConfigError, SelectionError};
pub use location::Location;
pub use memory::TurnMemory;
pub use snapshot::{Player, ResourceKind, StaticTurnData, TurnDataSource};
