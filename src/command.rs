//! Placement commands as pure data.
//!
//! The decision engine never talks to the game engine directly: a turn
//! produces a [`TurnCommands`] list and the caller submits it, in order, as a
//! single end-of-turn action.

use crate::catalog::UnitType;
use crate::location::Location;
use serde::{Deserialize, Serialize};

/// A single spawn request: place `unit_type` at `location`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub unit_type: UnitType,
    pub location: Location,
}

/// Result of an in-turn spawn attempt.
///
/// A `Rejected` attempt is a silent no-op: the slot is forfeited for this
/// turn and the attempt is never retried.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    Placed,
    Rejected,
}

impl SpawnOutcome {
    pub fn is_placed(self) -> bool {
        matches!(self, SpawnOutcome::Placed)
    }
}

/// The ordered spawn requests accumulated over one turn.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TurnCommands {
    pub requests: Vec<SpawnRequest>,
}

impl TurnCommands {
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Requests for a specific unit type, in submission order.
    pub fn of_type(&self, unit_type: UnitType) -> impl Iterator<Item = &SpawnRequest> {
        self.requests
            .iter()
            .filter(move |request| request.unit_type == unit_type)
    }
}
