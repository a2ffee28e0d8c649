//! Error taxonomy.
//!
//! Only configuration problems are fatal; everything that can go wrong while
//! planning a turn is absorbed inside the decision layers.

use thiserror::Error;

/// Fatal problems with the game-start configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unit configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unit configuration missing {0}")]
    ConfigurationMissing(String),
}

/// A selection was requested over an empty (or fully zero-weighted) set.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no candidates available for selection")]
    NoCandidates,
}
