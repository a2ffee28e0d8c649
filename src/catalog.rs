//! Unit types and the game-start unit catalog.
//!
//! The engine hands the agent a configuration object at game start; the only
//! parts the decision engine needs are the six unit-type identifiers and
//! their costs, in the engine's fixed order (three stationary types, then
//! three mobile types).

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// The six unit types, indexed as in the engine configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Filter,
    Encryptor,
    Destructor,
    Ping,
    Emp,
    Scrambler,
}

impl UnitType {
    pub const ALL: [UnitType; 6] = [
        UnitType::Filter,
        UnitType::Encryptor,
        UnitType::Destructor,
        UnitType::Ping,
        UnitType::Emp,
        UnitType::Scrambler,
    ];

    /// Index into the engine's `unitInformation` array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stationary units persist on the grid until destroyed and are paid for
    /// with cores.
    pub fn is_stationary(self) -> bool {
        matches!(
            self,
            UnitType::Filter | UnitType::Encryptor | UnitType::Destructor
        )
    }

    /// Mobile units are consumed on deploy and are paid for with bits.
    pub fn is_mobile(self) -> bool {
        !self.is_stationary()
    }
}

/// Identifier and cost for one unit type.
#[derive(Clone, Debug)]
pub struct UnitSpec {
    pub shorthand: String,
    pub cost: f32,
}

/// The resolved per-game unit catalog.
#[derive(Clone, Debug)]
pub struct UnitCatalog {
    units: [UnitSpec; 6],
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(rename = "unitInformation")]
    unit_information: Vec<RawUnitInfo>,
}

#[derive(Deserialize)]
struct RawUnitInfo {
    shorthand: Option<String>,
    cost: Option<f32>,
}

impl UnitCatalog {
    pub fn new(units: [UnitSpec; 6]) -> Self {
        UnitCatalog { units }
    }

    /// Build the catalog from the raw game-start configuration string.
    pub fn from_config_str(config: &str) -> Result<Self, ConfigError> {
        Self::from_config_value(serde_json::from_str(config)?)
    }

    /// Build the catalog from an already-parsed configuration value.
    pub fn from_config_value(config: serde_json::Value) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_value(config)?;
        let mut units = Vec::with_capacity(UnitType::ALL.len());
        for unit_type in UnitType::ALL {
            let info = raw.unit_information.get(unit_type.index()).ok_or_else(|| {
                ConfigError::ConfigurationMissing(format!("unitInformation[{}]", unit_type.index()))
            })?;
            let shorthand = info.shorthand.clone().ok_or_else(|| {
                ConfigError::ConfigurationMissing(format!("shorthand for {unit_type:?}"))
            })?;
            let cost = info.cost.ok_or_else(|| {
                ConfigError::ConfigurationMissing(format!("cost for {unit_type:?}"))
            })?;
            units.push(UnitSpec { shorthand, cost });
        }
        // Length checked above, element by element.
        let units: [UnitSpec; 6] = units.try_into().expect("six unit specs");
        Ok(UnitCatalog::new(units))
    }

    pub fn cost(&self, unit_type: UnitType) -> f32 {
        self.units[unit_type.index()].cost
    }

    pub fn shorthand(&self, unit_type: UnitType) -> &str {
        &self.units[unit_type.index()].shorthand
    }
}

/// Canonical test configuration shared by unit tests across the crate.
#[cfg(test)]
pub(crate) mod test_support {
    use super::UnitCatalog;

    pub const CONFIG: &str = r#"{
        "unitInformation": [
            { "shorthand": "FF", "cost": 1.0 },
            { "shorthand": "EF", "cost": 4.0 },
            { "shorthand": "DF", "cost": 6.0 },
            { "shorthand": "PI", "cost": 1.0 },
            { "shorthand": "EI", "cost": 3.0 },
            { "shorthand": "SI", "cost": 1.0 }
        ]
    }"#;

    pub fn catalog() -> UnitCatalog {
        UnitCatalog::from_config_str(CONFIG).unwrap()
    }
}
