//! AttackLayer: spends the turn's bits on mobile deploys along the two
//! friendly edges, adapting to turn-over-turn deltas.
//!
//! The enemy's bit balance dropping sharply reads as a spend worth
//! disrupting: answer with a scrambler at the midpoint lane. Enemy health
//! dropping reads as the last attack landing: repeat a ping down the same
//! lane. Enemy health holding flat past the opening turns reads as a stalled
//! attack: switch to an EMP on that lane. Otherwise probe a random lane with
//! a ping and remember it.

use crate::arena::{edge_locations, Edge};
use crate::catalog::UnitType;
use crate::layer::{TurnLayer, TurnState};
use crate::memory::TurnMemory;
use crate::selection::filter_unoccupied;
use crate::snapshot::{Player, ResourceKind, TurnDataSource};
use itertools::chain;
use log::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Bits forfeited per scrambler iteration.
const SCRAMBLER_SPEND: f32 = 3.0;
/// Bits forfeited per ping or EMP iteration.
const PING_SPEND: f32 = 1.0;
const EMP_SPEND: f32 = 1.0;

/// Fraction of the enemy's current bits that counts as a sharp drop.
const ENEMY_SPEND_THRESHOLD: f32 = 0.3;

/// Deploys mobile units while bits last.
pub struct AttackLayer;

impl TurnLayer for AttackLayer {
    fn name(&self) -> &str {
        "attack"
    }

    fn run(
        &self,
        state: &mut TurnState,
        data: &dyn TurnDataSource,
        memory: &mut TurnMemory,
        rng: &mut ChaCha8Rng,
    ) {
        let own_bits = data.resource(ResourceKind::Bits, Player::Own);
        let enemy_bits = data.resource(ResourceKind::Bits, Player::Enemy);
        let own_health = data.health(Player::Own);
        let enemy_health = data.health(Player::Enemy);

        let deploy_locations = filter_unoccupied(
            chain(
                edge_locations(Edge::BottomLeft),
                edge_locations(Edge::BottomRight),
            ),
            |location| state.is_blocked(data, location),
        );

        let enemy_bits_drop = memory.enemy_bits - enemy_bits;
        let enemy_health_drop = memory.enemy_health as i64 - enemy_health as i64;

        let mut bits_to_spend = own_bits;
        let mut deployed = 0;
        while bits_to_spend >= 1.0 && !deploy_locations.is_empty() {
            // Interest weights carried along as a stall guard: if every unit
            // type loses interest the loop stops issuing deploys.
            let mut ping_interest = 1;
            let mut scrambler_interest = 1;
            let mut emp_interest = 1;
            if enemy_health <= 5 {
                ping_interest *= 2;
            }
            if enemy_bits > own_bits || own_health <= 5 {
                scrambler_interest *= 2;
            }
            if bits_to_spend < 3.0 {
                emp_interest = 0;
            }
            if ping_interest + scrambler_interest + emp_interest < 1 {
                break;
            }

            if enemy_bits_drop > ENEMY_SPEND_THRESHOLD * enemy_bits {
                let location = deploy_locations[deploy_locations.len() / 2];
                state.attempt_spawn(data, UnitType::Scrambler, location);
                bits_to_spend -= SCRAMBLER_SPEND;
            } else if enemy_health_drop > 0 && memory.last_deploy.is_some() {
                if let Some(location) = memory.last_deploy {
                    state.attempt_spawn(data, UnitType::Ping, location);
                }
                bits_to_spend -= PING_SPEND;
            } else if enemy_health_drop == 0
                && data.turn_number() > 2
                && memory.last_deploy.is_some()
            {
                if let Some(location) = memory.last_deploy {
                    state.attempt_spawn(data, UnitType::Emp, location);
                }
                bits_to_spend -= EMP_SPEND;
            } else {
                let location = deploy_locations[rng.gen_range(0..deploy_locations.len())];
                state.attempt_spawn(data, UnitType::Ping, location);
                memory.last_deploy = Some(location);
                bits_to_spend -= PING_SPEND;
            }
            deployed += 1;
        }

        debug!(
            "attack: {} deploy iterations, {:.1} bits left unplanned",
            deployed, bits_to_spend
        );
    }
}
