//! Events emitted by the simulation for presentation and audio feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameStatus;

/// Something noteworthy that happened during a tick or input action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A battery fired an interceptor
    MissileLaunched {
        battery_id: u32,
        missile_id: u32,
        target: Vec2,
    },
    /// A rocket was caught by an explosion
    RocketIntercepted { rocket_id: u32, pos: Vec2 },
    /// A rocket reached its target point
    RocketImpact { rocket_id: u32, pos: Vec2 },
    CityDestroyed { city_id: u32 },
    BatteryDestroyed { battery_id: u32 },
    StatusChanged { from: GameStatus, to: GameStatus },
}
