//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod events;
pub mod explosion;
pub mod motion;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{ImpactTarget, resolve_explosion_hits, resolve_rocket_impact};
pub use events::GameEvent;
pub use explosion::update_explosions;
pub use snapshot::GameSnapshot;
pub use spawner::{roll_spawn, spawn_rocket};
pub use state::{
    Battery, City, EnemyRocket, Explosion, ExplosionKind, GameState, GameStatus, PlayerMissile,
    Projectile,
};
pub use tick::{TickInput, check_outcome, fire_at, step, tick};
