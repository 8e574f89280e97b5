//! Read-only view of the simulation handed to the presentation layer each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::state::{Battery, City, Explosion, ExplosionKind, GameState, GameStatus, Projectile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub pos: Vec2,
    /// Start and target are kept for trail rendering
    pub start: Vec2,
    pub target: Vec2,
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u32,
    pub kind: ExplosionKind,
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryView {
    pub id: u32,
    pub pos: Vec2,
    pub ammo: u32,
    pub max_ammo: u32,
    pub destroyed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityView {
    pub id: u32,
    pub pos: Vec2,
    pub destroyed: bool,
}

/// Everything the renderer and HUD need for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub score: u64,
    pub win_score: u64,
    pub tick: u64,
    pub rockets: Vec<ProjectileView>,
    pub missiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub batteries: Vec<BatteryView>,
    pub cities: Vec<CityView>,
    /// Events since the previous snapshot
    pub events: Vec<GameEvent>,
}

impl From<&Projectile> for ProjectileView {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id,
            pos: p.pos,
            start: p.start,
            target: p.target,
            progress: p.progress,
        }
    }
}

impl From<&Explosion> for ExplosionView {
    fn from(e: &Explosion) -> Self {
        Self {
            id: e.id,
            kind: e.kind,
            pos: e.pos,
            radius: e.radius,
        }
    }
}

impl From<&Battery> for BatteryView {
    fn from(b: &Battery) -> Self {
        Self {
            id: b.id,
            pos: b.pos,
            ammo: b.ammo,
            max_ammo: b.max_ammo,
            destroyed: b.destroyed,
        }
    }
}

impl From<&City> for CityView {
    fn from(c: &City) -> Self {
        Self {
            id: c.id,
            pos: c.pos,
            destroyed: c.destroyed,
        }
    }
}

impl GameSnapshot {
    /// Build a snapshot, draining the state's pending events into it
    pub fn capture(state: &mut GameState) -> Self {
        let events = state.take_events();
        Self {
            status: state.status,
            score: state.score,
            win_score: state.tuning.win_score,
            tick: state.time_ticks,
            rockets: state.rockets.iter().map(ProjectileView::from).collect(),
            missiles: state.missiles.iter().map(ProjectileView::from).collect(),
            explosions: state.explosions.iter().map(ExplosionView::from).collect(),
            batteries: state.batteries.iter().map(BatteryView::from).collect(),
            cities: state.cities.iter().map(CityView::from).collect(),
            events,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
