//! Game state and core simulation types
//!
//! One `GameState` owns every entity; tick logic takes it by `&mut`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use crate::tuning::{PlayField, Tuning};

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Title screen, nothing simulated yet
    #[default]
    Start,
    /// Active gameplay, the only status in which ticks run
    Playing,
    /// Win score reached
    Won,
    /// Every battery destroyed
    Lost,
}

/// A straight-line projectile travelling from `start` to `target`
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub start: Vec2,
    pub target: Vec2,
    /// Derived from start, target and progress
    pub pos: Vec2,
    /// Fraction of the path travelled, arrives at 1.0
    pub progress: f32,
    /// Progress gained per tick
    pub speed: f32,
}

impl Projectile {
    pub fn new(id: u32, start: Vec2, target: Vec2, speed: f32) -> Self {
        Self {
            id,
            start,
            target,
            pos: start,
            progress: 0.0,
            speed,
        }
    }
}

/// Descending enemy projectile
pub type EnemyRocket = Projectile;
/// Player interceptor
pub type PlayerMissile = Projectile;

/// What produced an explosion (decides its size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    /// Player missile detonation, full radius
    Blast,
    /// Destroyed rocket, 80% radius
    Chain,
    /// Rocket hitting the ground, small flash
    Impact,
}

/// An expanding then contracting lethal volume
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub id: u32,
    pub kind: ExplosionKind,
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub growth_rate: f32,
    pub expanding: bool,
}

/// Player missile launcher
#[derive(Debug, Clone, PartialEq)]
pub struct Battery {
    pub id: u32,
    pub pos: Vec2,
    pub ammo: u32,
    pub max_ammo: u32,
    pub destroyed: bool,
}

impl Battery {
    /// Alive and holding at least one missile
    pub fn can_fire(&self) -> bool {
        !self.destroyed && self.ammo > 0
    }
}

/// Defended city
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: u32,
    pub pos: Vec2,
    pub destroyed: bool,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values in effect
    pub tuning: Tuning,
    /// Play area used for layout and rocket entry points
    pub field: PlayField,
    /// Spawner randomness
    pub rng: Pcg32,
    pub status: GameStatus,
    pub score: u64,
    /// Ticks simulated in the current session
    pub time_ticks: u64,
    /// Active rockets (insertion order)
    pub rockets: Vec<EnemyRocket>,
    /// Active missiles (insertion order)
    pub missiles: Vec<PlayerMissile>,
    /// Active explosions (insertion order)
    pub explosions: Vec<Explosion>,
    pub batteries: Vec<Battery>,
    pub cities: Vec<City>,
    /// Events not yet handed to the presentation layer
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a state with default tuning and play field
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Tuning::default(), PlayField::default())
    }

    /// Create a state on the title screen with structures laid out
    pub fn with_config(seed: u64, tuning: Tuning, field: PlayField) -> Self {
        let mut state = Self {
            seed,
            tuning,
            field,
            rng: Pcg32::seed_from_u64(seed),
            status: GameStatus::Start,
            score: 0,
            time_ticks: 0,
            rockets: Vec::new(),
            missiles: Vec::new(),
            explosions: Vec::new(),
            batteries: Vec::new(),
            cities: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };
        state.reset();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restore score, structures and ammo; clear everything in flight.
    /// Leaves the status untouched.
    pub fn reset(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.next_id = 1;
        self.rockets.clear();
        self.missiles.clear();
        self.explosions.clear();

        let battery_positions = self.field.battery_positions(self.tuning.battery_ammo.len());
        self.batteries = battery_positions
            .into_iter()
            .zip(&self.tuning.battery_ammo)
            .enumerate()
            .map(|(i, (pos, &ammo))| Battery {
                id: i as u32,
                pos,
                ammo,
                max_ammo: ammo,
                destroyed: false,
            })
            .collect();

        self.cities = self
            .field
            .city_positions(self.tuning.city_count)
            .into_iter()
            .enumerate()
            .map(|(i, pos)| City {
                id: i as u32,
                pos,
                destroyed: false,
            })
            .collect();
    }

    /// Start (or restart) a session: reset, then enter `Playing`
    pub fn start(&mut self) {
        self.reset();
        self.set_status(GameStatus::Playing);
        log::info!(
            "Session started (seed {}, {} batteries, {} cities)",
            self.seed,
            self.batteries.len(),
            self.cities.len()
        );
    }

    /// Same as [`GameState::start`]; reads better from the Won/Lost screens
    pub fn restart(&mut self) {
        self.start();
    }

    /// Change status, recording the transition
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        if self.status == status {
            return;
        }
        log::info!("Status {:?} -> {:?} (score {})", self.status, status, self.score);
        self.events.push(GameEvent::StatusChanged {
            from: self.status,
            to: status,
        });
        self.status = status;
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Batteries that are still standing
    pub fn surviving_batteries(&self) -> impl Iterator<Item = &Battery> {
        self.batteries.iter().filter(|b| !b.destroyed)
    }

    /// Cities that are still standing
    pub fn surviving_cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter().filter(|c| !c.destroyed)
    }

    /// Hand pending events to the caller
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_on_title_screen() {
        let state = GameState::new(7);
        assert_eq!(state.status, GameStatus::Start);
        assert_eq!(state.batteries.len(), 3);
        assert_eq!(state.cities.len(), 6);
        assert!(state.rockets.is_empty());
    }

    #[test]
    fn test_start_enters_playing_with_full_pools() {
        let mut state = GameState::new(7);
        state.start();
        assert!(state.is_playing());
        let ammo: Vec<u32> = state.batteries.iter().map(|b| b.ammo).collect();
        assert_eq!(ammo, vec![20, 40, 20]);
        assert!(state.batteries.iter().all(|b| b.ammo == b.max_ammo));
        assert_eq!(state.surviving_cities().count(), 6);
        assert!(matches!(
            state.take_events().as_slice(),
            [GameEvent::StatusChanged {
                from: GameStatus::Start,
                to: GameStatus::Playing
            }]
        ));
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_battery_can_fire() {
        let mut battery = Battery {
            id: 0,
            pos: Vec2::ZERO,
            ammo: 1,
            max_ammo: 1,
            destroyed: false,
        };
        assert!(battery.can_fire());
        battery.ammo = 0;
        assert!(!battery.can_fire());
        battery.ammo = 1;
        battery.destroyed = true;
        assert!(!battery.can_fire());
    }
}
