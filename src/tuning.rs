//! Game balance and play field layout
//!
//! Every gameplay number lives in [`Tuning`]. Defaults mirror `crate::consts`;
//! the web build may override them from LocalStorage.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Data-driven balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scoring ===
    pub win_score: u64,
    pub points_per_kill: u64,

    // === Explosions ===
    pub explosion_max_radius: f32,
    pub explosion_growth_rate: f32,
    pub explosion_start_radius: f32,
    pub chain_radius_factor: f32,
    pub contract_factor: f32,
    pub impact_max_radius: f32,
    pub impact_growth_rate: f32,

    // === Projectiles ===
    pub rocket_speed_min: f32,
    pub rocket_speed_max: f32,
    pub missile_speed: f32,

    // === Defenses ===
    pub battery_ammo: Vec<u32>,
    pub city_count: usize,
    pub impact_tolerance: f32,

    // === Spawning ===
    pub spawn_base_chance: f64,
    pub spawn_score_divisor: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            points_per_kill: POINTS_PER_KILL,

            explosion_max_radius: EXPLOSION_MAX_RADIUS,
            explosion_growth_rate: EXPLOSION_GROWTH_RATE,
            explosion_start_radius: EXPLOSION_START_RADIUS,
            chain_radius_factor: CHAIN_RADIUS_FACTOR,
            contract_factor: CONTRACT_FACTOR,
            impact_max_radius: IMPACT_MAX_RADIUS,
            impact_growth_rate: IMPACT_GROWTH_RATE,

            rocket_speed_min: ROCKET_SPEED_MIN,
            rocket_speed_max: ROCKET_SPEED_MAX,
            missile_speed: MISSILE_SPEED,

            battery_ammo: BATTERY_AMMO.to_vec(),
            city_count: CITY_COUNT,
            impact_tolerance: IMPACT_TOLERANCE,

            spawn_base_chance: SPAWN_BASE_CHANCE,
            spawn_score_divisor: SPAWN_SCORE_DIVISOR,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Per-tick rocket spawn probability. Grows linearly with score and is
    /// deliberately left uncapped.
    pub fn spawn_chance(&self, score: u64) -> f64 {
        self.spawn_base_chance + score as f64 / self.spawn_score_divisor
    }

    /// Max radius of an explosion caused by a destroyed rocket
    pub fn chain_max_radius(&self) -> f32 {
        self.explosion_max_radius * self.chain_radius_factor
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "nova_defense_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Play area dimensions in screen units (y grows downward, rockets enter at y = 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Battery row sits this far above the bottom edge
const BATTERY_ROW_OFFSET: f32 = 40.0;
/// City row sits this far above the bottom edge
const CITY_ROW_OFFSET: f32 = 30.0;

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Battery positions for `count` batteries. Three batteries land at
    /// 10% / 50% / 90% of the width.
    pub fn battery_positions(&self, count: usize) -> Vec<Vec2> {
        let y = self.height - BATTERY_ROW_OFFSET;
        spread(count, 0.1, 0.9)
            .map(|frac| Vec2::new(self.width * frac, y))
            .collect()
    }

    /// City positions, evenly spaced between 25% and 75% of the width
    pub fn city_positions(&self, count: usize) -> Vec<Vec2> {
        let y = self.height - CITY_ROW_OFFSET;
        spread(count, 0.25, 0.75)
            .map(|frac| Vec2::new(self.width * frac, y))
            .collect()
    }
}

/// `count` fractions evenly covering `[lo, hi]` (a single item sits in the middle)
fn spread(count: usize, lo: f32, hi: f32) -> impl Iterator<Item = f32> {
    (0..count).map(move |i| {
        if count == 1 {
            (lo + hi) / 2.0
        } else {
            lo + (hi - lo) * i as f32 / (count - 1) as f32
        }
    })
}
