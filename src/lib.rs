//! Nova Defense - A Missile Command style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, explosions, collisions, game state)
//! - `platform`: Frame scheduling for browser/native hosts
//! - `tuning`: Data-driven game balance and play field layout

pub mod platform;
pub mod sim;
pub mod tuning;

pub use platform::{FrameScheduler, GameLoop, ManualScheduler};
pub use tuning::{PlayField, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal host frame rate the per-tick speeds are tuned against
    pub const NOMINAL_TICK_HZ: u32 = 60;

    /// Score that ends the session in victory
    pub const WIN_SCORE: u64 = 1000;
    /// Points awarded for each rocket caught in an explosion
    pub const POINTS_PER_KILL: u64 = 20;

    /// Player blast defaults
    pub const EXPLOSION_MAX_RADIUS: f32 = 350.0;
    pub const EXPLOSION_GROWTH_RATE: f32 = 5.0;
    /// Every explosion starts at this radius
    pub const EXPLOSION_START_RADIUS: f32 = 2.0;
    /// Chain explosions are this fraction of a full blast (350 * 0.8 = 280)
    pub const CHAIN_RADIUS_FACTOR: f32 = 0.8;
    /// Contracting explosions shrink at this fraction of their growth rate
    pub const CONTRACT_FACTOR: f32 = 0.5;

    /// Ground impact flash
    pub const IMPACT_MAX_RADIUS: f32 = 20.0;
    pub const IMPACT_GROWTH_RATE: f32 = 1.5;

    /// Projectile speeds (progress per tick)
    pub const ROCKET_SPEED_MIN: f32 = 0.00025;
    pub const ROCKET_SPEED_MAX: f32 = 0.00075;
    pub const MISSILE_SPEED: f32 = 0.02;

    /// Ammo pools, left to right
    pub const BATTERY_AMMO: [u32; 3] = [20, 40, 20];
    pub const CITY_COUNT: usize = 6;

    /// Horizontal slack when matching a rocket's target to a structure
    pub const IMPACT_TOLERANCE: f32 = 5.0;

    /// Spawn chance per tick = base + score / divisor
    pub const SPAWN_BASE_CHANCE: f64 = 0.0075;
    pub const SPAWN_SCORE_DIVISOR: f64 = 10000.0;
}

/// Point along the segment `start -> target` at normalized `progress`
#[inline]
pub fn lerp_point(start: Vec2, target: Vec2, progress: f32) -> Vec2 {
    start + (target - start) * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_point_endpoints() {
        let a = Vec2::new(10.0, 0.0);
        let b = Vec2::new(110.0, 200.0);
        assert_eq!(lerp_point(a, b, 0.0), a);
        assert_eq!(lerp_point(a, b, 1.0), b);
        assert_eq!(lerp_point(a, b, 0.5), Vec2::new(60.0, 100.0));
    }
}
