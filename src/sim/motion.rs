//! Straight-line projectile motion
//!
//! Rockets and missiles share one integrator: progress advances by a fixed
//! amount per tick and position is interpolated from start to target.

use super::state::Projectile;
use crate::lerp_point;

impl Projectile {
    /// Advance one tick. Returns true once the projectile has arrived.
    pub fn advance(&mut self) -> bool {
        self.progress += self.speed;
        self.pos = lerp_point(self.start, self.target, self.progress);
        self.has_arrived()
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Advance every projectile and move the arrived ones out of `active`.
///
/// Survivors keep their relative order; arrivals are returned in the order
/// they were stored.
pub fn advance_all(active: &mut Vec<Projectile>) -> Vec<Projectile> {
    let mut arrived = Vec::new();
    let mut still_flying = Vec::with_capacity(active.len());
    for mut projectile in active.drain(..) {
        if projectile.advance() {
            arrived.push(projectile);
        } else {
            still_flying.push(projectile);
        }
    }
    *active = still_flying;
    arrived
}
