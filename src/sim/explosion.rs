//! Explosion lifecycle
//!
//! An explosion starts small, grows to its max radius, then shrinks at half
//! speed and is pruned once the radius reaches zero.

use glam::Vec2;

use super::state::{Explosion, ExplosionKind, GameState};

impl Explosion {
    /// Advance one tick. Growth is clamped so `radius <= max_radius` holds.
    pub fn step(&mut self, contract_factor: f32) {
        if self.expanding {
            self.radius = (self.radius + self.growth_rate).min(self.max_radius);
            if self.radius >= self.max_radius {
                self.expanding = false;
            }
        } else {
            self.radius -= self.growth_rate * contract_factor;
        }
    }

    /// Fully contracted, ready to be pruned
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.radius <= 0.0
    }

    /// Whether `point` lies strictly inside the blast
    #[inline]
    pub fn engulfs(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }
}

impl GameState {
    /// Create an explosion sized for `kind` at `pos`, returning its ID
    pub fn spawn_explosion(&mut self, kind: ExplosionKind, pos: Vec2) -> u32 {
        let tuning = &self.tuning;
        let (max_radius, growth_rate) = match kind {
            ExplosionKind::Blast => (tuning.explosion_max_radius, tuning.explosion_growth_rate),
            ExplosionKind::Chain => (tuning.chain_max_radius(), tuning.explosion_growth_rate),
            ExplosionKind::Impact => (tuning.impact_max_radius, tuning.impact_growth_rate),
        };
        let radius = tuning.explosion_start_radius;

        let id = self.next_entity_id();
        self.explosions.push(Explosion {
            id,
            kind,
            pos,
            radius,
            max_radius,
            growth_rate,
            expanding: true,
        });
        id
    }
}

/// Step every explosion and drop the spent ones
pub fn update_explosions(state: &mut GameState) {
    let contract_factor = state.tuning.contract_factor;
    for explosion in &mut state.explosions {
        explosion.step(contract_factor);
    }
    state.explosions.retain(|e| !e.is_spent());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blast(max_radius: f32, growth_rate: f32) -> Explosion {
        Explosion {
            id: 1,
            kind: ExplosionKind::Blast,
            pos: Vec2::ZERO,
            radius: 2.0,
            max_radius,
            growth_rate,
            expanding: true,
        }
    }

    #[test]
    fn test_grows_then_contracts_at_half_rate() {
        let mut e = blast(10.0, 4.0);
        e.step(0.5);
        assert_eq!(e.radius, 6.0);
        assert!(e.expanding);
        e.step(0.5);
        // 10.0 reached exactly, flips
        assert_eq!(e.radius, 10.0);
        assert!(!e.expanding);
        e.step(0.5);
        assert_eq!(e.radius, 8.0);
    }

    #[test]
    fn test_growth_never_overshoots_max() {
        let mut e = blast(350.0, 5.0);
        for _ in 0..200 {
            e.step(0.5);
            assert!(e.radius <= e.max_radius);
        }
    }

    #[test]
    fn test_spawn_sizes_by_kind() {
        let mut state = GameState::new(3);
        state.spawn_explosion(ExplosionKind::Blast, Vec2::ZERO);
        state.spawn_explosion(ExplosionKind::Chain, Vec2::ZERO);
        state.spawn_explosion(ExplosionKind::Impact, Vec2::ZERO);

        let sizes: Vec<(f32, f32)> = state
            .explosions
            .iter()
            .map(|e| (e.max_radius, e.growth_rate))
            .collect();
        assert_eq!(sizes[0], (350.0, 5.0));
        assert!((sizes[1].0 - 280.0).abs() < 0.001);
        assert_eq!(sizes[1].1, 5.0);
        assert_eq!(sizes[2], (20.0, 1.5));
        assert!(state.explosions.iter().all(|e| e.radius == 2.0 && e.expanding));
    }

    #[test]
    fn test_update_prunes_spent() {
        let mut state = GameState::new(3);
        state.spawn_explosion(ExplosionKind::Impact, Vec2::ZERO);
        let mut ticks = 0;
        while !state.explosions.is_empty() {
            update_explosions(&mut state);
            ticks += 1;
            assert!(ticks < 1000, "explosion never expired");
        }
        // 12 ticks to grow 2 -> 20, then 27 ticks to shrink below 0 at 0.75/tick
        assert_eq!(ticks, 12 + 27);
    }

    #[test]
    fn test_engulfs_is_strict() {
        let mut e = blast(100.0, 5.0);
        e.radius = 50.0;
        assert!(e.engulfs(Vec2::new(49.9, 0.0)));
        assert!(!e.engulfs(Vec2::new(50.0, 0.0)));
    }
}
