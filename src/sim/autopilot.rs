//! Idle/demo mode - the simulation plays itself
//!
//! Picks the most advanced rocket that nothing is already aimed at, leads it
//! by the interceptor's flight time and fires at the predicted point.

use glam::Vec2;

use super::state::GameState;
use crate::lerp_point;

/// Hold fire while this many interceptors are airborne
pub const MAX_MISSILES_IN_FLIGHT: usize = 3;
/// A rocket counts as covered if a missile or live blast is this close to it
const COVER_RADIUS: f32 = 80.0;
/// Extra lead for the blast to grow after the missile arrives
const BLAST_GROWTH_TICKS: f32 = 8.0;

/// Point to fire at this tick, if any
pub fn choose_shot(state: &GameState) -> Option<Vec2> {
    if state.missiles.len() >= MAX_MISSILES_IN_FLIGHT {
        return None;
    }
    if !state.batteries.iter().any(|b| b.can_fire()) {
        return None;
    }

    let lead_ticks = 1.0 / state.tuning.missile_speed + BLAST_GROWTH_TICKS;

    let mut candidates: Vec<_> = state.rockets.iter().collect();
    // Most advanced first, ID keeps ties stable
    candidates.sort_by(|a, b| {
        b.progress
            .partial_cmp(&a.progress)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });

    candidates.into_iter().find_map(|rocket| {
        let future = (rocket.progress + rocket.speed * lead_ticks).min(1.0);
        let aim = lerp_point(rocket.start, rocket.target, future);

        let covered_by_missile = state
            .missiles
            .iter()
            .any(|m| m.target.distance(aim) < COVER_RADIUS);
        let covered_by_blast = state
            .explosions
            .iter()
            .any(|e| e.expanding && e.pos.distance(aim) < e.max_radius.min(COVER_RADIUS));

        (!covered_by_missile && !covered_by_blast).then_some(aim)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ExplosionKind, Projectile};

    fn playing_state() -> GameState {
        let mut state = GameState::new(21);
        state.start();
        state
    }

    #[test]
    fn test_leads_most_advanced_rocket() {
        let mut state = playing_state();
        let slow = Projectile {
            progress: 0.2,
            ..Projectile::new(1, Vec2::new(100.0, 0.0), Vec2::new(100.0, 700.0), 0.0005)
        };
        let deep = Projectile {
            progress: 0.6,
            ..Projectile::new(2, Vec2::new(900.0, 0.0), Vec2::new(900.0, 700.0), 0.0005)
        };
        state.rockets = vec![slow, deep];

        let aim = choose_shot(&state).unwrap();
        assert!((aim.x - 900.0).abs() < 0.01);
        // 0.6 + 0.0005 * 58 = 0.629 of the way down
        assert!(aim.y > 0.6 * 700.0);
    }

    #[test]
    fn test_skips_rockets_already_covered() {
        let mut state = playing_state();
        state.rockets = vec![Projectile {
            progress: 0.5,
            ..Projectile::new(1, Vec2::new(300.0, 0.0), Vec2::new(300.0, 700.0), 0.0005)
        }];
        let first = choose_shot(&state).unwrap();
        state.missiles.push(Projectile::new(
            99,
            state.batteries[0].pos,
            first,
            state.tuning.missile_speed,
        ));
        assert_eq!(choose_shot(&state), None);

        state.missiles.clear();
        state.spawn_explosion(ExplosionKind::Blast, first);
        assert_eq!(choose_shot(&state), None);
    }

    #[test]
    fn test_holds_fire_without_ammo() {
        let mut state = playing_state();
        state.rockets = vec![Projectile::new(
            1,
            Vec2::new(300.0, 0.0),
            Vec2::new(300.0, 700.0),
            0.0005,
        )];
        state.batteries.iter_mut().for_each(|b| b.ammo = 0);
        assert_eq!(choose_shot(&state), None);
    }
}
