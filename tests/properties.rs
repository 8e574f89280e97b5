//! Property-based tests for simulation invariants.
//!
//! Each case plays a seeded session with random clicks and checks the
//! invariants after every tick.

use glam::Vec2;
use proptest::prelude::*;

use nova_defense::sim::{GameEvent, GameState, GameStatus, TickInput, fire_at, step, tick};

/// A click somewhere in the default 1280x720 field on a given tick
fn click_strategy() -> impl Strategy<Value = (u16, f32, f32)> {
    (0u16..600, 0.0f32..1280.0, 0.0f32..720.0)
}

fn playing(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    state.start();
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Score only grows, only in kill-sized steps, and each step matches the
    /// interceptions reported that tick.
    #[test]
    fn prop_score_monotonic_in_kill_steps(
        seed in any::<u64>(),
        clicks in prop::collection::vec(click_strategy(), 0..40),
        autopilot in any::<bool>(),
    ) {
        let mut state = playing(seed);
        let mut last_score = 0;

        for t in 0..600u16 {
            let input = TickInput {
                fire_at: clicks
                    .iter()
                    .filter(|(at, _, _)| *at == t)
                    .map(|&(_, x, y)| Vec2::new(x, y))
                    .collect(),
                autopilot,
            };
            tick(&mut state, &input);

            let kills = state
                .take_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::RocketIntercepted { .. }))
                .count() as u64;
            prop_assert!(state.score >= last_score);
            prop_assert_eq!(state.score - last_score, kills * 20);
            last_score = state.score;

            if !state.is_playing() {
                break;
            }
        }
    }

    /// Ammo never underflows and a fire never comes from an empty battery.
    #[test]
    fn prop_ammo_conserved(
        seed in any::<u64>(),
        xs in prop::collection::vec(0.0f32..1280.0, 0..150),
    ) {
        let mut state = playing(seed);
        let total: u32 = state.batteries.iter().map(|b| b.ammo).sum();

        for (shots, x) in xs.iter().enumerate() {
            let before: Vec<u32> = state.batteries.iter().map(|b| b.ammo).collect();
            let fired = fire_at(&mut state, Vec2::new(*x, 100.0));
            let after: Vec<u32> = state.batteries.iter().map(|b| b.ammo).collect();

            match fired {
                Some(_) => {
                    let changed: Vec<usize> = (0..before.len())
                        .filter(|&i| before[i] != after[i])
                        .collect();
                    prop_assert_eq!(changed.len(), 1);
                    prop_assert!(before[changed[0]] > 0);
                    prop_assert_eq!(after[changed[0]], before[changed[0]] - 1);
                }
                None => {
                    prop_assert_eq!(&before, &after);
                    prop_assert!(shots as u32 >= total);
                }
            }
        }
        prop_assert_eq!(
            state.missiles.len() as u32 + state.batteries.iter().map(|b| b.ammo).sum::<u32>(),
            total
        );
    }

    /// Projectiles advance every tick and leave exactly when they arrive;
    /// explosions stay within [0, max_radius].
    #[test]
    fn prop_motion_and_radius_bounds(
        seed in any::<u64>(),
        clicks in prop::collection::vec(click_strategy(), 1..30),
    ) {
        let mut state = playing(seed);
        for &(_, x, y) in &clicks {
            fire_at(&mut state, Vec2::new(x, y));
        }

        for _ in 0..400 {
            let before: Vec<(u32, f32)> = state
                .rockets
                .iter()
                .chain(state.missiles.iter())
                .map(|p| (p.id, p.progress))
                .collect();

            step(&mut state);
            if !state.is_playing() {
                break;
            }

            for p in state.rockets.iter().chain(state.missiles.iter()) {
                prop_assert!(p.progress < 1.0);
                if let Some(&(_, old)) = before.iter().find(|(id, _)| *id == p.id) {
                    prop_assert!(p.progress > old);
                }
            }
            for e in &state.explosions {
                prop_assert!(e.radius > 0.0);
                prop_assert!(e.radius <= e.max_radius);
            }
        }
    }

    /// Restarting from any finished session yields the same initial layout.
    #[test]
    fn prop_restart_idempotent(seed in any::<u64>(), ticks in 0u32..2000) {
        let fresh = playing(seed);
        let mut state = playing(seed);
        for i in 0..ticks {
            if i % 90 == 0 {
                fire_at(&mut state, Vec2::new((i % 1280) as f32, 200.0));
            }
            step(&mut state);
        }
        if state.is_playing() {
            state.batteries.iter_mut().for_each(|b| b.destroyed = true);
            step(&mut state);
        }
        prop_assert!(matches!(state.status, GameStatus::Won | GameStatus::Lost));

        state.restart();
        prop_assert_eq!(state.status, GameStatus::Playing);
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(&state.batteries, &fresh.batteries);
        prop_assert_eq!(&state.cities, &fresh.cities);
        prop_assert!(state.rockets.is_empty());
        prop_assert!(state.missiles.is_empty());
        prop_assert!(state.explosions.is_empty());
    }
}
