//! Nova Defense entry point
//!
//! The browser build starts from `platform::web`; natively this runs a
//! headless autopiloted match and reports how it went.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use nova_defense::consts::NOMINAL_TICK_HZ;
    use nova_defense::sim::{GameEvent, GameState};
    use nova_defense::{GameLoop, ManualScheduler};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    log::info!("Nova Defense (native) starting headless match, seed {}", seed);

    let mut game = GameLoop::new(GameState::new(seed), ManualScheduler::default());
    game.set_autopilot(true);
    game.start();

    // Ten minutes of play at the nominal frame rate
    let max_frames = 10 * 60 * NOMINAL_TICK_HZ as u64;
    let mut intercepts = 0u64;
    let mut launches = 0u64;
    let mut frames = 0u64;
    while frames < max_frames {
        let Some(snapshot) = game.pump() else {
            break;
        };
        frames += 1;
        for event in &snapshot.events {
            match event {
                GameEvent::RocketIntercepted { .. } => intercepts += 1,
                GameEvent::MissileLaunched { .. } => launches += 1,
                _ => {}
            }
        }
    }
    game.stop();

    let state = &game.state;
    println!("Status:      {:?}", state.status);
    println!("Score:       {} / {}", state.score, state.tuning.win_score);
    println!(
        "Time:        {} ticks (~{}s)",
        state.time_ticks,
        state.time_ticks / NOMINAL_TICK_HZ as u64
    );
    println!("Missiles:    {} fired, {} intercepts", launches, intercepts);
    println!(
        "Standing:    {} cities, {} batteries",
        state.surviving_cities().count(),
        state.surviving_batteries().count()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
