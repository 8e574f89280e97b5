//! Browser host: requestAnimationFrame scheduling and the JS-facing facade
//!
//! The page owns the canvas, input capture and drawing; it forwards clicks to
//! `WebGame::fire_at` and reads `WebGame::snapshot_json` once per frame.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{FrameScheduler, GameLoop};
use crate::sim::{GameSnapshot, GameState};
use crate::tuning::{PlayField, Tuning};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Schedules frames through `window.requestAnimationFrame`
pub struct RafScheduler {
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web_sys::window()?;
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Nova Defense (web) ready");
}

/// Game instance exposed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Rc<RefCell<GameLoop<RafScheduler>>>,
    latest: Rc<RefCell<Option<GameSnapshot>>>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game for a play area of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let seed = js_sys::Date::now() as u64;
        let state = GameState::with_config(seed, Tuning::load(), PlayField::new(width, height));

        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler {
            callback: slot.clone(),
        };
        let game = Rc::new(RefCell::new(GameLoop::new(state, scheduler)));
        let latest: Rc<RefCell<Option<GameSnapshot>>> = Rc::new(RefCell::new(None));

        let weak: Weak<RefCell<GameLoop<RafScheduler>>> = Rc::downgrade(&game);
        let latest_frame = latest.clone();
        let callback = Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            let Some(game) = weak.upgrade() else {
                return;
            };
            let mut snapshot = game.borrow_mut().on_frame();

            // Keep events from frames the page has not read yet
            let mut latest = latest_frame.borrow_mut();
            if let Some(unread) = latest.take() {
                snapshot.events.splice(0..0, unread.events);
            }
            *latest = Some(snapshot);
        });
        *slot.borrow_mut() = Some(callback);

        log::info!("Created game {}x{} (seed {})", width, height, seed);
        WebGame { game, latest }
    }

    /// Start or restart a session
    pub fn start(&self) {
        self.latest.borrow_mut().take();
        self.game.borrow_mut().start();
    }

    /// Stop the frame loop without touching game state
    pub fn stop(&self) {
        self.game.borrow_mut().stop();
    }

    /// Player click/tap in play-area coordinates
    pub fn fire_at(&self, x: f32, y: f32) {
        self.game.borrow_mut().fire_at(x, y);
    }

    /// Idle/demo mode toggle
    pub fn set_autopilot(&self, enabled: bool) {
        self.game.borrow_mut().set_autopilot(enabled);
    }

    /// Latest frame as JSON (falls back to the current state between frames)
    pub fn snapshot_json(&self) -> Option<String> {
        let snapshot = match self.latest.borrow_mut().take() {
            Some(snapshot) => snapshot,
            None => GameSnapshot::capture(&mut self.game.borrow_mut().state),
        };
        match snapshot.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("Snapshot serialization failed: {}", e);
                None
            }
        }
    }
}

impl Drop for WebGame {
    fn drop(&mut self) {
        // No callback may fire into a dropped closure
        if let Ok(mut game) = self.game.try_borrow_mut() {
            game.stop();
        }
    }
}
