//! Platform abstraction layer
//!
//! Binds the simulation to a host's frame clock:
//! - `FrameScheduler`: request/cancel one callback per frame
//! - `GameLoop`: owns the game state and keeps exactly one frame pending
//!   while playing
//! - `web` (wasm32 only): requestAnimationFrame host

#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::Vec2;

use crate::sim::{GameSnapshot, GameState, TickInput, tick};

/// Host facility that calls back once on the next frame
pub trait FrameScheduler {
    type Handle: Copy + std::fmt::Debug;

    /// Ask for one callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Drop a pending callback
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Drives the simulation one tick per host frame
#[derive(Debug)]
pub struct GameLoop<S: FrameScheduler> {
    pub state: GameState,
    scheduler: S,
    pending: Option<S::Handle>,
    /// Fire actions received since the last frame
    queued_fire: Vec<Vec2>,
    autopilot: bool,
}

impl<S: FrameScheduler> GameLoop<S> {
    pub fn new(state: GameState, scheduler: S) -> Self {
        Self {
            state,
            scheduler,
            pending: None,
            queued_fire: Vec::new(),
            autopilot: false,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Whether a frame callback is outstanding
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Start or restart a session and make sure a frame is pending
    pub fn start(&mut self) {
        self.queued_fire.clear();
        self.state.start();
        self.schedule();
    }

    /// Queue a fire action for the next frame; ignored unless playing with a
    /// frame pending
    pub fn fire_at(&mut self, x: f32, y: f32) {
        if self.state.is_playing() && self.is_scheduled() {
            self.queued_fire.push(Vec2::new(x, y));
        }
    }

    /// Frame callback: tick once, then keep the loop alive only while playing
    pub fn on_frame(&mut self) -> GameSnapshot {
        self.pending = None;

        let input = TickInput {
            fire_at: std::mem::take(&mut self.queued_fire),
            autopilot: self.autopilot,
        };
        tick(&mut self.state, &input);

        if self.state.is_playing() {
            self.schedule();
        } else {
            self.stop();
        }
        GameSnapshot::capture(&mut self.state)
    }

    /// Cancel any pending frame and drop undelivered clicks. Safe to call
    /// repeatedly.
    pub fn stop(&mut self) {
        self.queued_fire.clear();
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            log::debug!("Cancelled frame {:?}", handle);
        }
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("Host refused to schedule a frame");
        }
    }
}

/// Scheduler for headless hosts and tests: frames are pumped by the caller
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    next_handle: u64,
    /// Handles requested and not yet cancelled or consumed
    pub outstanding: Vec<u64>,
    pub requested: u64,
    pub cancelled: u64,
}

impl FrameScheduler for ManualScheduler {
    type Handle = u64;

    fn request_frame(&mut self) -> Option<u64> {
        self.next_handle += 1;
        self.requested += 1;
        self.outstanding.push(self.next_handle);
        Some(self.next_handle)
    }

    fn cancel_frame(&mut self, handle: u64) {
        self.cancelled += 1;
        self.outstanding.retain(|&h| h != handle);
    }
}

impl GameLoop<ManualScheduler> {
    /// Deliver the pending frame, if any
    pub fn pump(&mut self) -> Option<GameSnapshot> {
        let handle = self.pending?;
        self.scheduler.outstanding.retain(|&h| h != handle);
        Some(self.on_frame())
    }

    /// Pump frames until the loop goes idle or `max_frames` have run
    pub fn run(&mut self, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames && self.pump().is_some() {
            frames += 1;
        }
        frames
    }
}
