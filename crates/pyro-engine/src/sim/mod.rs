//! Firework simulation: projectiles, burst fragments, and the frame scheduler.
//!
//! [`ShowState`] owns the whole simulation: both entity collections, both
//! spawn governors, the pointer state, and the RNG. It is constructed fresh
//! per mounted view and explicitly shut down on unmount; nothing lives in
//! module-level state.

mod factory;
mod firework;
mod governor;
mod particle;

pub use factory::{burst_count, spawn_burst};
pub use firework::{Firework, Impact};
pub use governor::SpawnGovernor;
pub use particle::Particle;

use glam::Vec2;

use crate::config::{ShowConfig, ShowError};
use crate::core::rng::Rng;
use crate::input::{InputEvent, InputQueue, PointerState};
use crate::render::Surface;

/// Fireworks per launch batch, inclusive bounds.
const BATCH_MIN: u32 = 5;
const BATCH_MAX: u32 = 10;
/// Number of known burst kinds; launch kinds are drawn from [0, KINDS).
const KINDS: u32 = 4;

/// The per-frame scheduler and sole owner of the simulation state.
pub struct ShowState {
    pub fireworks: Vec<Firework>,
    pub particles: Vec<Particle>,
    /// Idle launcher: fires while the pointer is up.
    auto: SpawnGovernor,
    /// Held launcher: streams bursts at the cursor while the pointer is down.
    held: SpawnGovernor,
    input: InputQueue,
    pointer: PointerState,
    rng: Rng,
    width: f32,
    height: f32,
    fade_strength: f32,
    /// Shared hue for every firework drawn in the current frame.
    hue: f32,
    running: bool,
}

impl ShowState {
    pub fn new(config: ShowConfig) -> Result<Self, ShowError> {
        if config.width <= 0.0 || config.height <= 0.0 {
            return Err(ShowError::EmptyViewport {
                width: config.width,
                height: config.height,
            });
        }
        log::debug!(
            "show: {}x{} viewport, seed {}",
            config.width,
            config.height,
            config.seed
        );
        Ok(ShowState {
            fireworks: Vec::new(),
            particles: Vec::new(),
            auto: SpawnGovernor::new(config.auto_interval),
            held: SpawnGovernor::new(config.held_interval),
            input: InputQueue::new(),
            pointer: PointerState::default(),
            rng: Rng::new(config.seed),
            width: config.width,
            height: config.height,
            fade_strength: config.fade_strength,
            hue: 0.0,
            running: true,
        })
    }

    /// Queue a pointer event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Launch a single firework directly, for scripted reveal moments.
    pub fn launch(&mut self, origin: Vec2, target: Vec2, kind: u8) {
        self.fireworks
            .push(Firework::new(origin, target, kind, &mut self.rng));
    }

    /// Run one display frame: fold input, fade the surface, tick the
    /// governors, then draw-and-advance every entity.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        if !self.running {
            return;
        }

        for event in self.input.drain() {
            self.pointer.apply(event);
        }

        surface.fade(self.fade_strength);
        self.hue = self.rng.range(0.0, 360.0);

        if self.auto.tick(!self.pointer.pressed) {
            self.launch_idle_batch();
        }
        if self.held.tick(self.pointer.pressed) {
            self.launch_batch_at(self.pointer.position());
        }

        // Draw before update, removing entities in place. retain_mut keeps
        // the remove-while-iterating invariant: no element skipped or
        // reprocessed.
        let hue = self.hue;
        let Self {
            fireworks,
            particles,
            rng,
            ..
        } = self;
        fireworks.retain_mut(|fw| {
            fw.draw(surface, hue);
            match fw.update() {
                Some(impact) => {
                    spawn_burst(particles, impact.point, impact.kind, rng);
                    false
                }
                None => true,
            }
        });
        particles.retain_mut(|p| {
            p.draw(surface);
            p.update()
        });
    }

    /// Stop the show and drop all entities. Idempotent; `frame` becomes a
    /// no-op afterwards.
    pub fn shutdown(&mut self) {
        if !self.running && self.fireworks.is_empty() && self.particles.is_empty() {
            return;
        }
        self.fireworks.clear();
        self.particles.clear();
        self.running = false;
        log::debug!("show: shut down");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// The shared hue chosen for the most recent frame.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    fn launch_pad(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height)
    }

    fn batch_size(&mut self) -> u32 {
        BATCH_MIN + self.rng.next_int(BATCH_MAX - BATCH_MIN + 1)
    }

    /// Idle batch: random targets in the upper half of the viewport.
    fn launch_idle_batch(&mut self) {
        let origin = self.launch_pad();
        for _ in 0..self.batch_size() {
            let target = Vec2::new(
                self.rng.range(0.0, self.width),
                self.rng.range(0.0, self.height / 2.0),
            );
            let kind = self.rng.next_int(KINDS) as u8;
            self.fireworks
                .push(Firework::new(origin, target, kind, &mut self.rng));
        }
    }

    /// Held batch: every firework aimed at the same point (the cursor).
    fn launch_batch_at(&mut self, target: Vec2) {
        let origin = self.launch_pad();
        for _ in 0..self.batch_size() {
            let kind = self.rng.next_int(KINDS) as u8;
            self.fireworks
                .push(Firework::new(origin, target, kind, &mut self.rng));
        }
    }
}
