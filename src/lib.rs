//! Reefdash - scrolling tile-map and simulation core for a 2D arcade game
//!
//! The playable character (a shark) swims over a tiled sea floor, steered by
//! tilting the device. This crate is the engine-agnostic core of that loop:
//!
//! - `sim`: fixed-timestep simulation (stepper, particle trail)
//! - `units`, `camera`, `map`, `render`: coordinate conversion, clamped
//!   camera follow and culled tile drawing
//! - `input`: accelerometer handoff and control derivation
//! - `physics`: the opaque rigid-body world the host plugs in
//! - `config`: explicit, JSON-loadable tuning (no global statics)
//!
//! The host owns the window, the content pipeline, the physics engine and the
//! sprite batcher; it drives [`sim::SimulationStepper::tick`] from its frame
//! callback and replays the resulting state through a [`render::DrawSurface`].

pub mod camera;
pub mod config;
pub mod input;
pub mod map;
pub mod physics;
pub mod render;
pub mod sim;
pub mod units;

pub use camera::Camera;
pub use config::{AnimationConfig, ConfigError, ParticleConfig, StepperConfig, ViewportConfig};
pub use input::{AccelerometerSlot, ControlTuning};
pub use map::TileMap;
pub use physics::{BodyHandle, PhysicsWorld};
pub use render::{DrawSurface, SourceRect, TextureId, TileMapRenderer, Tint};
pub use sim::{Particle, ParticleSystem, Phase, SimulationStepper};
pub use units::{UnitConverter, to_cell};

use glam::Vec2;

/// Game configuration constants (defaults; overridable through `config`)
pub mod consts {
    /// Upper bound on a single physics step (seconds). Frame hitches are
    /// capped here instead of feeding a huge dt into the world.
    pub const MAX_STEP_SECONDS: f32 = 1.0 / 30.0;

    /// Pixels per simulation meter
    pub const REAL_TO_VIRTUAL_RATIO: f32 = 100.0;

    /// Square tile edge in pixels
    pub const TILE_SIZE: u32 = 128;

    /// Viewport defaults (landscape phone screen)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;

    /// Swim-cycle sprite sheet frames
    pub const PLAYER_FRAME_COUNT: u32 = 16;
    /// Real-time delay between animation frames (seconds)
    pub const PLAYER_ANIMATION_DELAY: f32 = 0.1;
    /// Maximum animation frames advanced in a single tick
    pub const MAX_ANIMATION_CATCHUP: u32 = 8;

    /// Accelerometer deadzone per axis
    pub const CONTROL_DEADZONE: f32 = 0.1;
    /// Control vector clamp per axis
    pub const CONTROL_MAX_VELOCITY: f32 = 3.0;
    /// Force multiplier applied to the derived control vector
    pub const CONTROL_FORCE_SCALE: f32 = 5.0;

    /// Control magnitude above which the trail emits and facing updates
    pub const EMIT_THRESHOLD: f32 = 0.07;

    /// Particles spawned per emitter update
    pub const PARTICLES_PER_UPDATE: u32 = 10;
    /// Guaranteed particle lifetime (ticks)
    pub const PARTICLE_BASE_LIFESPAN: u32 = 10;
    /// Random extra lifetime, exclusive upper bound (ticks)
    pub const PARTICLE_LIFESPAN_JITTER: u32 = 20;
}

/// Heading of the movement from `b` toward `a`, as a sprite rotation.
///
/// The sprite sheet faces up at rotation zero, hence the quarter-turn
/// offset. Result is normalized to `[0, 2π)`.
#[inline]
pub fn heading_between(a: Vec2, b: Vec2) -> f32 {
    use std::f32::consts::{FRAC_PI_2, TAU};
    let mut angle = (a.y - b.y).atan2(a.x - b.x) - FRAC_PI_2;
    if angle < 0.0 {
        angle += TAU;
    }
    angle % TAU
}
