//! The per-tick simulation loop
//!
//! One stepper instance drives one level session: it derives a control
//! vector from the latest accelerometer reading, feeds the physics world,
//! keeps the swim animation and facing angle current, aims the particle
//! trail, and parks the camera on the avatar. The host calls [`tick`]
//! from its ~30 Hz frame callback and then draws from the read accessors.
//!
//! [`tick`]: SimulationStepper::tick

use glam::Vec2;
use log::{debug, info};

use crate::camera::Camera;
use crate::config::{StepperConfig, ViewportConfig};
use crate::consts;
use crate::heading_between;
use crate::map::TileMap;
use crate::physics::{BodyHandle, PhysicsWorld};
use crate::render::SourceRect;
use crate::sim::particles::ParticleSystem;
use crate::units::UnitConverter;

/// Level session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

/// Advances the simulation by one clamped timestep per call
#[derive(Debug)]
pub struct SimulationStepper {
    cfg: StepperConfig,
    converter: UnitConverter,
    viewport: Vec2,
    map_px: Vec2,
    camera: Camera,
    particles: ParticleSystem,
    phase: Phase,
    facing: f32,
    frame: u32,
    anim_accumulator: f32,
}

impl SimulationStepper {
    pub fn new(
        cfg: StepperConfig,
        viewport: ViewportConfig,
        map: &TileMap,
        tile_size: u32,
        particles: ParticleSystem,
        converter: UnitConverter,
    ) -> Self {
        let map_px = map.pixel_size(tile_size);
        info!(
            "simulation ready: map {}x{} cells ({}x{} px), viewport {}x{}",
            map.width(),
            map.height(),
            map_px.x,
            map_px.y,
            viewport.width,
            viewport.height
        );
        Self {
            cfg,
            converter,
            viewport: viewport.as_vec(),
            map_px,
            camera: Camera::new(),
            particles,
            phase: Phase::Running,
            facing: 0.0,
            frame: 0,
            anim_accumulator: 0.0,
        }
    }

    /// Advance by one tick.
    ///
    /// The elapsed time is clamped to [`consts::MAX_STEP_SECONDS`] and that
    /// single clamped value is the time base for everything in the tick: the
    /// physics step and the animation accumulator. The raw value is never
    /// integrated (some original builds mixed clamped and raw elapsed time
    /// within one tick, drifting the two apart during hitches).
    pub fn tick<W: PhysicsWorld>(
        &mut self,
        world: &mut W,
        body: BodyHandle,
        elapsed_seconds: f32,
        raw_accel: Vec2,
    ) {
        if self.phase != Phase::Running {
            return;
        }
        let dt = elapsed_seconds.clamp(0.0, consts::MAX_STEP_SECONDS);

        let control = self.cfg.control.derive(raw_accel);

        let old_pos = world.position(body);
        world.apply_force(body, control * self.cfg.control.force_scale);
        world.step(dt);
        let new_pos = world.position(body);

        self.advance_animation(dt);

        if control.length() > self.cfg.emit_threshold {
            self.facing = heading_between(old_pos, new_pos);
            // Trail streams opposite the motion, in the avatar's wake
            self.particles
                .set_emitter(self.converter.to_display(new_pos), -control, 0.0);
            self.particles.update();
        }

        self.camera
            .set_position(self.converter.to_display(new_pos), self.map_px, self.viewport);
    }

    /// Drain the animation accumulator on a fixed real-time cadence.
    ///
    /// Multiple frames can advance in one tick after a hitch (catch-up, not
    /// skip), but the drain is bounded: past `max_catchup` the remainder is
    /// dropped so a pathological elapsed time cannot stall the loop.
    fn advance_animation(&mut self, dt: f32) {
        let anim = &self.cfg.animation;
        self.anim_accumulator += dt;
        let mut advanced = 0;
        while self.anim_accumulator > anim.frame_delay {
            if advanced == anim.max_catchup {
                self.anim_accumulator = 0.0;
                break;
            }
            self.frame = (self.frame + 1) % anim.frame_count;
            self.anim_accumulator -= anim.frame_delay;
            advanced += 1;
        }
    }

    /// End the session; further ticks are no-ops
    pub fn end_game(&mut self) {
        if self.phase == Phase::Running {
            debug!("game over");
            self.phase = Phase::GameOver;
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// Avatar facing angle in `[0, 2π)`, updated while moving
    #[inline]
    pub fn facing_angle(&self) -> f32 {
        self.facing
    }

    /// Current swim-cycle frame index
    #[inline]
    pub fn animation_frame(&self) -> u32 {
        self.frame
    }

    /// Sprite-sheet cell for the current animation frame, given the size of
    /// one frame in the sheet
    pub fn animation_source(&self, frame_width: u32, frame_height: u32) -> SourceRect {
        SourceRect {
            x: self.frame * frame_width,
            y: 0,
            width: frame_width,
            height: frame_height,
        }
    }

    /// The followed body's position in display pixels
    pub fn player_position_px<W: PhysicsWorld>(&self, world: &W, body: BodyHandle) -> Vec2 {
        self.converter.to_display(world.position(body))
    }
}
