//! Trail particles behind the moving avatar
//!
//! The stepper re-aims the emitter each tick it detects movement, then calls
//! [`ParticleSystem::update`], which spawns a fixed batch and ages the whole
//! population. Particles are plain values owned exclusively by the system's
//! `Vec`; nothing else holds a reference to one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{ConfigError, ParticleConfig};
use crate::render::{DrawSurface, SourceRect, TextureId, Tint};

/// A single short-lived visual particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
    pub angular_velocity: f32,
    pub size: f32,
    pub tint: Tint,
    pub texture: TextureId,
    /// Remaining ticks; pruned once it reaches zero
    pub lifespan: i32,
}

impl Particle {
    /// Age by one tick
    fn advance(&mut self) {
        self.position += self.velocity;
        self.angle += self.angular_velocity;
        self.lifespan -= 1;
    }
}

/// Transient emission parameters, re-set by the game loop before each update
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    pub location: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
}

/// Owns the bounded-lifetime particle population
#[derive(Debug)]
pub struct ParticleSystem {
    emitter: Emitter,
    particles: Vec<Particle>,
    textures: Vec<TextureId>,
    /// Texture dimensions for centering the quad origin (uniform per palette)
    texture_size: Vec2,
    cfg: ParticleConfig,
    rng: Pcg32,
}

impl ParticleSystem {
    /// `textures` must be non-empty: every spawn picks one uniformly at
    /// random. `texture_size` is the (uniform) pixel size of those textures,
    /// used to center the draw origin.
    pub fn new(
        textures: Vec<TextureId>,
        texture_size: Vec2,
        cfg: ParticleConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if textures.is_empty() {
            return Err(ConfigError::Empty("particle texture set"));
        }
        cfg.validate()?;
        Ok(Self {
            emitter: Emitter::default(),
            particles: Vec::new(),
            textures,
            texture_size,
            cfg,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Aim the emitter for the next update
    pub fn set_emitter(&mut self, location: Vec2, velocity: Vec2, angle: f32) {
        self.emitter = Emitter { location, velocity, angle };
    }

    #[inline]
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Live particle count
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawn a batch from the emitter, then age and prune the population.
    ///
    /// Freshly spawned particles age in the same tick, matching the original
    /// game: a particle spawned with lifespan L survives exactly L updates.
    pub fn update(&mut self) {
        self.spawn_batch();
        self.advance_and_prune();
    }

    /// Draw every live particle as a texture-centered quad, in storage order
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let origin = self.texture_size / 2.0;
        let source = SourceRect {
            x: 0,
            y: 0,
            width: self.texture_size.x as u32,
            height: self.texture_size.y as u32,
        };
        for p in &self.particles {
            surface.draw_quad(
                p.texture,
                p.position,
                Some(source),
                p.tint,
                p.angle,
                origin,
                p.size,
                0.0,
            );
        }
    }

    fn spawn_batch(&mut self) {
        for _ in 0..self.cfg.spawn_per_update {
            let particle = self.generate();
            self.particles.push(particle);
        }
    }

    fn generate(&mut self) -> Particle {
        let texture = self.textures[self.rng.random_range(0..self.textures.len())];
        let jitter = if self.cfg.lifespan_jitter > 0 {
            self.rng.random_range(0..self.cfg.lifespan_jitter)
        } else {
            0
        };
        Particle {
            position: self.emitter.location,
            velocity: self.emitter.velocity,
            angle: self.emitter.angle,
            angular_velocity: 0.0,
            size: 1.0,
            tint: Tint::SANDY_BROWN,
            texture,
            lifespan: (self.cfg.base_lifespan + jitter) as i32,
        }
    }

    /// Age every particle exactly once, then drop the expired ones.
    ///
    /// The original pruned with a forward index loop that mutated the list it
    /// was walking, skipping the element shifted into a vacated slot. A
    /// retain sweep visits each element exactly once regardless of removals.
    fn advance_and_prune(&mut self) {
        for p in &mut self.particles {
            p.advance();
        }
        self.particles.retain(|p| p.lifespan > 0);
    }

    #[cfg(test)]
    fn push_raw(&mut self, p: Particle) {
        self.particles.push(p);
    }

    #[cfg(test)]
    fn lifespans(&self) -> Vec<i32> {
        self.particles.iter().map(|p| p.lifespan).collect()
    }
}
