//! Fixed-timestep simulation
//!
//! Everything that advances per tick lives here and must stay deterministic:
//! - One clamped timestep per tick, used for every integration in that tick
//! - Seeded RNG only (particle texture choice and lifetime jitter)
//! - No rendering or platform dependencies; the physics world and the draw
//!   surface come in through traits

pub mod particles;
pub mod stepper;

pub use particles::{Emitter, Particle, ParticleSystem};
pub use stepper::{Phase, SimulationStepper};
