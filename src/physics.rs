//! Opaque physics-world collaborator
//!
//! The game treats its rigid-body engine as a black box: bodies have a
//! position, a velocity and a rotation, accept forces, and the world
//! integrates when stepped. Hosts implement this trait over whatever engine
//! they embed; tests implement it over a few lines of Euler integration.

use glam::Vec2;

/// Handle to a rigid body owned by the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

/// The physics engine surface the simulation loop needs
pub trait PhysicsWorld {
    /// Advance the world by `dt` seconds. Callers cap `dt`; implementations
    /// may sub-step internally but must not assume a fixed cadence.
    fn step(&mut self, dt: f32);

    /// Apply a force to a body for the upcoming step
    fn apply_force(&mut self, body: BodyHandle, force: Vec2);

    /// Body position in simulation units (meters)
    fn position(&self, body: BodyHandle) -> Vec2;

    /// Body linear velocity in simulation units per second
    fn linear_velocity(&self, body: BodyHandle) -> Vec2;

    /// Body rotation in radians
    fn rotation(&self, body: BodyHandle) -> f32;
}
