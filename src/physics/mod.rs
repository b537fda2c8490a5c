pub mod collision;
pub mod forces;
pub mod pool;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::particle::{Particle, COULOMB_CONSTANT, MIN_SEPARATION_FACTOR};
use crate::vector::Vector2D;

pub use collision::{elastic_1d, CollisionResolver};
pub use forces::ForceField;
pub use pool::{ParticlePool, TickReport};

/// Stand-in mass for fixed particles inside the collision solver.
pub const FIXED_COLLISION_MASS: f64 = 1e20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub coulomb_constant: f64,
    pub fixed_collision_mass: f64,
    pub min_separation_factor: f64,
    pub parallel_forces: bool,
    pub parallel_threshold: usize,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            coulomb_constant: COULOMB_CONSTANT,
            fixed_collision_mass: FIXED_COLLISION_MASS,
            min_separation_factor: MIN_SEPARATION_FACTOR,
            parallel_forces: false,
            parallel_threshold: 256,
        }
    }
}

/// Per-instance data for a GPU renderer, one entry per live particle.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub position: [f32; 2],
    pub radius: f32,
    pub fixed: u32,
    pub color: [f32; 4],
}

impl From<&Particle> for RenderInstance {
    fn from(p: &Particle) -> Self {
        Self {
            position: [p.position.x as f32, p.position.y as f32],
            radius: p.radius as f32,
            fixed: p.fixed as u32,
            color: p.color(),
        }
    }
}

/// Owned copy of the live population, taken after a tick.
#[derive(Debug, Clone, Default)]
pub struct PoolSnapshot {
    pub positions: Vec<Vector2D>,
    pub velocities: Vec<Vector2D>,
    pub radii: Vec<f64>,
    pub masses: Vec<f64>,
    pub charges: Vec<f64>,
    pub fixed: Vec<bool>,
    pub particle_count: usize,
    pub colliding_count: usize,
}

impl PoolSnapshot {
    pub fn from_particles(particles: &[Particle]) -> Self {
        Self {
            positions: particles.iter().map(|p| p.position).collect(),
            velocities: particles.iter().map(|p| p.velocity).collect(),
            radii: particles.iter().map(|p| p.radius).collect(),
            masses: particles.iter().map(|p| p.mass).collect(),
            charges: particles.iter().map(|p| p.charge).collect(),
            fixed: particles.iter().map(|p| p.fixed).collect(),
            particle_count: particles.len(),
            colliding_count: particles.iter().filter(|p| p.in_collision).count(),
        }
    }

    /// Kinetic energy of the free particles; fixed ones never move.
    pub fn kinetic_energy(&self) -> f64 {
        self.masses
            .iter()
            .zip(&self.velocities)
            .zip(&self.fixed)
            .filter(|&(_, &fixed)| !fixed)
            .map(|((m, v), _)| 0.5 * m * v.norm_squared())
            .sum()
    }

    pub fn momentum(&self) -> Vector2D {
        self.masses
            .iter()
            .zip(&self.velocities)
            .zip(&self.fixed)
            .filter(|&(_, &fixed)| !fixed)
            .fold(Vector2D::zeros(), |acc, ((m, v), _)| acc + v * *m)
    }

    pub fn net_charge(&self) -> f64 {
        self.charges.iter().sum()
    }
}
