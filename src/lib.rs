//! Charged-particle simulation kernel.
//!
//! A fixed-capacity [`ParticlePool`] advances a population of point charges
//! one frame at a time: pairwise Coulomb forces, elastic collisions between
//! overlapping discs, explicit Euler integration and retirement of particles
//! that drift far outside the world. Drawing and input handling live in the
//! caller; the kernel only needs the world size and explicit spawn/click
//! calls.

pub mod app_settings;
pub mod color;
pub mod error;
pub mod launch;
pub mod particle;
pub mod physics;
pub mod scenario;
pub mod vector;

pub use app_settings::AppSettings;
pub use error::SettingsError;
pub use launch::LaunchParams;
pub use particle::Particle;
pub use physics::{ParticlePool, PhysicsSettings, PoolSnapshot, RenderInstance, TickReport};
pub use scenario::{scenario_by_name, ScenarioSetter};
pub use vector::{PlanarVector, Vector2D};
