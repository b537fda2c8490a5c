use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SettingsError;
use crate::physics::ParticlePool;
use crate::vector::Vector2D;

/// Populates a pool with an initial arrangement of particles.
pub trait ScenarioSetter: Send + Sync {
    fn populate(&self, pool: &mut ParticlePool, world_width: f64, world_height: f64);
}

/// Resolves a scenario by the name used in the settings file.
pub fn scenario_by_name(
    name: &str,
    particle_count: usize,
    seed: Option<u64>,
) -> Result<Box<dyn ScenarioSetter>, SettingsError> {
    match name {
        "figure-eight" => Ok(Box::new(FigureEightScenario)),
        "random" => Ok(Box::new(RandomCloudScenario { particle_count, seed })),
        "ring" => Ok(Box::new(RingScenario { particle_count })),
        "empty" => Ok(Box::new(EmptyScenario)),
        other => Err(SettingsError::UnknownScenario(other.to_string())),
    }
}

/// Two fixed positive anchors and one negative particle launched past them,
/// which settles into a figure-eight orbit.
pub struct FigureEightScenario;

impl ScenarioSetter for FigureEightScenario {
    fn populate(&self, pool: &mut ParticlePool, _world_width: f64, _world_height: f64) {
        let zero = Vector2D::zeros();
        pool.spawn(20e-3, 200e-6, 250.0, 300.0, zero, zero, true);
        pool.spawn(20e-3, 200e-6, 650.0, 300.0, zero, zero, true);
        pool.spawn(20e-3, -200e-6, 650.0, 150.0, Vector2D::new(-11.78, 0.0), zero, false);
    }
}

/// Uniformly scattered particles with launcher-range masses and charges.
pub struct RandomCloudScenario {
    pub particle_count: usize,
    pub seed: Option<u64>,
}

impl ScenarioSetter for RandomCloudScenario {
    fn populate(&self, pool: &mut ParticlePool, world_width: f64, world_height: f64) {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let zero = Vector2D::zeros();

        for _ in 0..self.particle_count {
            let mass = rng.gen_range(1e-3..10e-3);
            let magnitude = rng.gen_range(1.0..500.0) * 1e-6;
            let charge = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
            let x = rng.gen_range(0.0..world_width);
            let y = rng.gen_range(0.0..world_height);
            let velocity = Vector2D::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            pool.spawn(mass, charge, x, y, velocity, zero, false);
        }
    }
}

/// Alternating charges spaced evenly on a circle around the world centre.
pub struct RingScenario {
    pub particle_count: usize,
}

impl ScenarioSetter for RingScenario {
    fn populate(&self, pool: &mut ParticlePool, world_width: f64, world_height: f64) {
        if self.particle_count == 0 {
            return;
        }
        let center = Vector2D::new(world_width / 2.0, world_height / 2.0);
        let radius = 0.35 * world_width.min(world_height);
        let zero = Vector2D::zeros();

        for i in 0..self.particle_count {
            let angle = i as f64 / self.particle_count as f64 * 2.0 * std::f64::consts::PI;
            let charge = if i % 2 == 0 { 50e-6 } else { -50e-6 };
            pool.spawn(
                5e-3,
                charge,
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
                zero,
                zero,
                false,
            );
        }
    }
}

pub struct EmptyScenario;

impl ScenarioSetter for EmptyScenario {
    fn populate(&self, _pool: &mut ParticlePool, _world_width: f64, _world_height: f64) {}
}
