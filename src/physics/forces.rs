//! Pairwise Coulomb accumulation over the live prefix of the pool.

use rayon::prelude::*;

use super::PhysicsSettings;
use crate::particle::Particle;
use crate::vector::{PlanarVector, Vector2D};

pub struct ForceField {
    coulomb_constant: f64,
    min_separation_factor: f64,
    parallel: bool,
    parallel_threshold: usize,
    scratch: Vec<Vector2D>,
}

impl Default for ForceField {
    fn default() -> Self {
        Self::new(&PhysicsSettings::default())
    }
}

impl ForceField {
    pub fn new(settings: &PhysicsSettings) -> Self {
        Self {
            coulomb_constant: settings.coulomb_constant,
            min_separation_factor: settings.min_separation_factor,
            parallel: settings.parallel_forces,
            parallel_threshold: settings.parallel_threshold,
            scratch: Vec::new(),
        }
    }

    /// Replaces every particle's acceleration with the net Coulomb
    /// acceleration from the rest of `live`.
    pub fn accumulate(&mut self, live: &mut [Particle]) {
        if self.parallel && live.len() >= self.parallel_threshold {
            self.accumulate_parallel(live);
        } else {
            self.accumulate_serial(live);
        }
    }

    /// One force evaluation per unordered pair, applied to both bodies with
    /// opposite signs.
    pub fn accumulate_serial(&self, live: &mut [Particle]) {
        for particle in live.iter_mut() {
            particle.acceleration = Vector2D::zeros();
        }

        let n = live.len();
        for i in 0..n {
            for j in (i + 1)..n {
                // force of j on i; i gets +F, j gets -F
                let force = live[j].coulomb_force_on(
                    &live[i],
                    self.coulomb_constant,
                    self.min_separation_factor,
                );
                let (mass_i, mass_j) = (live[i].mass, live[j].mass);
                live[i].acceleration.accumulate(&(force / mass_i));
                live[j].acceleration.accumulate(&(-force / mass_j));
            }
        }
    }

    /// Gathers each particle's net force on its own worker, then writes the
    /// accelerations back serially. Twice the force evaluations of the serial
    /// pass, but no two workers touch the same particle.
    pub fn accumulate_parallel(&mut self, live: &mut [Particle]) {
        let n = live.len();
        if n == 0 {
            return;
        }

        self.scratch.clear();
        self.scratch.resize(n, Vector2D::zeros());

        let coulomb_constant = self.coulomb_constant;
        let min_separation_factor = self.min_separation_factor;
        let chunk_size = (n / num_cpus::get()).max(1);
        let particles: &[Particle] = live;

        self.scratch
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let start_idx = chunk_idx * chunk_size;
                for (local_i, acceleration) in chunk.iter_mut().enumerate() {
                    let i = start_idx + local_i;
                    let target = &particles[i];
                    let mut net = Vector2D::zeros();
                    for (j, source) in particles.iter().enumerate() {
                        if i != j {
                            net += source.coulomb_force_on(target, coulomb_constant, min_separation_factor);
                        }
                    }
                    *acceleration = net / target.mass;
                }
            });

        for (particle, acceleration) in live.iter_mut().zip(&self.scratch) {
            particle.acceleration = *acceleration;
        }
    }
}
