//! Overlap detection and elastic collision response.
//!
//! Each overlapping pair is solved as a one-dimensional elastic collision
//! along the line joining the centres; the tangential components pass through
//! untouched. Fixed particles take part through a very large stand-in mass,
//! which makes them behave like walls but is not an exact rigid contact: a
//! free particle glancing off a fixed one can still lose a little energy to
//! the rounding in the mass ratio.

use super::PhysicsSettings;
use crate::particle::Particle;
use crate::vector::{PlanarVector, Vector2D};

pub struct CollisionResolver {
    fixed_collision_mass: f64,
    colliding: Vec<bool>,
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::new(&PhysicsSettings::default())
    }
}

impl CollisionResolver {
    pub fn new(settings: &PhysicsSettings) -> Self {
        Self {
            fixed_collision_mass: settings.fixed_collision_mass,
            colliding: Vec::new(),
        }
    }

    /// Resolves every overlapping pair in `live` and refreshes the
    /// `in_collision` latch. Returns how many particles are in contact.
    ///
    /// Overlapping particles lose their force-driven acceleration for the
    /// tick. A pair that was already latched on the previous tick keeps its
    /// velocities, otherwise bodies in sustained contact would be bounced
    /// back and forth every frame.
    pub fn resolve(&mut self, live: &mut [Particle]) -> usize {
        let n = live.len();
        self.colliding.clear();
        self.colliding.resize(n, false);

        for i in 0..n {
            for j in (i + 1)..n {
                let reach = live[i].radius + live[j].radius;
                if live[i].distance_squared_to(&live[j]) > reach * reach {
                    continue;
                }

                live[i].acceleration = Vector2D::zeros();
                live[j].acceleration = Vector2D::zeros();
                self.colliding[i] = true;
                self.colliding[j] = true;

                if live[i].in_collision && live[j].in_collision {
                    continue;
                }

                let (head, tail) = live.split_at_mut(j);
                self.bounce(&mut head[i], &mut tail[0]);
            }
        }

        let mut in_contact = 0;
        for (particle, &hit) in live.iter_mut().zip(&self.colliding) {
            particle.in_collision = hit;
            in_contact += hit as usize;
        }
        in_contact
    }

    fn bounce(&self, a: &mut Particle, b: &mut Particle) {
        let axis = Vector2D::unit_from_heading(a.angle_to(b));
        let tangent = Vector2D::new(-axis.y, axis.x);

        let (u1, u2) = (a.velocity.dot(&axis), b.velocity.dot(&axis));
        let (t1, t2) = (a.velocity.dot(&tangent), b.velocity.dot(&tangent));
        let m1 = a.collision_mass(self.fixed_collision_mass);
        let m2 = b.collision_mass(self.fixed_collision_mass);

        let (v1, v2) = elastic_1d(m1, m2, u1, u2);

        if !a.fixed {
            a.velocity = axis * v1 + tangent * t1;
        }
        if !b.fixed {
            b.velocity = axis * v2 + tangent * t2;
        }
    }
}

/// Outgoing speeds of a head-on elastic collision between masses `m1`, `m2`
/// arriving with speeds `u1`, `u2` along the same line.
pub fn elastic_1d(m1: f64, m2: f64, u1: f64, u2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1 = (u1 * (m1 - m2) + 2.0 * m2 * u2) / total;
    let v2 = (u2 * (m2 - m1) + 2.0 * m1 * u1) / total;
    (v1, v2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(mass: f64, x: f64, y: f64, vx: f64, vy: f64, fixed: bool) -> Particle {
        let mut p = Particle::dead();
        p.spawn(mass, 0.0, x, y, Vector2D::new(vx, vy), Vector2D::zeros(), fixed);
        p
    }

    #[test]
    fn equal_masses_swap_speeds() {
        assert_eq!(elastic_1d(2.0, 2.0, 3.0, -1.0), (-1.0, 3.0));
    }

    #[test]
    fn head_on_equal_masses_exchange_velocities() {
        let mut live = vec![
            moving(1e-3, 0.0, 0.0, 1.0, 0.0, false),
            moving(1e-3, 0.0, 0.0, -1.0, 0.0, false),
        ];
        let touching = CollisionResolver::default().resolve(&mut live);

        assert_eq!(touching, 2);
        assert!((live[0].velocity - Vector2D::new(-1.0, 0.0)).norm() < 1e-12);
        assert!((live[1].velocity - Vector2D::new(1.0, 0.0)).norm() < 1e-12);
        assert!(live[0].in_collision && live[1].in_collision);
    }

    #[test]
    fn tangential_motion_passes_through() {
        // contact axis is x; the y components must survive untouched
        let mut live = vec![
            moving(1e-3, 0.0, 0.0, 1.0, 0.5, false),
            moving(1e-3, 1.5, 0.0, 0.0, -0.25, false),
        ];
        CollisionResolver::default().resolve(&mut live);

        assert!((live[0].velocity - Vector2D::new(0.0, 0.5)).norm() < 1e-12);
        assert!((live[1].velocity - Vector2D::new(1.0, -0.25)).norm() < 1e-12);
    }

    #[test]
    fn latched_pair_is_not_resolved_again() {
        let mut live = vec![
            moving(1e-3, 0.0, 0.0, 1.0, 0.0, false),
            moving(1e-3, 0.5, 0.0, -1.0, 0.0, false),
        ];
        let mut resolver = CollisionResolver::default();
        resolver.resolve(&mut live);
        let after_first = (live[0].velocity, live[1].velocity);

        resolver.resolve(&mut live);
        assert_eq!((live[0].velocity, live[1].velocity), after_first);
    }

    #[test]
    fn separation_clears_latch() {
        let mut live = vec![
            moving(1e-3, 0.0, 0.0, 0.0, 0.0, false),
            moving(1e-3, 1.0, 0.0, 0.0, 0.0, false),
        ];
        let mut resolver = CollisionResolver::default();
        resolver.resolve(&mut live);
        assert!(live[0].in_collision);

        live[1].position = Vector2D::new(10.0, 0.0);
        assert_eq!(resolver.resolve(&mut live), 0);
        assert!(!live[0].in_collision && !live[1].in_collision);
    }

    #[test]
    fn overlap_zeroes_acceleration() {
        let mut live = vec![
            moving(1e-3, 0.0, 0.0, 0.0, 0.0, false),
            moving(1e-3, 1.0, 0.0, 0.0, 0.0, false),
            moving(1e-3, 50.0, 0.0, 0.0, 0.0, false),
        ];
        for p in live.iter_mut() {
            p.acceleration = Vector2D::new(1.0, 1.0);
        }
        CollisionResolver::default().resolve(&mut live);

        assert_eq!(live[0].acceleration, Vector2D::zeros());
        assert_eq!(live[1].acceleration, Vector2D::zeros());
        assert_eq!(live[2].acceleration, Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn fixed_particle_keeps_velocity_and_reflects_the_other() {
        let mut live = vec![
            moving(1e-3, 0.0, 0.0, 2.0, 0.0, false),
            moving(1e-3, 1.0, 0.0, 0.0, 0.0, true),
        ];
        CollisionResolver::default().resolve(&mut live);

        assert_eq!(live[1].velocity, Vector2D::zeros());
        assert!((live[0].velocity.x + 2.0).abs() < 1e-9);
    }
}
