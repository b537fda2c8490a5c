use crate::color::charge_color;
use crate::vector::{PlanarVector, Vector2D};

/// Radius in world units per unit of mass (mass is read as grams on screen).
pub const RADIUS_PER_MASS: f64 = 1000.0;
/// Coulomb's constant in N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.99e9;
/// Fraction of the combined radii below which separations are clamped.
pub const MIN_SEPARATION_FACTOR: f64 = 1e-3;
/// Absolute separation floor, so radius-less particles still get a finite force.
pub const MIN_SEPARATION: f64 = 1e-9;

/// One slot of the particle pool.
///
/// A slot is either dead (all physical fields zeroed, `fixed` set) or alive
/// with the values it was spawned with. Mass and charge only change through
/// [`Particle::spawn`] and [`Particle::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub(crate) alive: bool,
    pub(crate) mass: f64,
    pub(crate) charge: f64,
    pub(crate) position: Vector2D,
    pub(crate) velocity: Vector2D,
    pub(crate) acceleration: Vector2D,
    pub(crate) radius: f64,
    pub(crate) fixed: bool,
    pub(crate) clicked: bool,
    pub(crate) in_collision: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self::dead()
    }
}

impl Particle {
    pub fn dead() -> Self {
        Self {
            alive: false,
            mass: 0.0,
            charge: 0.0,
            position: Vector2D::zeros(),
            velocity: Vector2D::zeros(),
            acceleration: Vector2D::zeros(),
            radius: 0.0,
            fixed: true,
            clicked: false,
            in_collision: false,
        }
    }

    /// Brings a dead slot to life. The pool guarantees the slot was dead.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        mass: f64,
        charge: f64,
        x: f64,
        y: f64,
        velocity: Vector2D,
        acceleration: Vector2D,
        fixed: bool,
    ) {
        self.mass = mass;
        self.charge = charge;
        self.position = Vector2D::new(x, y);
        self.velocity = velocity;
        self.acceleration = acceleration;
        self.radius = mass * RADIUS_PER_MASS;
        self.fixed = fixed;
        self.alive = true;
        self.clicked = false;
        self.in_collision = false;
    }

    pub fn reset(&mut self) {
        *self = Self::dead();
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector2D {
        self.acceleration
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn in_collision(&self) -> bool {
        self.in_collision
    }

    /// Display colour for the renderer. Physics never reads it.
    pub fn color(&self) -> [f32; 4] {
        charge_color(self.charge)
    }

    /// Mass used by the collision solver: fixed particles stand in for an
    /// immovable body through `fixed_mass`, the stored mass is left alone.
    pub fn collision_mass(&self, fixed_mass: f64) -> f64 {
        if self.fixed {
            fixed_mass
        } else {
            self.mass
        }
    }

    pub fn distance_squared_to(&self, other: &Particle) -> f64 {
        (other.position - self.position).norm_squared()
    }

    /// Heading from `self` to `other`. Coincident particles fall back to the
    /// +x axis, which is what `atan2(0, 0)` yields.
    pub fn angle_to(&self, other: &Particle) -> f64 {
        (other.position - self.position).heading()
    }

    /// True when `(x, y)` lies inside (or on) this particle's disc.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        (self.position - Vector2D::new(x, y)).norm_squared() <= self.radius * self.radius
    }

    /// Force this particle exerts on `other`, with the default constants.
    pub fn electric_force_on(&self, other: &Particle) -> Vector2D {
        self.coulomb_force_on(other, COULOMB_CONSTANT, MIN_SEPARATION_FACTOR)
    }

    /// Coulomb's law along the ray from `self` to `other`.
    ///
    /// The signed product of the charges picks the direction: like charges
    /// push `other` away from `self`, unlike charges pull it in. The squared
    /// separation is clamped to `(min_separation_factor * (r1 + r2))²`, and
    /// never below [`MIN_SEPARATION`]², so overlapping particles get a large
    /// but finite force. Coincident particles have no direction between them
    /// and exert no force on each other.
    pub fn coulomb_force_on(
        &self,
        other: &Particle,
        coulomb_constant: f64,
        min_separation_factor: f64,
    ) -> Vector2D {
        if other.position == self.position {
            return Vector2D::zeros();
        }
        let floor = (min_separation_factor * (self.radius + other.radius)).max(MIN_SEPARATION);
        let r_sq = self.distance_squared_to(other).max(floor * floor);
        let magnitude = coulomb_constant * self.charge * other.charge / r_sq;
        Vector2D::unit_from_heading(self.angle_to(other)) * magnitude
    }

    /// Explicit Euler step in frame units: velocity then position.
    pub fn integrate(&mut self) {
        if self.fixed {
            return;
        }
        self.velocity.accumulate(&self.acceleration);
        self.position.accumulate(&self.velocity);
    }

    /// True once the particle is more than a full world extent outside the
    /// visible region on either axis.
    pub fn is_out_of_bounds(&self, world_width: f64, world_height: f64) -> bool {
        self.position.x < -world_width
            || self.position.x > 2.0 * world_width
            || self.position.y < -world_height
            || self.position.y > 2.0 * world_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawned(mass: f64, charge: f64, x: f64, y: f64, fixed: bool) -> Particle {
        let mut p = Particle::dead();
        p.spawn(mass, charge, x, y, Vector2D::zeros(), Vector2D::zeros(), fixed);
        p
    }

    #[test]
    fn spawn_derives_radius_and_clears_flags() {
        let p = spawned(20e-3, 200e-6, 250.0, 300.0, false);
        assert!(p.is_alive());
        assert!((p.radius() - 20.0).abs() < 1e-12);
        assert!(!p.is_clicked());
        assert!(!p.in_collision());
        assert_eq!(p.position(), Vector2D::new(250.0, 300.0));
    }

    #[test]
    fn reset_restores_dead_state() {
        let mut p = spawned(1e-3, -5e-6, 1.0, 2.0, false);
        p.clicked = true;
        p.in_collision = true;
        p.reset();
        assert_eq!(p, Particle::dead());
        assert!(p.is_fixed());
        assert_eq!(p.radius(), 0.0);
    }

    #[test]
    fn geometry_queries() {
        let a = spawned(1e-3, 0.0, 0.0, 0.0, false);
        let b = spawned(1e-3, 0.0, 3.0, 4.0, false);
        assert_eq!(a.distance_squared_to(&b), 25.0);
        assert!((a.angle_to(&b) - (4.0f64).atan2(3.0)).abs() < 1e-12);
        assert_eq!(a.angle_to(&a), 0.0);
    }

    #[test]
    fn coincident_particles_exert_no_force() {
        let a = spawned(1e-3, 1e-6, 5.0, 5.0, false);
        let b = spawned(2e-3, -3e-6, 5.0, 5.0, false);
        let on_b = a.electric_force_on(&b);
        let on_a = b.electric_force_on(&a);
        assert_eq!(on_b, Vector2D::zeros());
        assert_eq!(on_a + on_b, Vector2D::zeros());
    }

    #[test]
    fn nearly_coincident_forces_are_clamped_and_opposite() {
        let a = spawned(1e-3, 1e-6, 5.0, 5.0, false);
        let b = spawned(2e-3, -3e-6, 5.0 + 1e-12, 5.0, false);
        let on_b = a.electric_force_on(&b);
        let on_a = b.electric_force_on(&a);

        // separation clamps to 1e-3 * (1 + 2)
        let expected = COULOMB_CONSTANT * 3e-12 / (3e-3 * 3e-3);
        assert!((on_b.norm() - expected).abs() < expected * 1e-9);
        assert!(on_b.x < 0.0);
        assert!((on_a + on_b).norm() <= on_b.norm() * 1e-12);
    }

    #[test]
    fn fixed_particles_do_not_integrate() {
        let mut p = spawned(1e-3, 0.0, 10.0, 10.0, true);
        p.velocity = Vector2D::new(1.0, 1.0);
        p.acceleration = Vector2D::new(2.0, 2.0);
        p.integrate();
        assert_eq!(p.position(), Vector2D::new(10.0, 10.0));
        assert_eq!(p.velocity(), Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn integrate_updates_velocity_before_position() {
        let mut p = spawned(1e-3, 0.0, 0.0, 0.0, false);
        p.velocity = Vector2D::new(1.0, 0.0);
        p.acceleration = Vector2D::new(0.5, -1.0);
        p.integrate();
        assert_eq!(p.velocity(), Vector2D::new(1.5, -1.0));
        assert_eq!(p.position(), Vector2D::new(1.5, -1.0));
    }

    #[test]
    fn out_of_bounds_uses_one_world_margin() {
        let (w, h) = (100.0, 50.0);
        assert!(!spawned(1e-3, 0.0, -100.0, 0.0, false).is_out_of_bounds(w, h));
        assert!(spawned(1e-3, 0.0, -100.1, 0.0, false).is_out_of_bounds(w, h));
        assert!(spawned(1e-3, 0.0, 0.0, 100.1, false).is_out_of_bounds(w, h));
        assert!(!spawned(1e-3, 0.0, 200.0, 100.0, false).is_out_of_bounds(w, h));
    }

    #[test]
    fn collision_mass_substitutes_for_fixed() {
        let free = spawned(2e-3, 0.0, 0.0, 0.0, false);
        let pinned = spawned(2e-3, 0.0, 0.0, 0.0, true);
        assert_eq!(free.collision_mass(1e20), 2e-3);
        assert_eq!(pinned.collision_mass(1e20), 1e20);
        assert_eq!(pinned.mass(), 2e-3);
    }
}
