//! Slingshot launcher state, owned by the UI shell.
//!
//! Pressing starts a launch at the cursor with a small radius that grows while
//! the button is held; dragging pulls the slingshot back; releasing hands the
//! resulting parameters to [`ParticlePool::spawn_launch`]. Everything the
//! kernel needs (charge from the slider, the fixed toggle) travels in this
//! struct rather than being read from ambient UI state.
//!
//! [`ParticlePool::spawn_launch`]: crate::physics::ParticlePool::spawn_launch

use crate::particle::RADIUS_PER_MASS;
use crate::vector::Vector2D;

/// Radius a launch starts with when the button goes down.
pub const INITIAL_LAUNCH_RADIUS: f64 = 1.0;
/// Radius gained per held frame (about ten units per second at 60 fps).
pub const LAUNCH_GROWTH_PER_FRAME: f64 = 0.167;
/// Drag distance per unit of launch velocity.
pub const DRAG_VELOCITY_DIVISOR: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchParams {
    pub origin: Vector2D,
    pub cursor: Vector2D,
    pub radius: f64,
    pub charge_micro_coulombs: f64,
    pub fixed: bool,
}

impl LaunchParams {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            origin: Vector2D::new(x, y),
            cursor: Vector2D::new(x, y),
            radius: INITIAL_LAUNCH_RADIUS,
            charge_micro_coulombs: 0.0,
            fixed: false,
        }
    }

    pub fn with_charge(mut self, charge_micro_coulombs: f64) -> Self {
        self.charge_micro_coulombs = charge_micro_coulombs;
        self
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Advances one held frame.
    pub fn hold(&mut self) {
        self.radius += LAUNCH_GROWTH_PER_FRAME;
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        self.cursor = Vector2D::new(x, y);
    }

    /// Tip of the slingshot arrow: the cursor mirrored through the origin.
    pub fn arrow_tip(&self) -> Vector2D {
        self.origin + (self.origin - self.cursor)
    }

    pub fn velocity(&self) -> Vector2D {
        (self.arrow_tip() - self.origin) / DRAG_VELOCITY_DIVISOR
    }

    pub fn mass(&self) -> f64 {
        self.radius / RADIUS_PER_MASS
    }

    pub fn charge(&self) -> f64 {
        self.charge_micro_coulombs * 1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_left_launches_right() {
        let mut launch = LaunchParams::new(100.0, 100.0);
        launch.drag_to(60.0, 100.0);
        assert_eq!(launch.arrow_tip(), Vector2D::new(140.0, 100.0));
        assert_eq!(launch.velocity(), Vector2D::new(2.0, 0.0));
    }

    #[test]
    fn holding_grows_mass() {
        let mut launch = LaunchParams::new(0.0, 0.0).with_charge(-250.0);
        for _ in 0..60 {
            launch.hold();
        }
        assert!((launch.radius - (1.0 + 60.0 * 0.167)).abs() < 1e-9);
        assert!((launch.mass() - launch.radius / 1000.0).abs() < 1e-15);
        assert!((launch.charge() + 250e-6).abs() < 1e-15);
    }
}
