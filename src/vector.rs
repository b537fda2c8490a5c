//! Planar vector helpers used by the particle kernel.
//!
//! The storage type is `nalgebra::Vector2<f64>`, so `magnitude()` and the
//! arithmetic operators come from nalgebra directly. The trait below adds the
//! few operations the kernel names on top of that.

use nalgebra::Vector2;

pub type Vector2D = Vector2<f64>;

pub trait PlanarVector {
    /// Accumulates `other` into `self` in place.
    fn accumulate(&mut self, other: &Self);

    /// Returns `a + b`, leaving both operands untouched.
    fn plus(a: &Self, b: &Self) -> Self;

    /// Heading in `(-pi, pi]`, measured from the +x axis.
    fn heading(&self) -> f64;

    /// Unit vector pointing along `heading`.
    fn unit_from_heading(heading: f64) -> Self;
}

impl PlanarVector for Vector2D {
    fn accumulate(&mut self, other: &Self) {
        *self += *other;
    }

    fn plus(a: &Self, b: &Self) -> Self {
        a + b
    }

    fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    fn unit_from_heading(heading: f64) -> Self {
        Vector2D::new(heading.cos(), heading.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn accumulate_in_place() {
        let mut a = Vector2D::new(1.0, 2.0);
        a.accumulate(&Vector2D::new(0.5, -4.0));
        assert_eq!(a, Vector2D::new(1.5, -2.0));
    }

    #[test]
    fn plus_leaves_operands_alone() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(2.0, 3.0);
        let c = <Vector2D as PlanarVector>::plus(&a, &b);
        assert_eq!(c, Vector2D::new(3.0, 4.0));
        assert_eq!(a, Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn magnitude_and_heading() {
        let v = Vector2D::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-12);
        assert!((Vector2D::new(-1.0, 0.0).heading() - PI).abs() < 1e-12);
        assert!((Vector2D::new(0.0, -1.0).heading() + PI / 2.0).abs() < 1e-12);
        // atan2(0, 0) is the +x axis
        assert_eq!(Vector2D::zeros().heading(), 0.0);
    }

    #[test]
    fn unit_from_heading_round_trips() {
        let u = Vector2D::unit_from_heading(PI / 3.0);
        assert!((u.magnitude() - 1.0).abs() < 1e-12);
        assert!((u.heading() - PI / 3.0).abs() < 1e-12);
    }
}
