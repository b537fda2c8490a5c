//! Charge-to-colour mapping for renderers.
//!
//! Negative charges are red and positive charges blue. Both start near white at
//! zero charge and darken toward the base hue as the magnitude approaches the
//! launcher's 500 µC ceiling; the shade follows the square root of the charge.

/// Largest charge the launcher offers, in microcoulombs.
pub const MAX_CHARGE_MICRO_COULOMBS: f64 = 500.0;

const NEGATIVE_BASE: [f64; 3] = [255.0, 1.0, 1.0];
const POSITIVE_BASE: [f64; 3] = [1.0, 1.0, 255.0];

/// RGBA in `0.0..=1.0` for a charge given in coulombs.
pub fn charge_color(charge: f64) -> [f32; 4] {
    let base = if charge < 0.0 { NEGATIVE_BASE } else { POSITIVE_BASE };
    let ceiling = MAX_CHARGE_MICRO_COULOMBS.sqrt();
    let luminance = (ceiling - (charge.abs() * 1e6).sqrt()) / ceiling * 255.0;

    let shade = |channel: f64| ((channel + channel * luminance).clamp(0.0, 255.0).round() / 255.0) as f32;
    [shade(base[0]), shade(base[1]), shade(base[2]), 1.0]
}
