//! Maps an escape time onto a color.  The palette is a fixed set of
//! Bernstein-like polynomials in the normalized escape time t: red
//! peaks near the set, blue peaks far from it, and green sits in
//! between.  Both t = 0 and t = 1 are black.

use image::Rgba;
use num::clamp;

/// The color of a single pixel.
pub type Color = Rgba<u8>;

const RED: f64 = 9.0;
const GREEN: f64 = 15.0;
const BLUE: f64 = 8.5;

fn channel(value: f64) -> u8 {
    clamp((value * 255.0).round(), 0.0, 255.0) as u8
}

/// Given an iteration count and the iteration limit it was computed
/// against, return the opaque color for that pixel.
pub fn colorize(iterations: usize, limit: usize) -> Color {
    let t = if limit == 0 {
        1.0
    } else {
        iterations as f64 / limit as f64
    };
    let s = 1.0 - t;

    Rgba([
        channel(RED * s * t * t * t),
        channel(GREEN * s * s * t * t),
        channel(BLUE * s * s * s * t),
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_escapes_are_black() {
        assert_eq!(colorize(0, 5000), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn set_members_are_black() {
        assert_eq!(colorize(5000, 5000), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn midpoint_color() {
        // t = 0.5: r = 9/16, g = 15/16, b = 8.5/16
        assert_eq!(colorize(2500, 5000), Rgba([143, 239, 135, 255]));
    }

    #[test]
    fn intermediate_counts_are_not_black() {
        for i in (50..5000).step_by(50) {
            let Rgba([r, g, b, a]) = colorize(i, 5000);
            assert!(r > 0 || g > 0 || b > 0, "iteration {} is black", i);
            assert_eq!(a, 255);
        }
    }

    #[test]
    fn zero_limit_does_not_divide_by_zero() {
        assert_eq!(colorize(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn channels_never_overflow() {
        for i in 0..=1000 {
            let Rgba([_, _, _, a]) = colorize(i, 1000);
            assert_eq!(a, 255);
        }
        assert_eq!(channel(2.0), 255);
        assert_eq!(channel(-1.0), 0);
    }
}
