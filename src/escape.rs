// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iteration at the heart of the Mandelbrot set.

use num::Complex;

/// Squared escape radius.  Comparing |z|^2 against 4 is the same as
/// comparing |z| against 2, and an overflow to infinity still counts.
pub const ESCAPE_NORM_SQR: f64 = 4.0;

/// Iterate z = z * z + c from z = 0, and return the iteration at which
/// |z| first exceeds 2.  A point that survives `limit` iterations is
/// considered a member of the set and reports `limit`.
#[inline]
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 0..limit {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return i;
        }
    }
    limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 5000), 5000);
    }

    #[test]
    fn points_outside_radius_two_escape_immediately() {
        let mut rng = StdRng::seed_from_u64(0x6d61_6e64);
        for _ in 0..1000 {
            let radius: f64 = rng.gen_range(2.001, 1.0e6);
            let angle: f64 = rng.gen_range(0.0, 2.0 * std::f64::consts::PI);
            let c = Complex::from_polar(&radius, &angle);
            assert_eq!(escape_time(c, 5000), 0, "{} should escape at once", c);
        }
    }

    #[test]
    fn escape_time_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..1000 {
            let re: f64 = rng.gen_range(-2.5, 2.5);
            let im: f64 = rng.gen_range(-2.5, 2.5);
            let c = Complex::new(re, im);
            assert!(escape_time(c, 200) <= 200);
        }
    }

    #[test]
    fn boundary_point_escapes_on_second_step() {
        // z1 = 2 sits on the radius, z2 = 6 does not.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 100), 1);
    }

    #[test]
    fn minus_two_is_in_the_set() {
        // The orbit of -2 is 0, -2, 2, 2, 2 ... and never leaves the radius.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 100), 100);
    }

    #[test]
    fn huge_points_escape_without_nan_trouble() {
        assert_eq!(escape_time(Complex::new(1.0e300, -1.0e300), 10), 0);
        assert_eq!(escape_time(Complex::new(std::f64::MAX, 0.0), 10), 0);
    }

    #[test]
    fn zero_limit_reports_membership() {
        assert_eq!(escape_time(Complex::new(3.0, 3.0), 0), 0);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 0), 0);
    }
}
