#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points c on the complex plane for
//! which repeatedly squaring z and adding c, starting from zero, never
//! runs off to infinity.  Once |z| passes 2 it is certain to escape,
//! so the number of iterations it takes to get there, the "escape
//! time," measures how far a point is from the set.  Points that are
//! still bounded after a fixed number of iterations are taken to be
//! members.
//!
//! Each pixel of the frame is mapped onto the complex plane, its
//! escape time is measured, and that time is painted through a fixed
//! polynomial palette.  The finished raster is written out as a PNG.

pub mod errors;
pub mod escape;
pub mod output;
pub mod palette;
pub mod planes;
pub mod render;

pub use errors::MandelbrotError;
pub use escape::escape_time;
pub use output::write_image;
pub use palette::{colorize, Color};
pub use planes::{ComplexPlane, IntegralPlane, Pixel, PlaneMapper};
pub use render::Renderer;

/// Default frame width in pixels.
pub const WIDTH: usize = 1920;
/// Default frame height in pixels.
pub const HEIGHT: usize = 1080;
/// Default iteration limit.
pub const MAX_ITERATIONS: usize = 5000;
/// Default output file.
pub const OUTPUT: &str = "mandelbrot.png";
