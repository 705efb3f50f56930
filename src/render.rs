// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Frame renderer
//!
//! Every pixel of the integral plane is mapped to a point on the
//! complex plane, the escape time of that point is measured, and the
//! escape time is turned into a color.  Pixels do not depend on one
//! another, so the frame can be cut into horizontal bands and each
//! band rendered on its own thread; the bands are disjoint slices of
//! the same raster, so no locking is needed and the result is the same
//! no matter how many threads are used.

use image::RgbaImage;
use itertools::iproduct;
use log::debug;

use crate::errors::MandelbrotError;
use crate::escape::escape_time;
use crate::palette::colorize;
use crate::planes::{IntegralPlane, Pixel, PlaneMapper};

/// Bytes per pixel in the raster: red, green, blue, alpha.
const CHANNELS: usize = 4;

/// Largest frame a renderer accepts, 2^28 pixels or a 1 GiB raster.
/// Sizes up to 16384x16384 fit.
pub const MAX_PIXELS: usize = 1 << 28;

/// Holds the plane and the iteration limit for one frame.  Once built,
/// a renderer can produce the frame any number of times, and always
/// produces the same bytes.
#[derive(Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    limit: usize,
}

impl Renderer {
    /// Requires a plane mapping pixels to the complex plane, and the
    /// number of iterations after which a point is taken to be in the
    /// set.
    pub fn new(plane: PlaneMapper, limit: usize) -> Result<Self, MandelbrotError> {
        if limit == 0 {
            return Err(MandelbrotError::NoIterations);
        }
        let IntegralPlane(width, height) = plane.integral_plane;
        if width > u32::max_value() as usize
            || height > u32::max_value() as usize
            || width.checked_mul(height).map_or(true, |pixels| pixels > MAX_PIXELS)
        {
            return Err(MandelbrotError::OversizedPlane { width, height });
        }
        Ok(Renderer { plane, limit })
    }

    /// A renderer over the default complex window.
    pub fn with_size(width: usize, height: usize, limit: usize) -> Result<Self, MandelbrotError> {
        Renderer::new(PlaneMapper::with_size(width, height)?, limit)
    }

    /// The plane this renderer draws.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The iteration limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    fn blank(&self) -> RgbaImage {
        let IntegralPlane(width, height) = self.plane.integral_plane;
        RgbaImage::new(width as u32, height as u32)
    }

    /// Render the rows starting at `top` into `band`, which holds
    /// whole rows of RGBA bytes.
    fn render_band(&self, top: usize, band: &mut [u8]) {
        let width = self.plane.integral_plane.0;
        let rows = band.len() / (width * CHANNELS);
        for (row, column) in iproduct!(0..rows, 0..width) {
            let point = self.plane.pixel_to_point(&Pixel(column, top + row));
            let color = colorize(escape_time(point, self.limit), self.limit);
            let offset = (row * width + column) * CHANNELS;
            band[offset..offset + CHANNELS].copy_from_slice(&color.0);
        }
    }

    /// The single-threaded render.
    pub fn render(&self) -> RgbaImage {
        let mut raster = self.blank();
        debug!(
            "rendering {}x{} at {} iterations",
            raster.width(),
            raster.height(),
            self.limit
        );
        self.render_band(0, &mut raster);
        raster
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  The rows are split into at most `threads`
    /// contiguous bands.
    pub fn render_threaded(&self, threads: usize) -> Result<RgbaImage, MandelbrotError> {
        if threads == 0 {
            return Err(MandelbrotError::NoThreads);
        }
        if threads == 1 {
            return Ok(self.render());
        }

        let IntegralPlane(width, height) = self.plane.integral_plane;
        let rows_per_band = (height + threads - 1) / threads;
        let mut raster = self.blank();
        debug!(
            "rendering {}x{} at {} iterations, {} rows per band",
            width, height, self.limit, rows_per_band
        );

        {
            let bands: Vec<&mut [u8]> = raster
                .chunks_mut(rows_per_band * width * CHANNELS)
                .collect();
            crossbeam::scope(|spawner| {
                for (index, band) in bands.into_iter().enumerate() {
                    spawner.spawn(move |_| {
                        let top = index * rows_per_band;
                        self.render_band(top, band);
                        debug!("band {} (rows {} onward) done", index, top);
                    });
                }
            })
            .map_err(|_| MandelbrotError::WorkerPanicked)?;
        }

        Ok(raster)
    }
}
