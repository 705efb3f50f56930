//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a window on the complex plane described by its centre and its
//! extent along each axis.
use num::Complex;

use crate::errors::MandelbrotError;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the centre of the complex window and its full extent,
/// treating the real part of each value as the x-component and the
/// imaginary part of each value as the y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

impl Default for ComplexPlane {
    /// The classic full view: centred on the origin, four units across
    /// on both axes.
    fn default() -> Self {
        ComplexPlane(Complex::new(0.0, 0.0), Complex::new(4.0, 4.0))
    }
}

/// Describes the x, y of a pixel in a region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps pixels in the first to points
/// in the second.  The pixel at (width / 2, height / 2), using integer
/// halves, always lands exactly on the centre of the complex window.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-lower corner of the integral cartesian plane.
    /// The left-upper is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// Centre and extent of the complex window.
    pub complex_plane: ComplexPlane,
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane and the
    /// centre and extent of the complex window it maps onto.
    pub fn new(
        width: usize,
        height: usize,
        centre: Complex<f64>,
        extent: Complex<f64>,
    ) -> Result<PlaneMapper, MandelbrotError> {
        if width == 0 || height == 0 {
            return Err(MandelbrotError::EmptyPlane { width, height });
        }

        if !(centre.re.is_finite() && centre.im.is_finite()) {
            return Err(MandelbrotError::NonFiniteCentre {
                re: centre.re,
                im: centre.im,
            });
        }

        if !(extent.re.is_finite() && extent.im.is_finite() && extent.re > 0.0 && extent.im > 0.0)
        {
            return Err(MandelbrotError::DegenerateWindow {
                re: extent.re,
                im: extent.im,
            });
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(centre, extent),
        })
    }

    /// A plane of the given size over the default complex window.
    pub fn with_size(width: usize, height: usize) -> Result<PlaneMapper, MandelbrotError> {
        let ComplexPlane(centre, extent) = ComplexPlane::default();
        PlaneMapper::new(width, height, centre, extent)
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, map that to a
    /// point on the complex cartesian plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let IntegralPlane(width, height) = self.integral_plane;
        let ComplexPlane(centre, extent) = self.complex_plane;
        // (x - w / 2) * extent / w, scaled before dividing.
        let dx = pixel.0 as f64 - (width / 2) as f64;
        let dy = pixel.1 as f64 - (height / 2) as f64;
        Complex::new(
            dx * extent.re / width as f64 + centre.re,
            dy * extent.im / height as f64 + centre.im,
        )
    }
}
