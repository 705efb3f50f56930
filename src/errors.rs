//! Everything that can go wrong between the command line and the
//! finished image.

use failure::Fail;
use std::io;

/// Errors raised while setting up a render or writing its result.
#[derive(Debug, Fail)]
pub enum MandelbrotError {
    /// The pixel grid has no area.
    #[fail(display = "cannot render a {}x{} image", width, height)]
    EmptyPlane {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The pixel grid has more than `render::MAX_PIXELS` pixels.
    #[fail(display = "a {}x{} image is too large to render", width, height)]
    OversizedPlane {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The complex window has no area.
    #[fail(display = "the complex window {}x{} has no area", re, im)]
    DegenerateWindow {
        /// Extent along the real axis.
        re: f64,
        /// Extent along the imaginary axis.
        im: f64,
    },

    /// The centre of the complex window is not a finite point.
    #[fail(display = "the window centre {}+{}i is not finite", re, im)]
    NonFiniteCentre {
        /// Real part of the centre.
        re: f64,
        /// Imaginary part of the centre.
        im: f64,
    },

    /// Zero iterations cannot separate the set from its outside.
    #[fail(display = "the iteration limit must be at least 1")]
    NoIterations,

    /// Zero worker threads were asked for.
    #[fail(display = "the thread count must be at least 1")]
    NoThreads,

    /// A render worker panicked before finishing its band.
    #[fail(display = "a render thread panicked")]
    WorkerPanicked,

    /// The output file could not be created or written.
    #[fail(display = "could not write image to {}: {}", path, cause)]
    ImageWrite {
        /// Destination that was being written.
        path: String,
        /// The underlying I/O failure.
        #[cause]
        cause: io::Error,
    },
}
