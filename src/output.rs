//! PNG output for finished frames.

use image::png::PNGEncoder;
use image::{ColorType, RgbaImage};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::errors::MandelbrotError;

fn encode(path: &Path, raster: &RgbaImage) -> Result<(), io::Error> {
    let mut output = BufWriter::new(File::create(path)?);
    PNGEncoder::new(&mut output).encode(
        raster,
        raster.width(),
        raster.height(),
        ColorType::RGBA(8),
    )?;
    output.flush()
}

/// Write the raster to `path` as an 8-bit RGBA PNG.  Failing to
/// create, encode or flush the file yields an error naming the path.
pub fn write_image<P: AsRef<Path>>(path: P, raster: &RgbaImage) -> Result<(), MandelbrotError> {
    let path = path.as_ref();
    debug!(
        "encoding {}x{} image to {}",
        raster.width(),
        raster.height(),
        path.display()
    );
    encode(path, raster).map_err(|cause| MandelbrotError::ImageWrite {
        path: path.display().to_string(),
        cause,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;

    #[test]
    fn writes_a_readable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        let raster = Renderer::with_size(12, 8, 64).unwrap().render();
        write_image(&path, &raster).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba();
        assert_eq!(decoded.dimensions(), (12, 8));
        assert_eq!(decoded.into_raw(), raster.into_raw());
    }

    #[test]
    fn reports_the_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("small.png");
        let raster = Renderer::with_size(4, 4, 8).unwrap().render();
        let err = write_image(&path, &raster).unwrap_err();
        match err {
            MandelbrotError::ImageWrite { ref path, .. } => assert!(path.ends_with("small.png")),
            ref other => panic!("unexpected error {:?}", other),
        }
        assert!(format!("{}", err).contains("missing"));
    }
}
