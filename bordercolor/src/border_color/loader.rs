use std::path::Path;

use image::RgbImage;

use super::DecodeError;

/// Opens and decodes the image at `path`, converting it to 8-bit RGB.
pub fn open(path: &Path) -> Result<RgbImage, DecodeError> {
    let img = image::open(path).map_err(|source| DecodeError::ImageOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}
