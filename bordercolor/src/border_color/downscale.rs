use image::RgbImage;

use crate::utils::imgutils::{self, is_img_empty};

use super::DecodeError;

/// Resizes `img` to `target_width`, keeping its aspect ratio. The original is consumed so
/// that only one copy is alive at a time.
pub fn downscale(img: RgbImage, target_width: u32) -> Result<RgbImage, DecodeError> {
    let (width, height) = target_size(&img, target_width)?;
    if img.dimensions() == (width, height) {
        return Ok(img);
    }
    Ok(imgutils::resize_to_width(&img, width))
}

/// The size `img` will be downscaled to.
pub fn target_size(img: &RgbImage, target_width: u32) -> Result<(u32, u32), DecodeError> {
    if is_img_empty(img) || target_width == 0 {
        return Err(DecodeError::InvalidImage {
            width: img.width(),
            height: img.height(),
        });
    }

    let height = imgutils::new_height_same_ratio(img.width(), img.height(), target_width);
    Ok((target_width, height))
}

pub fn aspect_ratio(img: &RgbImage) -> f64 {
    img.height() as f64 / img.width() as f64
}

#[cfg(test)]
mod test {
    use crate::utils::imgutils::filled;

    use super::*;

    #[test]
    fn keeps_ratio() {
        let img = filled(800, 600, 9, 9, 9);
        let small = downscale(img, 200).unwrap();
        assert_eq!((200, 150), small.dimensions());
    }

    #[test]
    fn upscales_small_images() {
        let img = filled(20, 10, 9, 9, 9);
        assert_eq!((200, 100), downscale(img, 200).unwrap().dimensions());
    }

    #[test]
    fn already_the_right_size() {
        let mut img = filled(200, 400, 0, 0, 0);
        img.put_pixel(3, 4, image::Rgb([1, 2, 3]));
        let same = downscale(img.clone(), 200).unwrap();
        assert_eq!(img, same);
    }

    #[test]
    fn zero_width() {
        let img = RgbImage::new(0, 10);
        assert!(matches!(
            downscale(img, 200),
            Err(DecodeError::InvalidImage {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn zero_height() {
        let img = RgbImage::new(10, 0);
        assert!(matches!(
            downscale(img, 200),
            Err(DecodeError::InvalidImage { .. })
        ));
    }
}
