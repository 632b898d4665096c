use image::imageops::{self, FilterType};
use image::{GenericImageView, ImageBuffer, Pixel, Rgb, RgbImage};

use super::math;

pub fn resize_to_width<I: GenericImageView>(
    image: &I,
    new_width: u32,
) -> ImageBuffer<I::Pixel, Vec<<I::Pixel as Pixel>::Subpixel>>
where
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: 'static,
{
    let new_height = new_height_same_ratio(image.width(), image.height(), new_width);
    imageops::resize(image, new_width, new_height, FilterType::CatmullRom)
}

/// The height that keeps the ratio of `oldw`x`oldh` when the width becomes `neww`. Never
/// less than one pixel.
pub fn new_height_same_ratio(oldw: u32, oldh: u32, neww: u32) -> u32 {
    assert_ne!(oldw, 0);
    let aspect_ratio = oldh as f64 / oldw as f64;
    math::round(neww as f64 * aspect_ratio).max(1.0) as u32
}

pub fn filled(width: u32, height: u32, red: u8, green: u8, blue: u8) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb([red, green, blue]))
}

/// Pastes `top` in the middle of `bottom`, rounding the offsets down.
pub fn paste_centered(bottom: &mut RgbImage, top: &RgbImage) {
    let x = (bottom.width() as i64 - top.width() as i64) / 2;
    let y = (bottom.height() as i64 - top.height() as i64) / 2;
    imageops::overlay(bottom, top, x, y);
}

pub fn is_img_empty<T>(img: &T) -> bool
where
    T: GenericImageView,
{
    img.width() == 0 || img.height() == 0
}
