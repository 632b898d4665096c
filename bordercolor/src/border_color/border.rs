use std::collections::BTreeSet;

use crate::utils::math;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Width and height of the band along the edges of a `width`x`height` image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderSize {
    pub width: i64,
    pub height: i64,
}

impl BorderSize {
    pub fn new(width: u32, height: u32, fraction: f64) -> Self {
        Self {
            width: math::round(width as f64 * fraction) as i64,
            height: math::round(height as f64 * fraction) as i64,
        }
    }
}

/// Selects the pixels in a band around the edges of a `width`x`height` image, the band
/// being `fraction` of each dimension wide.
///
/// A pixel is selected only if it lies in both the horizontal and the vertical band, so
/// only the four corner blocks are sampled, not the whole perimeter. The low side is
/// compared with `<` and the high side with `>`, which makes the far blocks one pixel
/// narrower than the near ones. A band of zero selects nothing and a band wider than half
/// the image selects everything.
pub fn border_coordinates(width: u32, height: u32, fraction: f64) -> BTreeSet<Coordinate> {
    let border = BorderSize::new(width, height, fraction);
    let (w, h) = (width as i64, height as i64);

    let in_band = |pos: i64, size: i64, band: i64| pos < band || pos > size - band;

    (0..height)
        .filter(|&y| in_band(y as i64, h, border.height))
        .flat_map(|y| {
            (0..width)
                .filter(move |&x| in_band(x as i64, w, border.width))
                .map(move |x| Coordinate::new(x, y))
        })
        .collect()
}
