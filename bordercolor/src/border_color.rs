//! Estimates the color of the border of an image.
//!
//! The image is downscaled to a fixed width, the pixels in its corner blocks are
//! sampled, outliers are removed from every channel on its own and the rest is averaged
//! into a `#rrggbb` color.

pub mod average;
pub mod border;
pub mod downscale;
pub mod loader;
pub mod outliers;
pub mod preview;

use std::path::{Path, PathBuf};

use image::RgbImage;
use log::Level;

use crate::{bin_common::args::sampling::SamplingArgs, utils::percent::Percent64};

use self::average::{AverageColor, Channel, ChannelSamples};

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("{path:?} could not be opened: {source}")]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("the image is {width}x{height}, both sides must be non-zero")]
    InvalidImage { width: u32, height: u32 },
    #[error("there are no samples left in the {0} channel")]
    NoSamples(Channel),
}

#[derive(Clone, Debug)]
pub struct DecodeOptions {
    pub sampling: SamplingArgs,
    /// Open the preview in an image viewer when done
    pub show_preview: bool,
    /// Log the diagnostics at debug level instead of info
    pub quiet: bool,
    /// Also save the preview here
    pub preview_output: Option<PathBuf>,
    /// Returned by [`decode`] if the image can't be opened
    pub fallback: AverageColor,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            sampling: SamplingArgs::default(),
            show_preview: false,
            quiet: true,
            preview_output: None,
            fallback: AverageColor::WHITE,
        }
    }
}

impl DecodeOptions {
    fn level(&self) -> Level {
        if self.quiet {
            Level::Debug
        } else {
            Level::Info
        }
    }
}

/// Like [`try_decode`], but an image that can't be opened is logged and results in
/// `opts.fallback` instead of an error.
pub fn decode(
    path: impl AsRef<Path>,
    opts: &DecodeOptions,
) -> Result<AverageColor, DecodeError> {
    match try_decode(path, opts) {
        Err(e @ DecodeError::ImageOpen { .. }) => {
            log::error!("{e}");
            log::error!("error processing image, using {}", opts.fallback);
            Ok(opts.fallback)
        }
        res => res,
    }
}

pub fn try_decode(
    path: impl AsRef<Path>,
    opts: &DecodeOptions,
) -> Result<AverageColor, DecodeError> {
    let img = loader::open(path.as_ref())?;
    decode_image(img, opts)
}

/// Runs the whole pipeline on an already decoded image.
pub fn decode_image(
    img: RgbImage,
    opts: &DecodeOptions,
) -> Result<AverageColor, DecodeError> {
    let level = opts.level();
    let sampling = &opts.sampling;

    let old_size = img.dimensions();
    let aspect_ratio = downscale::aspect_ratio(&img);
    let img = sampling.downscale(img)?;
    log::log!(
        level,
        "aspect ratio {aspect_ratio} new size {:?} old size {old_size:?}",
        img.dimensions(),
    );

    let color = sample_border_color(&img, sampling, level)?;
    log::log!(level, "got color: {color}");

    if let Some(output) = &opts.preview_output {
        match preview::save_preview(&img, color, output) {
            Ok(()) => log::log!(level, "saved the preview to {}", output.display()),
            Err(e) => {
                log::error!("failed to save the preview to {}: {e}", output.display())
            }
        }
    }

    if opts.show_preview {
        match preview::show_preview(&img, color) {
            Ok(path) => log::debug!("showing the preview at {}", path.display()),
            Err(e) => log::error!("failed to show the preview: {e}"),
        }
    }

    Ok(color)
}

/// Averages the border of an image that has already been downscaled.
pub fn sample_border_color(
    img: &RgbImage,
    sampling: &SamplingArgs,
    level: Level,
) -> Result<AverageColor, DecodeError> {
    let (width, height) = img.dimensions();

    let border = sampling.border_size(width, height);
    log::log!(
        level,
        "border width {} border height {}",
        border.width,
        border.height
    );

    let coords = sampling.border(width, height);
    let total = width as f64 * height as f64;
    let percent = Percent64::of(coords.len() as f64, total).unwrap_or(Percent64::ZERO);
    log::log!(
        level,
        "found border {} pixels ({percent} of {total} pixels in scaled image)",
        coords.len(),
    );

    let samples = ChannelSamples::gather(img, &coords);
    let filtered = sampling.reject_outliers(&samples);
    let [red, green, blue] = filtered.lens().map(|len| coords.len() - len);
    log::log!(level, "rejected outliers: r {red} g {green} b {blue}");

    let averages = filtered.average()?;
    log::log!(level, "averages: {averages}");

    Ok(averages.to_color())
}
