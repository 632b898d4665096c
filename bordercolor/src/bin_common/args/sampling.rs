use std::collections::BTreeSet;

use image::RgbImage;

use crate::{
    border_color::{
        average::ChannelSamples,
        border::{border_coordinates, BorderSize, Coordinate},
        downscale::downscale,
        DecodeError,
    },
    utils::percent::Percent64,
};

use super::args_helper::args;

args! {
    #[derive(Copy, Clone, Debug, PartialEq)]
    Sampling {
        "Width of the border band to sample, in percent of each side of the downscaled \
         image"
        border_percent: Percent64 = Percent64::new(5.0).expect("is a valid percentage");

        "A sample is an outlier if it is this many median absolute deviations away from \
         the median of its channel"
        outlier_sensitivity: f64 = 6.0;

        "The image is resized to this width, keeping its aspect ratio, before sampling"
        target_width: u32 = 200;
    }
}

impl SamplingArgs {
    pub fn downscale(&self, img: RgbImage) -> Result<RgbImage, DecodeError> {
        downscale(img, self.target_width)
    }

    pub fn border_size(&self, width: u32, height: u32) -> BorderSize {
        BorderSize::new(width, height, self.border_percent.fraction())
    }

    pub fn border(&self, width: u32, height: u32) -> BTreeSet<Coordinate> {
        border_coordinates(width, height, self.border_percent.fraction())
    }

    pub fn reject_outliers(&self, samples: &ChannelSamples) -> ChannelSamples {
        samples.reject_outliers(self.outlier_sensitivity)
    }

    pub fn get_border_percent(&self) -> Percent64 {
        self.border_percent
    }

    pub fn get_outlier_sensitivity(&self) -> f64 {
        self.outlier_sensitivity
    }

    pub fn get_target_width(&self) -> u32 {
        self.target_width
    }
}
