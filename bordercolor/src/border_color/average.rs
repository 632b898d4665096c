use std::{fmt, str::FromStr};

use image::{Rgb, RgbImage};

use crate::utils::math;

use super::{border::Coordinate, outliers::reject_outliers, DecodeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
        };
        f.write_str(name)
    }
}

/// One list of samples per channel. The lists start out equally long, one entry per
/// sampled pixel, but can differ after outliers have been removed from each of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelSamples {
    pub red: Vec<i64>,
    pub green: Vec<i64>,
    pub blue: Vec<i64>,
}

impl ChannelSamples {
    pub fn new(red: Vec<i64>, green: Vec<i64>, blue: Vec<i64>) -> Self {
        Self { red, green, blue }
    }

    /// Reads the pixels at `coords` from `img`.
    ///
    /// # Panics
    /// If a coordinate is outside of `img`.
    pub fn gather<'a>(
        img: &RgbImage,
        coords: impl IntoIterator<Item = &'a Coordinate>,
    ) -> Self {
        let mut samples = Self::default();
        for c in coords {
            let Rgb([r, g, b]) = *img.get_pixel(c.x, c.y);
            samples.red.push(r.into());
            samples.green.push(g.into());
            samples.blue.push(b.into());
        }
        samples
    }

    pub fn channel(&self, channel: Channel) -> &[i64] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn lens(&self) -> [usize; 3] {
        [self.red.len(), self.green.len(), self.blue.len()]
    }

    /// Removes outliers from every channel independently.
    pub fn reject_outliers(&self, m: f64) -> Self {
        Self {
            red: reject_outliers(&self.red, m),
            green: reject_outliers(&self.green, m),
            blue: reject_outliers(&self.blue, m),
        }
    }

    /// The rounded mean of every channel.
    pub fn average(&self) -> Result<ChannelAverages, DecodeError> {
        let avg = |channel| {
            math::mean(self.channel(channel))
                .map(|mean| math::round(mean) as i64)
                .ok_or(DecodeError::NoSamples(channel))
        };

        Ok(ChannelAverages {
            red: avg(Channel::Red)?,
            green: avg(Channel::Green)?,
            blue: avg(Channel::Blue)?,
        })
    }
}

/// Per channel averages before they are clamped into a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelAverages {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

impl ChannelAverages {
    pub fn to_color(self) -> AverageColor {
        let clamp = |v: i64| v.clamp(u8::MIN.into(), u8::MAX.into()) as u8;
        AverageColor(Rgb([clamp(self.red), clamp(self.green), clamp(self.blue)]))
    }
}

impl fmt::Display for ChannelAverages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r {} g {} b {}", self.red, self.green, self.blue)
    }
}

/// A color that displays as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AverageColor(pub Rgb<u8>);

#[derive(thiserror::Error, Debug)]
#[error("not a color of the form #rrggbb")]
pub struct ParseColorError;

impl AverageColor {
    pub const WHITE: Self = AverageColor(Rgb([u8::MAX, u8::MAX, u8::MAX]));

    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Rgb([red, green, blue]))
    }

    pub fn rgb(self) -> Rgb<u8> {
        self.0
    }
}

impl Default for AverageColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for AverageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb([r, g, b]) = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for AverageColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColorError)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError);
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError)
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod test {
    use crate::utils::imgutils::filled;

    use super::*;

    fn averages(red: &[i64], green: &[i64], blue: &[i64]) -> ChannelSamples {
        ChannelSamples::new(red.to_vec(), green.to_vec(), blue.to_vec())
    }

    #[test]
    fn exact_average() {
        let samples = averages(&[10, 10, 10], &[0, 0, 0], &[255, 255, 255]);
        let avg = samples.average().unwrap();
        assert_eq!(
            ChannelAverages {
                red: 10,
                green: 0,
                blue: 255
            },
            avg
        );
        assert_eq!("#0a00ff", avg.to_color().to_string());
    }

    #[test]
    fn rounding_ties_to_even() {
        let samples = averages(&[1, 2], &[2, 3], &[0, 1, 1, 1]);
        let avg = samples.average().unwrap();
        assert_eq!(2, avg.red);
        assert_eq!(2, avg.green);
        assert_eq!(1, avg.blue);
    }

    #[test]
    fn clamped() {
        let samples = averages(&[300, 400], &[-20], &[128]);
        assert_eq!("#ff0080", samples.average().unwrap().to_color().to_string());
    }

    #[test]
    fn empty_channel() {
        let samples = averages(&[1], &[], &[1]);
        assert!(matches!(
            samples.average(),
            Err(DecodeError::NoSamples(Channel::Green))
        ));
    }

    #[test]
    fn gather_pixels() {
        let mut img = filled(3, 3, 1, 2, 3);
        img.put_pixel(2, 1, Rgb([7, 8, 9]));

        let coords = [Coordinate::new(0, 0), Coordinate::new(2, 1)];
        let samples = ChannelSamples::gather(&img, &coords);
        assert_eq!(averages(&[1, 7], &[2, 8], &[3, 9]), samples);
        assert_eq!([2, 2, 2], samples.lens());
    }

    #[test]
    fn channels_diverge() {
        let samples = averages(&[10, 11, 12, 13, 14, 240], &[5; 6], &[0; 6]);
        let filtered = samples.reject_outliers(6.0);
        assert_eq!([5, 6, 6], filtered.lens());
    }

    #[test]
    fn hex_format() {
        assert_eq!("#ffffff", AverageColor::WHITE.to_string());
        assert_eq!("#000000", AverageColor::new(0, 0, 0).to_string());
        assert_eq!("#0a0b0c", AverageColor::new(10, 11, 12).to_string());
    }

    #[test]
    fn parse() {
        assert_eq!(
            AverageColor::new(0xab, 0x01, 0xff),
            "#AB01ff".parse().unwrap()
        );
        assert!("ab01ff".parse::<AverageColor>().is_err());
        assert!("#ab01f".parse::<AverageColor>().is_err());
        assert!("#ab01fg".parse::<AverageColor>().is_err());
        assert!("#ab01f\u{e9}".parse::<AverageColor>().is_err());
    }
}
