pub mod bin_common;
pub mod border_color;

/// For stand-alone functionality that fit comfortably within one file.
pub mod utils;

pub use border_color::{decode, decode_image, try_decode, DecodeError, DecodeOptions};
