// NOTE: every test will complain about the functions it doesn't use
#![allow(unused)]

use std::path::PathBuf;

use image::RgbImage;
use tempfile::{Builder, TempPath};

/// Returns a named temporary file inside cargo's tmpdir, ending with `suffix`
pub fn tmp_file(suffix: &str) -> TempPath {
    Builder::new()
        .suffix(suffix)
        .tempfile_in(cargo_tmpdir())
        .expect("could not create temporary file")
        .into_temp_path()
}

/// Returns cargo's tmpdir
pub fn cargo_tmpdir() -> PathBuf {
    PathBuf::from(option_env!("CARGO_TARGET_TMPDIR").expect("no cargo tmpdir???"))
}

/// Saves `img` as a png in a temporary file
pub fn tmp_png(img: &RgbImage) -> TempPath {
    let path = tmp_file(".png");
    img.save(&path).expect("could not save the image");
    path
}
