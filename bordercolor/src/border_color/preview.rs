use std::{
    io,
    path::{Path, PathBuf},
    process::Command,
};

use image::RgbImage;

use crate::utils::{imgutils, math};

use super::average::AverageColor;

#[derive(thiserror::Error, Debug)]
pub enum PreviewError {
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("failed to launch the image viewer {program:?}: {source}")]
    Viewer {
        program: &'static str,
        source: io::Error,
    },
}

const PREVIEW_SCALE: f64 = 1.5;

/// Puts `img` in the middle of a canvas one and a half times as big, filled with `color`.
pub fn compose_preview(img: &RgbImage, color: AverageColor) -> RgbImage {
    let scale = |side: u32| math::round(side as f64 * PREVIEW_SCALE) as u32;
    let [r, g, b] = color.rgb().0;

    let mut canvas = imgutils::filled(scale(img.width()), scale(img.height()), r, g, b);
    imgutils::paste_centered(&mut canvas, img);
    canvas
}

pub fn save_preview(
    img: &RgbImage,
    color: AverageColor,
    path: &Path,
) -> Result<(), PreviewError> {
    compose_preview(img, color).save(path)?;
    Ok(())
}

/// Writes the preview to a temporary file and opens it in the default image viewer. The
/// file is left behind since the viewer might still be reading it when this returns.
pub fn show_preview(img: &RgbImage, color: AverageColor) -> Result<PathBuf, PreviewError> {
    let file = tempfile::Builder::new()
        .prefix("bordercolor-")
        .suffix(".png")
        .tempfile()?;
    compose_preview(img, color).save(file.path())?;
    let path = file.into_temp_path().keep().map_err(|e| e.error)?;

    open_viewer(&path)?;
    Ok(path)
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> (&'static str, Command) {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    ("open", cmd)
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> (&'static str, Command) {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    ("cmd", cmd)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> (&'static str, Command) {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    ("xdg-open", cmd)
}

fn open_viewer(path: &Path) -> Result<(), PreviewError> {
    let (program, mut cmd) = viewer_command(path);
    cmd.spawn()
        .map_err(|source| PreviewError::Viewer { program, source })?;
    Ok(())
}
