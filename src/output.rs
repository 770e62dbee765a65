//! Output naming and saving for adapted images.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::client::AdaptedImage;
use crate::error::AdaptError;
use crate::platform::Platform;

/// Generate a download-style filename: `visual-adapt-<platform>-<timestamp>.<ext>`.
#[must_use]
pub fn auto_filename(platform: Platform, image: &AdaptedImage) -> String {
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("visual-adapt-{}-{timestamp}.{}", platform.slug(), image.extension())
}

/// Resolve the output path: use explicit path or auto-generate.
#[must_use]
pub fn resolve_output_path(
    explicit: Option<&str>,
    platform: Platform,
    image: &AdaptedImage,
) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(auto_filename(platform, image)),
    }
}

/// Save the adapted image to a file.
///
/// The bytes are written verbatim; the model owns every pixel
/// transformation, so nothing is re-encoded here.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_image(image: &AdaptedImage, path: &Path) -> Result<(), AdaptError> {
    std::fs::write(path, &image.data).map_err(AdaptError::Io)
}
