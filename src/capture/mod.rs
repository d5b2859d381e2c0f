//! Image export of rendered UI elements.
//!
//! Rendering an element is left to the host through [`Renderable`]; this
//! module encodes the snapshot as PNG, JPEG or SVG, hands the bytes to a
//! [`DownloadSink`] as `<filename>.<ext>`, and reports the outcome through a
//! [`Notifier`] with translated messages.

pub mod encode;
pub mod export;
pub mod messages;

pub use encode::{encode, to_data_url, Snapshot};
pub use export::{capture_image, DirectorySink, DownloadSink, ImageCapture, Renderable};
pub use messages::{Catalog, LogNotifier, Notifier, Translator};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureType {
    /// Lossless raster.
    #[default]
    #[serde(rename = "png")]
    Png,
    /// Lossy raster.
    #[serde(rename = "jpg")]
    Jpeg,
    /// Vector.
    #[serde(rename = "svg")]
    Svg,
}

impl CaptureType {
    /// File extension used for downloads.
    pub fn extension(&self) -> &'static str {
        match self {
            CaptureType::Png => "png",
            CaptureType::Jpeg => "jpg",
            CaptureType::Svg => "svg",
        }
    }

    /// MIME type of the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        match self {
            CaptureType::Png => "image/png",
            CaptureType::Jpeg => "image/jpeg",
            CaptureType::Svg => "image/svg+xml",
        }
    }
}

impl fmt::Display for CaptureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for CaptureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(CaptureType::Png),
            "jpg" | "jpeg" => Ok(CaptureType::Jpeg),
            "svg" => Ok(CaptureType::Svg),
            other => Err(format!("unsupported capture type: {}", other)),
        }
    }
}

/// Errors that can occur while exporting an image.
#[derive(Debug)]
pub enum CaptureError {
    /// The element could not be rendered.
    Render(String),

    /// The snapshot could not be encoded in the requested format.
    Encode(image::ImageError),

    /// The snapshot kind cannot be converted to the requested format.
    Unsupported(String),

    /// The encoded file could not be delivered.
    Download(std::io::Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Render(reason) => write!(f, "Failed to render element: {}", reason),
            CaptureError::Encode(err) => write!(f, "Failed to encode image: {}", err),
            CaptureError::Unsupported(reason) => write!(f, "Unsupported export: {}", reason),
            CaptureError::Download(err) => write!(f, "Failed to save image: {}", err),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Encode(err) => Some(err),
            CaptureError::Download(err) => Some(err),
            CaptureError::Render(_) | CaptureError::Unsupported(_) => None,
        }
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(err: image::ImageError) -> Self {
        CaptureError::Encode(err)
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::Download(err)
    }
}
