//! Snapshot encoding.

use super::{CaptureError, CaptureType};
use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat, Rgb, RgbImage, RgbaImage};
use std::io::Cursor;

/// JPEG quality used for lossy exports.
pub const JPEG_QUALITY: u8 = 92;

/// The rendered state of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    /// Pixels, straight (non-premultiplied) alpha.
    Raster(RgbaImage),
    /// SVG markup.
    Vector(String),
}

/// Encodes a snapshot in the requested format.
///
/// Raster snapshots can be written as any format; SVG output embeds the
/// pixels as a PNG image. Vector snapshots can only be written as SVG.
pub fn encode(snapshot: &Snapshot, kind: CaptureType) -> Result<Vec<u8>, CaptureError> {
    match (snapshot, kind) {
        (Snapshot::Raster(pixels), CaptureType::Png) => encode_png(pixels),
        (Snapshot::Raster(pixels), CaptureType::Jpeg) => encode_jpeg(pixels),
        (Snapshot::Raster(pixels), CaptureType::Svg) => {
            let png = encode_png(pixels)?;
            Ok(wrap_svg(pixels.width(), pixels.height(), &png).into_bytes())
        }
        (Snapshot::Vector(markup), CaptureType::Svg) => Ok(markup.clone().into_bytes()),
        (Snapshot::Vector(_), raster) => Err(CaptureError::Unsupported(format!(
            "cannot rasterize a vector snapshot to {}",
            raster
        ))),
    }
}

/// Builds a `data:` URL for encoded bytes.
pub fn to_data_url(bytes: &[u8], kind: CaptureType) -> String {
    format!(
        "data:{};base64,{}",
        kind.mime_type(),
        general_purpose::STANDARD.encode(bytes)
    )
}

fn encode_png(pixels: &RgbaImage) -> Result<Vec<u8>, CaptureError> {
    let mut buffer = Vec::new();
    DynamicImage::ImageRgba8(pixels.clone())
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

fn encode_jpeg(pixels: &RgbaImage) -> Result<Vec<u8>, CaptureError> {
    let rgb = flatten_on_white(pixels);
    let mut buffer = Vec::new();

    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
    encoder.encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ColorType::Rgb8.into(),
    )?;

    Ok(buffer)
}

// JPEG has no alpha channel.
fn flatten_on_white(pixels: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(pixels.width(), pixels.height(), |x, y| {
        let [r, g, b, a] = pixels.get_pixel(x, y).0;
        let blend = |c: u8| ((c as u16 * a as u16 + 255 * (255 - a as u16)) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

fn wrap_svg(width: u32, height: u32, png: &[u8]) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
         <image width=\"{w}\" height=\"{h}\" href=\"{href}\"/></svg>",
        w = width,
        h = height,
        href = to_data_url(png, CaptureType::Png)
    )
}
