//! Circular portrait rendering from base64 encoded photos.
//!
//! Photos arrive as base64 text, optionally wrapped in a `data:` URI. A
//! [`PortraitRenderer`] turns one into a self-contained PNG data URI that
//! the SVG exporter embeds in a member card. All processing happens in
//! memory.

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{DynamicImage, ImageFormat, imageops::FilterType};
use log::trace;
use thiserror::Error;

/// Errors produced while turning a photo into a portrait.
///
/// These never abort a render: the card falls back to a placeholder avatar.
#[derive(Debug, Error)]
pub enum PortraitError {
    #[error("invalid base64 photo data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unreadable photo: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode portrait: {0}")]
    Encode(#[source] image::ImageError),
}

/// A rendered portrait ready to embed in SVG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portrait {
    href: String,
}

impl Portrait {
    /// Wraps encoded PNG bytes in a data URI.
    pub fn from_png(png: &[u8]) -> Self {
        Self {
            href: format!("data:image/png;base64,{}", STANDARD.encode(png)),
        }
    }

    /// Data URI usable as an SVG `<image>` `href`.
    pub fn href(&self) -> &str {
        &self.href
    }
}

/// Turns an encoded photo into a portrait of a given diameter.
pub trait PortraitRenderer: Send + Sync + std::fmt::Debug {
    /// Renders `photo` for display in a circle of `diameter` points.
    fn render(&self, photo: &str, diameter: f32) -> Result<Portrait, PortraitError>;
}

/// Center-crops a photo to a square, resizes it and masks it to a circle.
#[derive(Debug, Clone, Copy)]
pub struct CircularPortrait {
    oversample: f32,
}

impl CircularPortrait {
    /// Creates a renderer producing `oversample` pixels per point.
    pub fn new(oversample: f32) -> Self {
        Self {
            oversample: oversample.max(1.0),
        }
    }
}

impl Default for CircularPortrait {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl PortraitRenderer for CircularPortrait {
    fn render(&self, photo: &str, diameter: f32) -> Result<Portrait, PortraitError> {
        let bytes = decode_photo(photo)?;
        let image = image::load_from_memory(&bytes).map_err(PortraitError::Decode)?;

        let side = image.width().min(image.height());
        if side == 0 {
            return Err(PortraitError::Decode(image::ImageError::Limits(
                image::error::LimitError::from_kind(image::error::LimitErrorKind::DimensionError),
            )));
        }
        let square = image.crop_imm(
            (image.width() - side) / 2,
            (image.height() - side) / 2,
            side,
            side,
        );

        let pixels = (diameter * self.oversample).round().max(1.0) as u32;
        let mut circle = square
            .resize_exact(pixels, pixels, FilterType::Lanczos3)
            .to_rgba8();

        let radius = pixels as f32 / 2.0;
        for (x, y, pixel) in circle.enumerate_pixels_mut() {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            if dx * dx + dy * dy > radius * radius {
                pixel[3] = 0;
            }
        }

        let mut png = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(circle)
            .write_to(&mut png, ImageFormat::Png)
            .map_err(PortraitError::Encode)?;

        trace!(source_side = side, pixels; "Portrait rendered");
        Ok(Portrait::from_png(png.get_ref()))
    }
}

/// Strips an optional `data:` URI prefix and line breaks, then decodes.
fn decode_photo(photo: &str) -> Result<Vec<u8>, PortraitError> {
    let payload = photo.split_once(',').map_or(photo, |(_, data)| data);
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(STANDARD.decode(cleaned)?)
}
