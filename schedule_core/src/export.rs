//! # Image Export Module
//!
//! Encodes the rasterized poster as a downloadable file: lossless PNG or
//! JPEG at a fixed quality, always at a fixed 2x oversampling factor so
//! the output is independent of on-screen display scale.
//!
//! ## Example
//!
//! ```rust,no_run
//! use schedule_core::export::{export_filename, render_image, ImageFormat};
//! use schedule_core::schedule::Schedule;
//!
//! let schedule = Schedule::new();
//! let bytes = render_image(&schedule, ImageFormat::Png).unwrap();
//! let name = export_filename(&schedule.company_name, &schedule.date, ImageFormat::Png);
//! std::fs::write(name, bytes).unwrap();
//! ```

use std::fmt;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::errors::{ScheduleError, ScheduleResult};
use crate::poster::{render_rgba, RasterImage};
use crate::schedule::Schedule;

/// Export oversampling factor: pixels per layout unit
pub const EXPORT_PIXELS_PER_PT: f32 = 2.0;

/// Quality setting for the lossy format
pub const JPEG_QUALITY: u8 = 95;

/// Supported export encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Lossless raster
    Png,
    /// Lossy raster at [`JPEG_QUALITY`]
    Jpeg,
}

impl ImageFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }

    /// Human-readable filter label for save dialogs
    pub fn label(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG image",
            ImageFormat::Jpeg => "JPEG image",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png => write!(f, "PNG"),
            ImageFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// Derive the output filename: `schedule-<company>-<date>.<ext>`, with a
/// generic `bus` token standing in for an empty company name.
///
/// # Example
///
/// ```rust
/// use schedule_core::export::{export_filename, ImageFormat};
///
/// assert_eq!(
///     export_filename("", "2024-01-01", ImageFormat::Png),
///     "schedule-bus-2024-01-01.png"
/// );
/// ```
pub fn export_filename(company_name: &str, date: &str, format: ImageFormat) -> String {
    let company = if company_name.is_empty() {
        "bus"
    } else {
        company_name
    };
    format!("schedule-{}-{}.{}", company, date, format.extension())
}

/// Render the poster to encoded image bytes at the export oversampling
/// factor.
pub fn render_image(schedule: &Schedule, format: ImageFormat) -> ScheduleResult<Vec<u8>> {
    render_image_scaled(schedule, format, EXPORT_PIXELS_PER_PT)
}

/// Render the poster to encoded image bytes at an explicit oversampling
/// factor (used by the CLI's `--scale` flag).
pub fn render_image_scaled(
    schedule: &Schedule,
    format: ImageFormat,
    pixels_per_pt: f32,
) -> ScheduleResult<Vec<u8>> {
    let image = render_rgba(schedule, pixels_per_pt)?;
    match format {
        ImageFormat::Png => encode_png(&image),
        ImageFormat::Jpeg => encode_jpeg(&image),
    }
}

fn encode_png(image: &RasterImage) -> ScheduleResult<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ScheduleError::encode("png", e.to_string()))?;
    Ok(bytes)
}

fn encode_jpeg(image: &RasterImage) -> ScheduleResult<Vec<u8>> {
    // JPEG carries no alpha channel; the poster background is opaque
    let mut rgb = Vec::with_capacity(image.pixels.len() / 4 * 3);
    for pixel in image.pixels.chunks_exact(4) {
        rgb.extend_from_slice(&pixel[..3]);
    }

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| ScheduleError::encode("jpeg", e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::BusField;

    fn sample() -> Schedule {
        let mut schedule = Schedule::new();
        schedule.set_company_name("Royal Travels");
        schedule.set_date("2024-01-01");
        let id = schedule.buses[0].id;
        schedule.set_field(&id, BusField::BusNumber, "12");
        schedule.set_field(&id, BusField::Time, "09:00");
        schedule
    }

    #[test]
    fn test_filename_falls_back_to_generic_token() {
        assert_eq!(
            export_filename("", "2024-01-01", ImageFormat::Png),
            "schedule-bus-2024-01-01.png"
        );
    }

    #[test]
    fn test_filename_carries_company_and_extension() {
        assert_eq!(
            export_filename("Royal Travels", "2024-01-01", ImageFormat::Jpeg),
            "schedule-Royal Travels-2024-01-01.jpeg"
        );
    }

    #[test]
    fn test_png_output_has_png_signature() {
        let bytes = render_image_scaled(&sample(), ImageFormat::Png, 1.0).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        assert!(bytes.len() > 1000, "PNG seems too small");
    }

    #[test]
    fn test_jpeg_output_has_jpeg_signature() {
        let bytes = render_image_scaled(&sample(), ImageFormat::Jpeg, 1.0).unwrap();
        assert!(bytes.starts_with(&[0xFF, 0xD8]));
        assert!(bytes.len() > 1000, "JPEG seems too small");
    }

    #[test]
    fn test_export_is_deterministic() {
        let schedule = sample();
        let first = render_image_scaled(&schedule, ImageFormat::Png, 1.0).unwrap();
        let second = render_image_scaled(&schedule, ImageFormat::Png, 1.0).unwrap();
        assert_eq!(first, second);
    }
}
