//! Image format re-encoding.
//!
//! Decodes whatever format the `image` crate sniffs from the input bytes
//! and re-encodes to the requested target. Compression parameters are not
//! exposed; lossiness is whatever the target codec does by default.

use crate::error::Result;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Supported re-encoding targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    WebP,
    Bmp,
    Gif,
    Tiff,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Png,
        OutputFormat::Jpeg,
        OutputFormat::WebP,
        OutputFormat::Bmp,
        OutputFormat::Gif,
        OutputFormat::Tiff,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::WebP => "webp",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Gif => "gif",
            OutputFormat::Tiff => "tiff",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPG",
            OutputFormat::WebP => "WebP",
            OutputFormat::Bmp => "BMP",
            OutputFormat::Gif => "GIF",
            OutputFormat::Tiff => "TIFF",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "webp" => Some(OutputFormat::WebP),
            "bmp" => Some(OutputFormat::Bmp),
            "gif" => Some(OutputFormat::Gif),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            _ => None,
        }
    }

    /// The fixed suggested download name, `converted.<ext>`.
    pub fn suggested_filename(self) -> String {
        format!("converted.{}", self.extension())
    }

    fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::WebP => ImageFormat::WebP,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Gif => ImageFormat::Gif,
            OutputFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

/// Decode `bytes` and re-encode to `format`.
pub fn convert_image(bytes: &[u8], format: OutputFormat) -> Result<Vec<u8>> {
    let decoded = image::load_from_memory(bytes)?;

    // Route through a color type the target encoder accepts: JPEG has no
    // alpha channel, GIF frames are RGBA.
    let decoded = match format {
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(decoded.to_rgb8()),
        OutputFormat::Gif => DynamicImage::ImageRgba8(decoded.to_rgba8()),
        _ => decoded,
    };

    let mut buffer = Vec::new();
    decoded.write_to(&mut Cursor::new(&mut buffer), format.image_format())?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample_png() -> Vec<u8> {
        let img = RgbaImage::from_pixel(8, 6, Rgba([200, 40, 40, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn converts_between_formats_preserving_dimensions() {
        let png = sample_png();
        for format in OutputFormat::ALL {
            let converted = convert_image(&png, format).unwrap();
            let decoded = image::load_from_memory(&converted)
                .unwrap_or_else(|e| panic!("output for {format:?} did not decode: {e}"));
            assert_eq!((decoded.width(), decoded.height()), (8, 6), "{format:?}");
        }
    }

    #[test]
    fn undecodable_input_is_rejected() {
        assert!(convert_image(b"not an image", OutputFormat::Png).is_err());
    }

    #[test]
    fn extension_mapping_round_trips() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_extension(format.extension()), Some(format));
        }
        assert_eq!(
            OutputFormat::from_extension("JPEG"),
            Some(OutputFormat::Jpeg)
        );
        assert_eq!(OutputFormat::from_extension("exe"), None);
    }

    #[test]
    fn suggested_filenames_use_the_extension() {
        assert_eq!(OutputFormat::Jpeg.suggested_filename(), "converted.jpg");
        assert_eq!(OutputFormat::WebP.suggested_filename(), "converted.webp");
    }
}
