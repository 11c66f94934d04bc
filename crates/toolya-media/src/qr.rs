//! QR code rasterization.

use crate::error::{MediaError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Minimum edge length of the rendered raster, in pixels.
const QR_IMAGE_SIZE: u32 = 512;

/// Render `content` as a grayscale QR raster.
///
/// Deterministic for a given input; empty input is rejected before
/// encoding.
pub fn render_qr_image(content: &str) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>> {
    if content.is_empty() {
        return Err(MediaError::InvalidInput(
            "QR content is empty".to_string(),
        ));
    }
    let code = QrCode::new(content.as_bytes())?;
    Ok(code
        .render::<Luma<u8>>()
        .min_dimensions(QR_IMAGE_SIZE, QR_IMAGE_SIZE)
        .build())
}

/// Render `content` and encode the raster as PNG bytes.
pub fn encode_qr_png(content: &str) -> Result<Vec<u8>> {
    let image = render_qr_image(content)?;
    let mut buffer = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// The PNG as a `data:` URL, suitable for clipboard sharing.
pub fn qr_data_url(content: &str) -> Result<String> {
    let png = encode_qr_png(content)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}
