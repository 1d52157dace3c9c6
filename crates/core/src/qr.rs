//! Menu QR code generation.
//!
//! A restaurant's QR code encodes the public URL of its customer menu page
//! and is rendered as a black-on-white PNG with error correction level H.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::error::CoreError;
use crate::types::DbId;

/// Pixel size of one QR module.
pub const MODULE_SIZE_PX: u32 = 10;

/// Build the customer-facing menu URL encoded in a restaurant's QR code.
///
/// A trailing slash on `base_url` is ignored.
pub fn menu_url(base_url: &str, restaurant_id: DbId) -> String {
    format!("{}/menu/{restaurant_id}", base_url.trim_end_matches('/'))
}

/// Render `data` as a PNG-encoded QR code.
///
/// Uses error correction level H, [`MODULE_SIZE_PX`] pixels per module and
/// the standard 4-module quiet zone. The symbol version grows to fit `data`.
pub fn render_png(data: &str) -> Result<Vec<u8>, CoreError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)
        .map_err(|e| CoreError::Internal(format!("QR encoding failed: {e}")))?;

    let img = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE_PX, MODULE_SIZE_PX)
        .quiet_zone(true)
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .build();

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| CoreError::Internal(format!("QR PNG encoding failed: {e}")))?;

    Ok(buf.into_inner())
}
