//! QR 图像编码
//!
//! Thin wrapper around the external encoder. Callers treat the payload as
//! opaque; encoding failures are theirs to swallow.

use qrcode::QrCode;
use qrcode::render::svg;

use crate::errors::{Result, SnaplinkError};

pub struct QrEncoder {
    min_dimensions: u32,
}

impl QrEncoder {
    pub fn new() -> Self {
        QrEncoder {
            min_dimensions: 200,
        }
    }

    /// Render a URL as an SVG image payload.
    pub fn encode_svg(&self, url: &str) -> Result<String> {
        let code = QrCode::new(url.as_bytes())
            .map_err(|e| SnaplinkError::internal(format!("QR encoding failed: {:?}", e)))?;

        let image = code
            .render::<svg::Color>()
            .min_dimensions(self.min_dimensions, self.min_dimensions)
            .build();

        Ok(image)
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
