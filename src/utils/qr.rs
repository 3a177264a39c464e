//! Scannable code rendering for share links.

use qrcode::QrCode;
use qrcode::render::svg;

use crate::config::share_code::{DARK_COLOR, LIGHT_COLOR, MIN_SIZE_PX};

/// Render `data` as an SVG QR code.
pub fn render_svg(data: &str) -> Result<String, qrcode::types::QrError> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(MIN_SIZE_PX, MIN_SIZE_PX)
        .dark_color(svg::Color(DARK_COLOR))
        .light_color(svg::Color(LIGHT_COLOR))
        .build())
}
