use qrcode::render::svg;
pub use qrcode::types::QrError;
use qrcode::QrCode;
use url::Url;

pub const DEFAULT_SHORT_BASE: &str = "https://skyl.app";

/// Public link for an alias, e.g. `https://skyl.app/promo`.
pub fn short_link(short_base: &str, alias: &str) -> String {
    format!("{}/{}", short_base.trim_end_matches('/'), alias)
}

/// Short base without its scheme, as shown next to alias inputs (`skyl.app/`).
pub fn display_prefix(short_base: &str) -> String {
    let trimmed = short_base.trim_end_matches('/');
    let without_scheme = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);
    format!("{without_scheme}/")
}

/// What a QR code should encode: absolute http(s) URLs as they are, anything else as an alias.
pub fn qr_target(input: &str, short_base: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match Url::parse(input) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(url.to_string()),
        _ => crate::normalize_alias(input).map(|alias| short_link(short_base, &alias)),
    }
}

pub fn render_svg(data: &str, size: u32) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(true)
        .build())
}
