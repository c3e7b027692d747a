use crate::constants::{BRAND_PALETTE, PALETTE_MIN_LEN};
use smallvec::SmallVec;

/// Resolved color palette. Always at least [`PALETTE_MIN_LEN`] entries, every
/// entry a normalized `#RRGGBB` string.
pub type Palette = SmallVec<[String; 3]>;

/// Normalize a single color token to uppercase `#RRGGBB`.
///
/// Accepts 3- or 6-digit hex, with or without the leading `#`. 3-digit form
/// is expanded by digit duplication. Anything else is rejected.
pub fn normalize_hex(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in digits.chars() {
                let upper = c.to_ascii_uppercase();
                out.push(upper);
                out.push(upper);
            }
            Some(out)
        }
        6 => Some(format!("#{}", digits.to_ascii_uppercase())),
        _ => None,
    }
}

/// Resolve a comma-delimited color list into a render palette.
///
/// Invalid tokens are dropped before padding; valid colors keep their input
/// order at the front. Short or absent input is padded cyclically from the
/// brand palette until the minimum length is met. Pure and deterministic.
pub fn resolve_palette(raw: Option<&str>) -> Palette {
    let mut colors: Palette = SmallVec::new();
    if let Some(raw) = raw {
        for token in raw.split(',') {
            if let Some(hex) = normalize_hex(token) {
                colors.push(hex);
            }
        }
    }
    while colors.len() < PALETTE_MIN_LEN {
        colors.push(BRAND_PALETTE[colors.len() % BRAND_PALETTE.len()].to_string());
    }
    colors
}

/// Decode a normalized `#RRGGBB` string into RGB bytes.
///
/// Input is expected to come from [`normalize_hex`]; malformed strings decode
/// to the first brand color rather than failing.
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return [0x7C, 0x3A, 0xED];
    }
    let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
    [
        parse(&digits[0..2]),
        parse(&digits[2..4]),
        parse(&digits[4..6]),
    ]
}

/// Format RGB bytes and an alpha value as a CSS `rgba()` string.
pub fn rgba_string(rgb: [u8; 3], alpha: f32) -> String {
    let a = alpha.clamp(0.0, 1.0);
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], a)
}
