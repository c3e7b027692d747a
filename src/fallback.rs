use crate::constants::*;
use crate::palette::{hex_to_rgb, rgba_string};

/// Build the static multi-stop gradient for a palette.
///
/// Purely declarative: the returned string is a CSS `background` value with
/// three radial anchors and a diagonal wash, used whenever the animated
/// renderer is unavailable and as the placeholder before its first frame.
pub fn fallback_gradient(palette: &[String]) -> String {
    let rgb = |i: usize| {
        let hex = palette
            .get(i)
            .map(String::as_str)
            .unwrap_or(BRAND_PALETTE[i % BRAND_PALETTE.len()]);
        hex_to_rgb(hex)
    };
    let primary = rgb(0);
    let secondary = rgb(1);
    let accent = rgb(2);

    format!(
        "radial-gradient(circle at 15% 20%, {} 0%, transparent 55%),\
radial-gradient(circle at 85% 25%, {} 0%, transparent 60%),\
radial-gradient(circle at 50% 80%, {} 0%, transparent 58%),\
linear-gradient(125deg, {} 0%, {} 50%, {} 100%)",
        rgba_string(primary, FALLBACK_PRIMARY_ALPHA),
        rgba_string(secondary, FALLBACK_SECONDARY_ALPHA),
        rgba_string(accent, FALLBACK_ACCENT_ALPHA),
        rgba_string(primary, 0.55),
        rgba_string(secondary, 0.35),
        rgba_string(accent, 0.5),
    )
}
