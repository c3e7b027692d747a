// Host-side tests for the pure palette resolver.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod palette {
    include!("../src/palette.rs");
}

use constants::BRAND_PALETTE;
use palette::*;

#[test]
fn normalize_accepts_six_digit_hex_with_and_without_prefix() {
    assert_eq!(normalize_hex("#7C3AED").as_deref(), Some("#7C3AED"));
    assert_eq!(normalize_hex("0ea5e9").as_deref(), Some("#0EA5E9"));
    assert_eq!(normalize_hex("  #ec4899  ").as_deref(), Some("#EC4899"));
}

#[test]
fn normalize_expands_three_digit_hex_by_digit_duplication() {
    assert_eq!(normalize_hex("#123").as_deref(), Some("#112233"));
    assert_eq!(normalize_hex("abc").as_deref(), Some("#AABBCC"));
}

#[test]
fn normalize_rejects_malformed_tokens() {
    assert_eq!(normalize_hex(""), None);
    assert_eq!(normalize_hex("   "), None);
    assert_eq!(normalize_hex("#12"), None);
    assert_eq!(normalize_hex("#12345"), None);
    assert_eq!(normalize_hex("#1234567"), None);
    assert_eq!(normalize_hex("not-a-color"), None);
    assert_eq!(normalize_hex("#ZZZZZZ"), None);
}

#[test]
fn empty_input_yields_exactly_the_brand_triple() {
    for raw in [None, Some(""), Some(" , , "), Some("nope,also-nope")] {
        let resolved = resolve_palette(raw);
        assert_eq!(resolved.len(), 3, "input {:?}", raw);
        for (got, want) in resolved.iter().zip(BRAND_PALETTE.iter()) {
            assert_eq!(got, want, "input {:?}", raw);
        }
    }
}

#[test]
fn short_input_is_padded_with_valid_colors_kept_in_order_at_front() {
    let resolved = resolve_palette(Some("#111111,#222222"));
    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved[0], "#111111");
    assert_eq!(resolved[1], "#222222");
    assert_eq!(resolved[2], BRAND_PALETTE[2]);
}

#[test]
fn invalid_tokens_are_dropped_before_padding() {
    let resolved = resolve_palette(Some("#ZZZZZZ,#123"));
    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved[0], "#112233");
    assert_eq!(resolved[1], BRAND_PALETTE[1]);
    assert_eq!(resolved[2], BRAND_PALETTE[2]);
}

#[test]
fn long_input_is_not_truncated() {
    let resolved = resolve_palette(Some("#111111,#222222,#333333,#444444,#555555"));
    assert_eq!(resolved.len(), 5);
    assert_eq!(resolved[4], "#555555");
}

#[test]
fn resolution_is_deterministic_and_idempotent() {
    let input = Some("#abc,#ZZZZZZ,#0EA5E9");
    let first = resolve_palette(input);
    let second = resolve_palette(input);
    assert_eq!(first, second);
}

#[test]
fn hex_to_rgb_decodes_brand_colors() {
    assert_eq!(hex_to_rgb("#7C3AED"), [124, 58, 237]);
    assert_eq!(hex_to_rgb("#0EA5E9"), [14, 165, 233]);
    assert_eq!(hex_to_rgb("#EC4899"), [236, 72, 153]);
}

#[test]
fn rgba_string_clamps_alpha() {
    assert_eq!(rgba_string([1, 2, 3], 0.5), "rgba(1, 2, 3, 0.5)");
    assert_eq!(rgba_string([1, 2, 3], 2.0), "rgba(1, 2, 3, 1)");
    assert_eq!(rgba_string([1, 2, 3], -1.0), "rgba(1, 2, 3, 0)");
}
