//! # Mood Color Contrast
//!
//! Picks a readable text color (black or white) for an arbitrary mood color.
//!
//! ```text
//! "#RRGGBB" ──parser──▶ [R, G, B] ──luma──▶ brightness ──> 155? ──▶ Black | White
//! ```
//!
//! Channel parsing sits behind [`ChannelParser`] so the permissive default
//! can be replaced by [`parse_channels_strict`] without touching rendering.
//! A channel that fails to parse is "not a number": the brightness becomes
//! NaN, and NaN is never brighter than the threshold, so the result is white.

use serde::{Deserialize, Serialize};

/// Mood color used before the first playlist arrives or when a response has none.
pub const DEFAULT_MOOD_COLOR: &str = "#E5E7EB";

/// Brightness above which black text is chosen.
pub const BRIGHTNESS_THRESHOLD: f64 = 155.0;

/// Foreground color chosen for a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn hex(self) -> &'static str {
        match self {
            TextColor::Black => "#000000",
            TextColor::White => "#FFFFFF",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            TextColor::Black => (0, 0, 0),
            TextColor::White => (255, 255, 255),
        }
    }
}

/// Parsed red, green and blue channels. `None` means the channel is not a number.
pub type Channels = [Option<u8>; 3];

/// Turns a `#`-prefixed color string into its three channels.
pub type ChannelParser = fn(&str) -> Channels;

/// How mood colors are parsed before computing contrast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HexParsing {
    /// Prefix parse per channel; malformed digits degrade instead of failing.
    #[default]
    Lenient,
    /// Only exact `#RRGGBB` strings yield channels.
    Strict,
}

impl HexParsing {
    pub fn parser(self) -> ChannelParser {
        match self {
            HexParsing::Lenient => parse_channels_lenient,
            HexParsing::Strict => parse_channels_strict,
        }
    }
}

/// Text color for `bg` using the permissive parser.
pub fn text_color(bg: &str) -> TextColor {
    text_color_with(bg, parse_channels_lenient)
}

/// Text color for `bg` using the given channel parser.
///
/// Anything not starting with `#` (named colors included) gets black text.
pub fn text_color_with(bg: &str, parser: ChannelParser) -> TextColor {
    if !bg.starts_with('#') {
        return TextColor::Black;
    }

    if brightness(parser(bg)) > BRIGHTNESS_THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// Perceptual brightness on a 0-255 scale. NaN if any channel is missing.
pub fn brightness(channels: Channels) -> f64 {
    let [r, g, b] = channels.map(|c| c.map_or(f64::NAN, f64::from));
    (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0
}

/// Reads the characters at `[1..3]`, `[3..5]`, `[5..7]` and parses the longest
/// leading run of hex digits in each. Out-of-range slices are empty and
/// therefore not a number.
pub fn parse_channels_lenient(color: &str) -> Channels {
    let chars: Vec<char> = color.chars().collect();
    let slice = |start: usize| -> String {
        chars.iter().skip(start).take(2).collect()
    };
    [slice(1), slice(3), slice(5)].map(|s| parse_hex_prefix(&s))
}

/// Accepts exactly `#` followed by six hex digits; anything else yields no channels.
pub fn parse_channels_strict(color: &str) -> Channels {
    match parse_rgb(color) {
        Some((r, g, b)) => [Some(r), Some(g), Some(b)],
        None => [None; 3],
    }
}

/// Strictly parses `#RRGGBB` into its channels.
pub fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn parse_hex_prefix(s: &str) -> Option<u8> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_hexdigit()).collect();
    if digits.is_empty() {
        return None;
    }
    u8::from_str_radix(&digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_background_gets_black_text() {
        assert_eq!(text_color("#FFFFFF"), TextColor::Black);
        assert_eq!(text_color("#FFFFFF").hex(), "#000000");
    }

    #[test]
    fn test_black_background_gets_white_text() {
        assert_eq!(text_color("#000000"), TextColor::White);
        assert_eq!(text_color("#000000").hex(), "#FFFFFF");
    }

    #[test]
    fn test_default_mood_color_is_light() {
        assert_eq!(text_color(DEFAULT_MOOD_COLOR), TextColor::Black);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // 0x9B = 155, so brightness is exactly 155 and not above it
        assert_eq!(brightness(parse_channels_lenient("#9B9B9B")), 155.0);
        assert_eq!(text_color("#9B9B9B"), TextColor::White);
        assert_eq!(text_color("#9B9B9B"), text_color("#9B9B9B"));
        assert_eq!(text_color("#9C9C9C"), TextColor::Black);
    }

    #[test]
    fn test_monotonic_in_brightness() {
        let mut seen_black = false;
        for v in 0..=255u8 {
            let color = format!("#{v:02X}{v:02X}{v:02X}");
            let result = text_color(&color);
            if seen_black {
                assert_eq!(result, TextColor::Black, "{color} flipped back to white");
            }
            seen_black |= result == TextColor::Black;
        }
        assert!(seen_black);
    }

    #[test]
    fn test_non_hash_input_is_black() {
        assert_eq!(text_color("red"), TextColor::Black);
        assert_eq!(text_color(""), TextColor::Black);
        assert_eq!(text_color("FFFFFF"), TextColor::Black);
    }

    #[test]
    fn test_lenient_parses_hex_prefix() {
        assert_eq!(parse_channels_lenient("#1G2H3I"), [Some(1), Some(2), Some(3)]);
        assert_eq!(parse_channels_lenient("#ZZ0000"), [None, Some(0), Some(0)]);
    }

    #[test]
    fn test_lenient_short_input_is_not_a_number() {
        assert_eq!(parse_channels_lenient("#FFF"), [Some(255), Some(15), None]);
        assert!(brightness(parse_channels_lenient("#FFF")).is_nan());
        assert_eq!(text_color("#FFF"), TextColor::White);
        assert_eq!(text_color("#"), TextColor::White);
    }

    #[test]
    fn test_lenient_handles_multibyte_chars() {
        assert_eq!(parse_channels_lenient("#éé0000"), [None, Some(0), Some(0)]);
        assert_eq!(text_color("#éé0000"), TextColor::White);
    }

    #[test]
    fn test_strict_rejects_malformed() {
        assert_eq!(parse_channels_strict("#1G2H3I"), [None; 3]);
        assert_eq!(parse_channels_strict("#ABCDEF0"), [None; 3]);
        assert_eq!(parse_channels_strict("#abcdef"), [Some(0xAB), Some(0xCD), Some(0xEF)]);
        assert_eq!(text_color_with("#FFFFF", parse_channels_strict), TextColor::White);
        assert_eq!(text_color_with("#FFFFFF", HexParsing::Strict.parser()), TextColor::Black);
    }

    #[test]
    fn test_parsers_differ_on_prefix_digits() {
        // "F" prefix parses to 15 leniently; strictly the whole color is rejected
        assert_eq!(parse_channels_lenient("#FFFFFZ"), [Some(255), Some(255), Some(15)]);
        assert_eq!(text_color_with("#FFFFFZ", HexParsing::Lenient.parser()), TextColor::Black);
        assert_eq!(text_color_with("#FFFFFZ", HexParsing::Strict.parser()), TextColor::White);
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("#123456"), Some((0x12, 0x34, 0x56)));
        assert_eq!(parse_rgb("123456"), None);
        assert_eq!(parse_rgb("#12345"), None);
        assert_eq!(parse_rgb("#12345G"), None);
    }
}
