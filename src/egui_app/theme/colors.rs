//! Color Constants and Color Names
//!
//! Config files name colors the way a stylesheet does: a CSS color keyword
//! (`"white"`, `"lightskyblue"`) or a hex literal (`"#1e88e5"`,
//! `"#1e88e5cc"`, `"#fff"`). This module resolves those names to egui colors.

use eframe::egui::Color32;

/// Default bar background - White
pub const BAR_BG: Color32 = Color32::WHITE;

/// Default icon and text color - Gray
pub const GRAY: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);

/// Default text selection - Light sky blue
pub const SELECTION: Color32 = Color32::from_rgb(0x87, 0xCE, 0xFA);

/// Default placeholder and Android divider - Light gray
pub const LIGHT_GRAY: Color32 = Color32::from_rgb(0xD3, 0xD3, 0xD3);

/// Drop shadow under the bar, 0.7 opacity
pub const SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 178);

/// Keyboard-appearance tint for dark text input
pub const INPUT_DARK_BG: Color32 = Color32::from_rgb(0x30, 0x30, 0x30);

/// Keyboard-appearance tint for light text input
pub const INPUT_LIGHT_BG: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);

const NAMED: &[(&str, Color32)] = &[
    ("transparent", Color32::TRANSPARENT),
    ("black", Color32::BLACK),
    ("white", Color32::WHITE),
    ("gray", GRAY),
    ("grey", GRAY),
    ("darkgray", Color32::from_rgb(0xA9, 0xA9, 0xA9)),
    ("darkgrey", Color32::from_rgb(0xA9, 0xA9, 0xA9)),
    ("lightgray", LIGHT_GRAY),
    ("lightgrey", LIGHT_GRAY),
    ("dimgray", Color32::from_rgb(0x69, 0x69, 0x69)),
    ("silver", Color32::from_rgb(0xC0, 0xC0, 0xC0)),
    ("whitesmoke", Color32::from_rgb(0xF5, 0xF5, 0xF5)),
    ("red", Color32::from_rgb(0xFF, 0x00, 0x00)),
    ("green", Color32::from_rgb(0x00, 0x80, 0x00)),
    ("blue", Color32::from_rgb(0x00, 0x00, 0xFF)),
    ("yellow", Color32::from_rgb(0xFF, 0xFF, 0x00)),
    ("orange", Color32::from_rgb(0xFF, 0xA5, 0x00)),
    ("purple", Color32::from_rgb(0x80, 0x00, 0x80)),
    ("navy", Color32::from_rgb(0x00, 0x00, 0x80)),
    ("teal", Color32::from_rgb(0x00, 0x80, 0x80)),
    ("skyblue", Color32::from_rgb(0x87, 0xCE, 0xEB)),
    ("lightskyblue", SELECTION),
    ("lightblue", Color32::from_rgb(0xAD, 0xD8, 0xE6)),
    ("steelblue", Color32::from_rgb(0x46, 0x82, 0xB4)),
    ("dodgerblue", Color32::from_rgb(0x1E, 0x90, 0xFF)),
    ("tomato", Color32::from_rgb(0xFF, 0x63, 0x47)),
];

/// Resolve a color keyword or hex literal. Keywords are case-insensitive.
pub fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, color)| *color)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let short = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    match hex.len() {
        3 => Some(Color32::from_rgb(short(0)?, short(1)?, short(2)?)),
        6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}
