//! Theme Module
//!
//! Turns the color and font names of a [`SearchBarConfig`] into egui values.
//!
//! # Usage
//!
//! ```rust
//! use searchbar::egui_app::theme::BarTheme;
//! use searchbar::shared::SearchBarConfig;
//!
//! let theme = BarTheme::resolve(&SearchBarConfig::default());
//! assert_eq!(theme.background, eframe::egui::Color32::WHITE);
//! ```

pub mod colors;
pub mod styles;

use eframe::egui::{Color32, FontFamily};

use crate::shared::SearchBarConfig;

/// Resolved colors and font for one bar
#[derive(Debug, Clone, PartialEq)]
pub struct BarTheme {
    pub background: Color32,
    pub icon: Color32,
    pub text: Color32,
    pub selection: Color32,
    pub placeholder: Color32,
    pub ios_padding: Color32,
    pub font_family: FontFamily,
}

impl BarTheme {
    /// Resolve every name in the config. Names that do not parse fall back to
    /// the default color; a validated config never hits the fallback.
    pub fn resolve(config: &SearchBarConfig) -> Self {
        Self {
            background: color_or(&config.background_color, colors::BAR_BG, "background_color"),
            icon: color_or(&config.icon_color, colors::GRAY, "icon_color"),
            text: color_or(&config.text_color, colors::GRAY, "text_color"),
            selection: color_or(&config.selection_color, colors::SELECTION, "selection_color"),
            placeholder: color_or(
                &config.placeholder_text_color,
                colors::LIGHT_GRAY,
                "placeholder_text_color",
            ),
            ios_padding: color_or(
                &config.ios_padding_background_color,
                Color32::TRANSPARENT,
                "ios_padding_background_color",
            ),
            font_family: font_family(&config.font_family),
        }
    }
}

fn color_or(value: &str, fallback: Color32, field: &str) -> Color32 {
    colors::parse_color(value).unwrap_or_else(|| {
        tracing::warn!("Unknown color '{}' for {}, using default", value, field);
        fallback
    })
}

/// Map a font family name onto the families every egui context has.
pub fn font_family(name: &str) -> FontFamily {
    match name.to_ascii_lowercase().as_str() {
        "system" | "proportional" | "sans-serif" | "" => FontFamily::Proportional,
        "monospace" | "mono" => FontFamily::Monospace,
        other => {
            tracing::warn!("Font family '{}' is not built in, using proportional", other);
            FontFamily::Proportional
        }
    }
}
