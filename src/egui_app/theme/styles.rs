//! Theme Styling Functions
//!
//! Frame and widget builders for the search bar.

use eframe::egui::{self, Color32, RichText, Stroke, Vec2};

use super::colors;
use super::BarTheme;

/// Frame around the whole bar
pub fn bar_frame(theme: &BarTheme, hide_shadow: bool) -> egui::Frame {
    let shadow = if hide_shadow {
        egui::epaint::Shadow::NONE
    } else {
        egui::epaint::Shadow {
            offset: [0, 2],
            blur: 5,
            spread: 0,
            color: colors::SHADOW,
        }
    };
    egui::Frame::new()
        .fill(theme.background)
        .inner_margin(egui::Margin::same(0))
        .shadow(shadow)
}

/// Frameless square button showing an icon glyph
pub fn icon_button(glyph: &str, size: f32, color: Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(glyph.to_owned()).size(size * 0.8).color(color))
        .frame(false)
        .min_size(Vec2::splat(size))
}

/// Hairline under the navigation row
pub fn divider_stroke() -> Stroke {
    Stroke::new(1.0, colors::LIGHT_GRAY)
}

/// Text-edit background implied by the keyboard appearance hint
pub fn input_background(appearance: crate::shared::KeyboardAppearance) -> Option<Color32> {
    use crate::shared::KeyboardAppearance;
    match appearance {
        KeyboardAppearance::Default => None,
        KeyboardAppearance::Light => Some(colors::INPUT_LIGHT_BG),
        KeyboardAppearance::Dark => Some(colors::INPUT_DARK_BG),
    }
}
