//! Search bar configuration module
//!
//! Everything a host screen can tune on the search bar except the controlled
//! input text and the callbacks. Every field has a default, so a config file
//! only needs to name what it changes:
//!
//! ```toml
//! placeholder = "Find a fruit"
//! animation_duration_ms = 300
//! clear_on_hide = false
//! background_color = "#202124"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::egui_app::theme::colors;
use crate::search_bar::animation::Easing;
use crate::shared::platform::Platform;

/// Content of an icon button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// A text glyph painted at the icon size
    Glyph(String),
}

impl Icon {
    pub fn glyph(text: impl Into<String>) -> Self {
        Self::Glyph(text.into())
    }
}

/// Keyboard capitalization hint for soft keyboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoCapitalize {
    None,
    #[default]
    Sentences,
    Words,
    Characters,
}

/// Keyboard color scheme hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardAppearance {
    #[default]
    Default,
    Light,
    Dark,
}

/// Search bar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBarConfig {
    pub placeholder: String,
    pub back_button: Option<Icon>,
    pub back_button_accessibility_label: String,
    pub close_button: Option<Icon>,
    pub close_button_accessibility_label: String,
    pub back_close_size: f32,
    pub font_size: f32,
    pub height_adjust: f32,
    pub background_color: String,
    pub icon_color: String,
    pub text_color: String,
    pub selection_color: String,
    pub placeholder_text_color: String,
    pub animate: bool,
    pub animation_duration_ms: u64,
    pub easing: Easing,
    pub show_on_load: bool,
    pub hide_back: bool,
    pub hide_x: bool,
    pub ios_padding: bool,
    pub ios_padding_background_color: String,
    pub ios_hide_shadow: bool,
    pub clear_on_show: bool,
    pub clear_on_hide: bool,
    pub clear_on_blur: bool,
    pub focus_on_layout: bool,
    pub auto_correct: bool,
    pub auto_capitalize: AutoCapitalize,
    pub keyboard_appearance: KeyboardAppearance,
    pub font_family: String,
    pub editable: bool,
    pub platform: Platform,
    /// Cancel outstanding hide completions at the start of every show/hide.
    pub cancel_pending_hide: bool,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            placeholder: "Search".to_string(),
            back_button: Some(Icon::glyph("←")),
            back_button_accessibility_label: "Navigate up".to_string(),
            close_button: Some(Icon::glyph("✕")),
            close_button_accessibility_label: "Clear search text".to_string(),
            back_close_size: 28.0,
            font_size: 20.0,
            height_adjust: 0.0,
            background_color: "white".to_string(),
            icon_color: "gray".to_string(),
            text_color: "gray".to_string(),
            selection_color: "lightskyblue".to_string(),
            placeholder_text_color: "lightgray".to_string(),
            animate: true,
            animation_duration_ms: 200,
            easing: Easing::default(),
            show_on_load: false,
            hide_back: false,
            hide_x: false,
            ios_padding: true,
            ios_padding_background_color: "transparent".to_string(),
            ios_hide_shadow: false,
            clear_on_show: false,
            clear_on_hide: true,
            clear_on_blur: false,
            focus_on_layout: true,
            auto_correct: true,
            auto_capitalize: AutoCapitalize::default(),
            keyboard_appearance: KeyboardAppearance::default(),
            font_family: "System".to_string(),
            editable: true,
            platform: Platform::default(),
            cancel_pending_hide: false,
        }
    }
}

impl SearchBarConfig {
    /// Create a new SearchBarConfigBuilder
    pub fn builder() -> SearchBarConfigBuilder {
        SearchBarConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        tracing::debug!("Loaded search bar config from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let color_fields = [
            ("background_color", &self.background_color),
            ("icon_color", &self.icon_color),
            ("text_color", &self.text_color),
            ("selection_color", &self.selection_color),
            ("placeholder_text_color", &self.placeholder_text_color),
            ("ios_padding_background_color", &self.ios_padding_background_color),
        ];
        for (field, value) in color_fields {
            if colors::parse_color(value).is_none() {
                return Err(ConfigError::invalid_color(field, value.as_str()));
            }
        }

        let positive_sizes = [
            ("back_close_size", self.back_close_size),
            ("font_size", self.font_size),
        ];
        for (field, value) in positive_sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid_value(field, "must be a positive number"));
            }
        }
        if !self.height_adjust.is_finite() {
            return Err(ConfigError::invalid_value("height_adjust", "must be finite"));
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Where the bar rests once a hide animation finishes
    pub fn hidden_offset(&self) -> f32 {
        self.platform.hidden_offset()
    }

    /// Where the bar starts when mounted hidden
    pub fn initial_hidden_offset(&self) -> f32 {
        self.platform.hidden_offset() + self.height_adjust
    }

    pub fn nav_height(&self) -> f32 {
        self.platform.nav_height() + self.height_adjust
    }

    /// Soft keyboard hints for hosts that drive a platform keyboard
    pub fn text_input_traits(&self) -> TextInputTraits {
        TextInputTraits {
            auto_correct: self.auto_correct,
            auto_capitalize: self.auto_capitalize,
            keyboard_appearance: self.keyboard_appearance,
            editable: self.editable,
        }
    }
}

/// Text input hints passed through to the host keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextInputTraits {
    pub auto_correct: bool,
    pub auto_capitalize: AutoCapitalize,
    pub keyboard_appearance: KeyboardAppearance,
    pub editable: bool,
}

/// Builder for SearchBarConfig
#[derive(Debug, Default)]
pub struct SearchBarConfigBuilder {
    config: SearchBarConfig,
}

impl SearchBarConfigBuilder {
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    pub fn back_button(mut self, icon: Option<Icon>) -> Self {
        self.config.back_button = icon;
        self
    }

    pub fn close_button(mut self, icon: Option<Icon>) -> Self {
        self.config.close_button = icon;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.config.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.config.font_family = family.into();
        self
    }

    pub fn height_adjust(mut self, adjust: f32) -> Self {
        self.config.height_adjust = adjust;
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.config.background_color = color.into();
        self
    }

    pub fn icon_color(mut self, color: impl Into<String>) -> Self {
        self.config.icon_color = color.into();
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.config.text_color = color.into();
        self
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.config.animate = animate;
        self
    }

    pub fn animation_duration_ms(mut self, millis: u64) -> Self {
        self.config.animation_duration_ms = millis;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.config.easing = easing;
        self
    }

    pub fn show_on_load(mut self, show: bool) -> Self {
        self.config.show_on_load = show;
        self
    }

    pub fn hide_back(mut self, hide: bool) -> Self {
        self.config.hide_back = hide;
        self
    }

    pub fn hide_x(mut self, hide: bool) -> Self {
        self.config.hide_x = hide;
        self
    }

    pub fn clear_on_show(mut self, clear: bool) -> Self {
        self.config.clear_on_show = clear;
        self
    }

    pub fn clear_on_hide(mut self, clear: bool) -> Self {
        self.config.clear_on_hide = clear;
        self
    }

    pub fn clear_on_blur(mut self, clear: bool) -> Self {
        self.config.clear_on_blur = clear;
        self
    }

    pub fn focus_on_layout(mut self, focus: bool) -> Self {
        self.config.focus_on_layout = focus;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.config.editable = editable;
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.config.platform = platform;
        self
    }

    pub fn cancel_pending_hide(mut self, cancel: bool) -> Self {
        self.config.cancel_pending_hide = cancel;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SearchBarConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("invalid color '{value}' for {field}")]
    InvalidColor { field: &'static str, value: String },
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

impl ConfigError {
    pub fn invalid_color(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
