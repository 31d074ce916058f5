//! Loading search bar configuration from disk

use std::io::Write;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use searchbar::search_bar::animation::Easing;
use searchbar::shared::{ConfigError, Icon, Platform, SearchBarConfig, SearchBarError};
use tempfile::NamedTempFile;

fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_load_toml() {
    let file = write_config(
        ".toml",
        r##"
placeholder = "Find a fruit"
animation_duration_ms = 350
easing = "linear"
clear_on_hide = false
platform = "ios"
height_adjust = 8.0
background_color = "#202124"
close_button = { glyph = "x" }
"##,
    );

    let config = SearchBarConfig::load(file.path()).unwrap();
    assert_eq!(config.placeholder, "Find a fruit");
    assert_eq!(config.animation_duration_ms, 350);
    assert_eq!(config.easing, Easing::Linear);
    assert!(!config.clear_on_hide);
    assert_eq!(config.platform, Platform::Ios);
    assert_eq!(config.close_button, Some(Icon::glyph("x")));
    assert_approx_eq!(config.nav_height(), 60.0);
    assert_approx_eq!(config.initial_hidden_offset(), -72.0);
    assert_approx_eq!(config.hidden_offset(), -80.0);
    // untouched fields keep their defaults
    assert_eq!(config.back_button_accessibility_label, "Navigate up");
    assert!(config.focus_on_layout);
}

#[test]
fn test_load_json() {
    let file = write_config(
        ".json",
        r#"{ "placeholder": "Buscar", "hide_back": true, "platform": "android", "back_button": null }"#,
    );

    let config = SearchBarConfig::load(file.path()).unwrap();
    assert_eq!(config.placeholder, "Buscar");
    assert!(config.hide_back);
    assert_eq!(config.back_button, None);
    assert_approx_eq!(config.nav_height(), 62.0);
}

#[test]
fn test_unknown_extension_rejected() {
    let file = write_config(".yaml", "placeholder: Search\n");
    let err = SearchBarConfig::load(file.path()).unwrap_err();
    assert_matches!(err, ConfigError::UnsupportedFormat(path) if path == file.path());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = SearchBarConfig::load(&path).unwrap_err();
    assert_matches!(err, ConfigError::Io { path: reported, .. } if reported == path);
}

#[test]
fn test_bad_color_in_file_rejected() {
    let file = write_config(".toml", "icon_color = \"not-a-color\"\n");
    let err = SearchBarConfig::load(file.path()).unwrap_err();
    assert_matches!(
        err,
        ConfigError::InvalidColor { field: "icon_color", ref value } if value == "not-a-color"
    );
    assert_contains!(err.to_string(), "icon_color");
}

#[test]
fn test_malformed_toml() {
    let file = write_config(".toml", "placeholder = \n");
    assert_matches!(SearchBarConfig::load(file.path()), Err(ConfigError::Toml(_)));
}

#[test]
fn test_malformed_json() {
    let file = write_config(".json", "{ \"placeholder\": ");
    assert_matches!(SearchBarConfig::load(file.path()), Err(ConfigError::Json(_)));
}

#[test]
fn test_non_positive_font_size_rejected() {
    let err = SearchBarConfig::builder().font_size(0.0).build().unwrap_err();
    assert_matches!(err, ConfigError::InvalidValue { field: "font_size", .. });
}

#[test]
fn test_config_error_converts_to_search_bar_error() {
    fn load(path: &std::path::Path) -> Result<SearchBarConfig, SearchBarError> {
        Ok(SearchBarConfig::load(path)?)
    }

    let file = write_config(".toml", "text_color = \"#12\"\n");
    let err = load(file.path()).unwrap_err();
    assert_matches!(err, SearchBarError::Config(ConfigError::InvalidColor { .. }));
    assert_contains!(err.to_string(), "Configuration error");
}

#[test]
fn test_toml_round_trip_preserves_defaults() {
    let config = SearchBarConfig::default();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(SearchBarConfig::from_toml_str(&text).unwrap(), config);
}
