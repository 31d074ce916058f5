//! Input routing: change text, clear, back, submit, focus and blur

use pretty_assertions::assert_eq;
use searchbar::egui_app::SearchBarResponse;
use searchbar::search_bar::{ManualScheduler, SearchBar};
use searchbar::shared::{AutoCapitalize, KeyboardAppearance, SearchBarConfig};

use crate::common::{manual_bar, Call};

fn shown() -> SearchBarConfig {
    SearchBarConfig::builder()
        .animate(false)
        .show_on_load(true)
        .build()
        .unwrap()
}

#[test]
fn test_change_text_is_forwarded_verbatim() {
    let (_clock, recorder, mut bar) = manual_bar(shown());
    bar.change_text("ki");
    bar.change_text("kiw");
    bar.change_text("  Kiwi ");
    assert_eq!(
        recorder.calls(),
        vec![
            Call::Text("ki".into()),
            Call::Text("kiw".into()),
            Call::Text("  Kiwi ".into()),
        ]
    );
}

#[test]
fn test_close_disabled_for_empty_input() {
    let (_clock, recorder, mut bar) = manual_bar(shown());
    assert!(bar.close_visible());
    assert!(!bar.close_enabled(""));
    assert!(!bar.press_close(""));
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_close_clears_then_notifies() {
    let (_clock, recorder, mut bar) = manual_bar(shown());
    assert!(bar.close_enabled("kiwi"));
    assert!(bar.press_close("kiwi"));
    assert_eq!(recorder.calls(), vec![Call::cleared(), Call::X]);
}

#[test]
fn test_hide_x_makes_close_inert() {
    let config = SearchBarConfig::builder()
        .animate(false)
        .show_on_load(true)
        .hide_x(true)
        .build()
        .unwrap();
    let (_clock, recorder, mut bar) = manual_bar(config);
    assert!(!bar.close_visible());
    assert!(!bar.press_close("kiwi"));
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_missing_close_icon_makes_close_inert() {
    let config = SearchBarConfig::builder()
        .animate(false)
        .close_button(None)
        .build()
        .unwrap();
    let (_clock, recorder, mut bar) = manual_bar(config);
    assert!(!bar.close_visible());
    assert!(!bar.press_close("kiwi"));
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_hide_back_makes_back_inert() {
    let config = SearchBarConfig::builder()
        .animate(false)
        .show_on_load(true)
        .hide_back(true)
        .build()
        .unwrap();
    let (_clock, recorder, mut bar) = manual_bar(config);
    assert!(!bar.back_visible());
    bar.press_back();
    assert!(bar.is_visible());
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_submit_and_focus_are_forwarded() {
    let (_clock, recorder, mut bar) = manual_bar(shown());
    bar.focus();
    bar.submit();
    bar.blur();
    assert_eq!(recorder.calls(), vec![Call::Focus, Call::Submit, Call::Blur]);
}

#[test]
fn test_clear_on_blur_clears_after_notifying() {
    let config = SearchBarConfig::builder()
        .animate(false)
        .clear_on_blur(true)
        .build()
        .unwrap();
    let (_clock, recorder, mut bar) = manual_bar(config);
    bar.blur();
    assert_eq!(recorder.calls(), vec![Call::Blur, Call::cleared()]);
}

#[test]
fn test_set_config_updates_clear_on_blur() {
    let (_clock, recorder, mut bar) = manual_bar(shown());
    bar.blur();
    assert_eq!(recorder.calls(), vec![Call::Blur]);
    recorder.reset();

    let mut config = shown();
    config.clear_on_blur = true;
    bar.set_config(config);
    bar.blur();
    assert_eq!(recorder.calls(), vec![Call::Blur, Call::cleared()]);
}

#[test]
fn test_text_input_traits_follow_config() {
    let mut config = shown();
    config.auto_correct = false;
    config.auto_capitalize = AutoCapitalize::None;
    config.keyboard_appearance = KeyboardAppearance::Dark;
    config.editable = false;
    let (_clock, _recorder, bar) = manual_bar(config);

    let traits = bar.text_input_traits();
    assert!(!traits.auto_correct);
    assert_eq!(traits.auto_capitalize, AutoCapitalize::None);
    assert_eq!(traits.keyboard_appearance, KeyboardAppearance::Dark);
    assert!(!traits.editable);
}

mod rendered {
    use super::*;
    use pretty_assertions::assert_eq;
    use eframe::egui;

    fn frame(
        ctx: &egui::Context,
        bar: &mut SearchBar<ManualScheduler>,
        input: &str,
        events: Vec<egui::Event>,
    ) -> SearchBarResponse {
        let raw = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 600.0))),
            events,
            ..Default::default()
        };
        let mut response = SearchBarResponse::default();
        let _ = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = bar.ui(ui, input);
            });
        });
        response
    }

    fn focused_bar() -> (egui::Context, crate::common::Recorder, SearchBar<ManualScheduler>) {
        let ctx = egui::Context::default();
        let (_clock, recorder, mut bar) = manual_bar(shown());
        for _ in 0..3 {
            frame(&ctx, &mut bar, "", Vec::new());
        }
        (ctx, recorder, bar)
    }

    #[test]
    fn test_focus_on_layout_notifies_host() {
        let (_ctx, recorder, _bar) = focused_bar();
        assert_eq!(recorder.calls(), vec![Call::Focus]);
    }

    #[test]
    fn test_typing_reports_new_text() {
        let (ctx, recorder, mut bar) = focused_bar();
        recorder.reset();

        let response = frame(&ctx, &mut bar, "", vec![egui::Event::Text("k".into())]);
        assert!(response.changed);
        assert_eq!(recorder.calls(), vec![Call::Text("k".into())]);
    }

    #[test]
    fn test_enter_submits_and_blurs() {
        let (ctx, recorder, mut bar) = focused_bar();
        recorder.reset();

        let enter = egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        let response = frame(&ctx, &mut bar, "kiwi", vec![enter]);
        assert!(response.submitted);
        assert!(response.blurred);
        assert_eq!(recorder.calls(), vec![Call::Submit, Call::Blur]);
    }
}
