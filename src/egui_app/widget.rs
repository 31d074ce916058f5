//! Search Bar Widget
//!
//! Draws a [`SearchBar`] into an egui frame. The bar floats in a foreground
//! area pinned to the top-left of the `Ui` it is drawn from and slides by its
//! animated offset.

use eframe::egui::{self, Align, FontId, Layout, RichText, Sense};

use crate::egui_app::theme::styles;
use crate::search_bar::scheduler::Scheduler;
use crate::search_bar::SearchBar;
use crate::shared::config::Icon;
use crate::shared::platform::IOS_STATUS_PADDING;

/// Left margin of the text input when there is no back button
const NO_BACK_MARGIN: f32 = 30.0;

/// What happened to the bar during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBarResponse {
    pub changed: bool,
    pub submitted: bool,
    pub focused: bool,
    pub blurred: bool,
    pub back_pressed: bool,
    pub close_pressed: bool,
    /// Hide completions that ran this frame
    pub hides_completed: usize,
}

impl<S: Scheduler> SearchBar<S> {
    /// Draw the bar for this frame. `input` is the host's current search text.
    pub fn ui(&mut self, ui: &mut egui::Ui, input: &str) -> SearchBarResponse {
        let mut response = SearchBarResponse {
            hides_completed: self.poll(),
            ..Default::default()
        };

        let visible = self.is_visible();
        if visible && !self.was_visible {
            self.focus_pending = self.config().focus_on_layout;
        }
        self.was_visible = visible;

        let origin = ui.max_rect().left_top();
        let width = ui.available_width();
        let offset = self.offset();

        egui::Area::new(self.id)
            .order(egui::Order::Foreground)
            .constrain(false)
            .fixed_pos(origin + egui::vec2(0.0, offset))
            .show(ui.ctx(), |ui| {
                if !visible {
                    return;
                }
                let frame = styles::bar_frame(&self.theme, self.config().ios_hide_shadow);
                frame.show(ui, |ui| {
                    ui.set_width(width);
                    ui.spacing_mut().item_spacing.y = 0.0;
                    self.status_padding(ui, width);
                    self.nav_row(ui, width, input, &mut response);
                });
            });

        if self.controller().is_busy() {
            ui.ctx().request_repaint();
        }
        response
    }

    fn status_padding(&self, ui: &mut egui::Ui, width: f32) {
        if !(self.config().platform.is_ios() && self.config().ios_padding) {
            return;
        }
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, IOS_STATUS_PADDING), Sense::hover());
        ui.painter().rect_filled(rect, 0.0, self.theme.ios_padding);
    }

    fn nav_row(&mut self, ui: &mut egui::Ui, width: f32, input: &str, response: &mut SearchBarResponse) {
        let height = self.config().nav_height().max(0.0);
        let row = ui.allocate_ui_with_layout(
            egui::vec2(width, height),
            Layout::left_to_right(Align::Center),
            |ui| {
                ui.set_min_size(egui::vec2(width, height));
                let icon_size = self.config().back_close_size;

                if self.back_visible() {
                    ui.add_space(icon_size / 2.0);
                    if self.icon_button(ui, IconSlot::Back, true).clicked() {
                        tracing::debug!("Search bar back pressed");
                        response.back_pressed = true;
                        self.press_back();
                    }
                    ui.add_space(icon_size / 2.0);
                } else {
                    ui.add_space(NO_BACK_MARGIN);
                }

                let close_reserve = if self.close_visible() { icon_size * 2.0 } else { 0.0 };
                let input_width = (ui.available_width() - close_reserve).max(0.0);
                self.text_input(ui, input, input_width, response);

                if self.close_visible() {
                    ui.add_space(icon_size / 2.0);
                    let enabled = self.close_enabled(input);
                    if self.icon_button(ui, IconSlot::Close, enabled).clicked() {
                        tracing::debug!("Search bar clear pressed");
                        response.close_pressed = self.press_close(input);
                    }
                }
            },
        );

        if !self.config().platform.is_ios() {
            let rect = row.response.rect;
            ui.painter()
                .hline(rect.x_range(), rect.bottom(), styles::divider_stroke());
        }
    }

    fn text_input(&mut self, ui: &mut egui::Ui, input: &str, width: f32, response: &mut SearchBarResponse) {
        let config = self.config();
        let platform = config.platform;
        let top_margin = platform.input_top_margin(config.height_adjust);
        let font = FontId::new(config.font_size, self.theme.font_family.clone());
        let placeholder = RichText::new(config.placeholder.as_str())
            .color(self.theme.placeholder)
            .font(font.clone());

        // The host owns the text; edits go out through the change-text path
        // and come back in next frame's `input`.
        let mut buffer = input.to_owned();
        let mut edit = egui::TextEdit::singleline(&mut buffer)
            .id(self.id.with("input"))
            .hint_text(placeholder)
            .font(font)
            .text_color(self.theme.text)
            .desired_width(width)
            .frame(false)
            .interactive(config.editable);
        if let Some(fill) = styles::input_background(config.keyboard_appearance) {
            edit = edit.background_color(fill);
        }

        let selection = self.theme.selection;
        let edit_response = ui
            .scope(|ui| {
                ui.visuals_mut().selection.bg_fill = selection;
                ui.visuals_mut().text_cursor.stroke.color = selection;
                ui.vertical(|ui| {
                    ui.add_space(top_margin);
                    ui.add_sized(egui::vec2(width, platform.input_height()), edit)
                })
                .inner
            })
            .inner;

        // A new area spends its first frame measuring itself with input off.
        if self.focus_pending && !ui.is_sizing_pass() {
            edit_response.request_focus();
            self.focus_pending = false;
        }

        if edit_response.changed() && buffer != input {
            response.changed = true;
            self.change_text(&buffer);
        }
        if edit_response.gained_focus() {
            response.focused = true;
            self.focus();
        }
        if edit_response.lost_focus() {
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                tracing::debug!("Search bar submitted");
                response.submitted = true;
                self.submit();
            }
            response.blurred = true;
            self.blur();
        }
    }

    fn icon_button(&self, ui: &mut egui::Ui, slot: IconSlot, enabled: bool) -> egui::Response {
        let config = self.config();
        let (icon, label) = match slot {
            IconSlot::Back => (&config.back_button, &config.back_button_accessibility_label),
            IconSlot::Close => (&config.close_button, &config.close_button_accessibility_label),
        };
        let Some(Icon::Glyph(glyph)) = icon else {
            return ui.allocate_response(egui::Vec2::ZERO, Sense::hover());
        };
        let button = styles::icon_button(glyph, config.back_close_size, self.theme.icon);
        let response = ui.add_enabled(enabled, button);
        let label = label.clone();
        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, enabled, &label));
        response
    }
}

#[derive(Debug, Clone, Copy)]
enum IconSlot {
    Back,
    Close,
}
