//! Search Bar Component
//!
//! An animated search bar that slides down from the top of its host. The host
//! owns the search text: it passes the current text in every frame and
//! receives every change through `handle_change_text`.
//!
//! # Architecture
//!
//! - **`state`** - visibility flag, animated offset, transitions
//! - **`animation`** - clock-driven tween used for the offset
//! - **`scheduler`** - one-shot timers for deferred hide completion
//! - **`controller`** - show/hide sequencing on top of the state
//! - **`delegate`** - routing of input events to host callbacks
//!
//! Rendering lives in [`crate::egui_app::widget`].
//!
//! # Example
//!
//! ```rust
//! use searchbar::search_bar::{Callbacks, SearchBar};
//! use searchbar::shared::SearchBarConfig;
//!
//! let config = SearchBarConfig::builder().animate(false).build().unwrap();
//! let mut bar = SearchBar::new(config, Callbacks::new(|text| println!("query: {text}")));
//! bar.show();
//! assert!(bar.is_visible());
//! bar.hide();
//! assert!(!bar.is_visible());
//! ```

pub mod animation;
pub mod controller;
pub mod delegate;
pub mod scheduler;
pub mod state;

pub use controller::{TransitionSettings, VisibilityController};
pub use delegate::{Callbacks, InputDelegate};
pub use scheduler::{FrameScheduler, ManualClock, ManualScheduler, Scheduler, TimerToken, TokioScheduler};
pub use state::{Phase, SearchBarState};

use crate::egui_app::theme::BarTheme;
use crate::shared::config::{SearchBarConfig, TextInputTraits};

/// The search bar: config, visibility controller and input delegate
#[derive(Debug)]
pub struct SearchBar<S: Scheduler = FrameScheduler> {
    config: SearchBarConfig,
    controller: VisibilityController<S>,
    delegate: InputDelegate,
    pub(crate) theme: BarTheme,
    pub(crate) id: egui::Id,
    pub(crate) focus_pending: bool,
    pub(crate) was_visible: bool,
}

impl SearchBar<FrameScheduler> {
    /// A bar driven by the wall clock
    pub fn new(config: SearchBarConfig, callbacks: Callbacks) -> Self {
        Self::with_scheduler(config, callbacks, FrameScheduler::default())
    }
}

impl<S: Scheduler> SearchBar<S> {
    pub fn with_scheduler(config: SearchBarConfig, callbacks: Callbacks, scheduler: S) -> Self {
        let controller = VisibilityController::new(&config, scheduler);
        let delegate = InputDelegate::new(callbacks, config.clear_on_blur);
        let theme = BarTheme::resolve(&config);
        Self {
            config,
            controller,
            delegate,
            theme,
            id: egui::Id::new("searchbar"),
            focus_pending: false,
            was_visible: false,
        }
    }

    /// Distinguish this bar from others in the same egui context
    pub fn with_id(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id = egui::Id::new(id_salt);
        self
    }

    pub fn config(&self) -> &SearchBarConfig {
        &self.config
    }

    /// Swap in a new config. Visibility, position and armed timers carry over.
    pub fn set_config(&mut self, config: SearchBarConfig) {
        self.controller.update_settings(&config);
        self.delegate.set_clear_on_blur(config.clear_on_blur);
        self.theme = BarTheme::resolve(&config);
        self.config = config;
    }

    pub fn show(&mut self) {
        self.controller.show(&mut self.delegate);
    }

    pub fn hide(&mut self) {
        self.controller.hide(&mut self.delegate);
    }

    /// Run due hide completions. `ui` calls this every frame; hosts that do
    /// not render every frame call it themselves.
    pub fn poll(&mut self) -> usize {
        self.controller.poll(&mut self.delegate)
    }

    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    pub fn offset(&self) -> f32 {
        self.controller.offset()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn theme(&self) -> &BarTheme {
        &self.theme
    }

    pub fn controller(&self) -> &VisibilityController<S> {
        &self.controller
    }

    pub fn text_input_traits(&self) -> TextInputTraits {
        self.config.text_input_traits()
    }

    /// Whether the back button is drawn
    pub fn back_visible(&self) -> bool {
        !self.config.hide_back && self.config.back_button.is_some()
    }

    /// Whether the clear button is drawn
    pub fn close_visible(&self) -> bool {
        !self.config.hide_x && self.config.close_button.is_some()
    }

    /// Whether the clear button reacts to presses for the given input
    pub fn close_enabled(&self, input: &str) -> bool {
        self.close_visible() && !input.is_empty()
    }

    /// Back-button press: the host's `on_back`, or `hide()` without one
    pub fn press_back(&mut self) {
        if !self.back_visible() {
            return;
        }
        if !self.delegate.press_back() {
            self.hide();
        }
    }

    /// Clear-button press. Ignored while the button is disabled.
    pub fn press_close(&mut self, input: &str) -> bool {
        if !self.close_enabled(input) {
            return false;
        }
        self.delegate.press_close();
        true
    }

    pub fn change_text(&mut self, text: &str) {
        self.delegate.change_text(text);
    }

    pub fn submit(&mut self) {
        self.delegate.submit();
    }

    pub fn focus(&mut self) {
        self.delegate.focus();
    }

    pub fn blur(&mut self) {
        self.delegate.blur();
    }
}
