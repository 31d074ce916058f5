//! # Visibility Controller
//!
//! Drives the bar between shown and hidden. `show()` flips visibility at once
//! and lets the offset catch up; `hide()` lets the offset leave first and
//! flips visibility once the animation's duration has passed.
//!
//! Every animated `hide()` arms its own completion timer. By default a later
//! `show()` or `hide()` leaves earlier timers armed, so each of them still
//! hides the bar when it fires. Setting `cancel_pending_hide` disarms them
//! instead.

use std::time::{Duration, Instant};

use crate::search_bar::animation::Easing;
use crate::search_bar::delegate::InputDelegate;
use crate::search_bar::scheduler::{Scheduler, TimerToken};
use crate::search_bar::state::{HideCompletion, Motion, Phase, SearchBarState};
use crate::shared::config::SearchBarConfig;

/// The slice of the config the controller reads on every transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSettings {
    pub animate: bool,
    pub duration: Duration,
    pub easing: Easing,
    pub hidden_offset: f32,
    pub clear_on_show: bool,
    pub clear_on_hide: bool,
    pub cancel_pending_hide: bool,
}

impl TransitionSettings {
    pub fn from_config(config: &SearchBarConfig) -> Self {
        Self {
            animate: config.animate,
            duration: config.animation_duration(),
            easing: config.easing,
            hidden_offset: config.hidden_offset(),
            clear_on_show: config.clear_on_show,
            clear_on_hide: config.clear_on_hide,
            cancel_pending_hide: config.cancel_pending_hide,
        }
    }

    fn motion(&self) -> Motion {
        Motion::from_config(self.animate, self.duration, self.easing)
    }
}

#[derive(Debug)]
pub struct VisibilityController<S: Scheduler> {
    state: SearchBarState,
    scheduler: S,
    pending: Vec<TimerToken>,
    settings: TransitionSettings,
}

impl<S: Scheduler> VisibilityController<S> {
    pub fn new(config: &SearchBarConfig, scheduler: S) -> Self {
        Self {
            state: SearchBarState::new(config.show_on_load, config.initial_hidden_offset()),
            scheduler,
            pending: Vec::new(),
            settings: TransitionSettings::from_config(config),
        }
    }

    /// Pick up a changed config. The current position and timers are kept.
    pub fn update_settings(&mut self, config: &SearchBarConfig) {
        self.settings = TransitionSettings::from_config(config);
    }

    pub fn settings(&self) -> &TransitionSettings {
        &self.settings
    }

    pub fn show(&mut self, delegate: &mut InputDelegate) {
        if self.settings.cancel_pending_hide {
            self.cancel_pending();
        }
        if self.settings.clear_on_show {
            delegate.clear_input();
        }
        let now = self.scheduler.now();
        self.state.apply_show(self.settings.motion(), now);
        tracing::debug!(animate = self.settings.animate, "Search bar shown");
    }

    pub fn hide(&mut self, delegate: &mut InputDelegate) {
        delegate.notify_hide();
        if self.settings.cancel_pending_hide {
            self.cancel_pending();
        }
        let now = self.scheduler.now();
        match self
            .state
            .apply_hide(self.settings.hidden_offset, self.settings.motion(), now)
        {
            HideCompletion::Immediate => self.complete_hide(delegate),
            HideCompletion::Deferred(delay) => {
                let token = self.scheduler.schedule(delay);
                self.pending.push(token);
                tracing::debug!(
                    timer = token.id(),
                    delay_ms = delay.as_millis() as u64,
                    pending = self.pending.len(),
                    "Search bar hide completion scheduled"
                );
            }
        }
    }

    /// Run the completion for every timer that has come due. Returns how many
    /// completions ran.
    pub fn poll(&mut self, delegate: &mut InputDelegate) -> usize {
        let mut completed = 0;
        for token in self.scheduler.take_due() {
            let Some(index) = self.pending.iter().position(|armed| *armed == token) else {
                continue;
            };
            self.pending.swap_remove(index);
            tracing::debug!(timer = token.id(), "Search bar hide completion fired");
            self.complete_hide(delegate);
            completed += 1;
        }
        let now = self.scheduler.now();
        self.state.settle(now);
        completed
    }

    fn complete_hide(&mut self, delegate: &mut InputDelegate) {
        self.state.apply_hide_complete();
        if self.settings.clear_on_hide {
            delegate.clear_input();
        }
        tracing::debug!("Search bar hidden");
    }

    fn cancel_pending(&mut self) {
        for token in self.pending.drain(..) {
            if self.scheduler.cancel(token) {
                tracing::debug!(timer = token.id(), "Search bar hide completion cancelled");
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn state(&self) -> &SearchBarState {
        &self.state
    }

    pub fn now(&self) -> Instant {
        self.scheduler.now()
    }

    /// Current vertical offset
    pub fn offset(&self) -> f32 {
        self.state.offset_at(self.scheduler.now())
    }

    pub fn phase(&self) -> Phase {
        self.state.phase(self.scheduler.now())
    }

    /// Hide completions still waiting on their timer
    pub fn pending_completions(&self) -> usize {
        self.pending.len()
    }

    /// True while something will change without further input
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty() || self.state.offset().is_animating(self.scheduler.now())
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: Scheduler> Drop for VisibilityController<S> {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(pending = self.pending.len(), "Dropping search bar with armed timers");
        }
        self.cancel_pending();
    }
}
