//! Search bar visibility state and its transitions.
//!
//! The transitions only touch the state itself. Callbacks, timers and text
//! clearing are the controller's business; the transitions tell it what to
//! arm through their return values.

use std::time::{Duration, Instant};

use crate::search_bar::animation::{AnimatedScalar, Easing};

/// Where the bar is in its show/hide cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Showing,
    Shown,
    Hiding,
}

/// How a transition moves the offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Jump,
    Animate { duration: Duration, easing: Easing },
}

impl Motion {
    pub fn from_config(animate: bool, duration: Duration, easing: Easing) -> Self {
        if animate {
            Motion::Animate { duration, easing }
        } else {
            Motion::Jump
        }
    }
}

/// What the caller owes after `apply_hide`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideCompletion {
    /// Run `apply_hide_complete` now
    Immediate,
    /// Run `apply_hide_complete` once this much time has passed
    Deferred(Duration),
}

#[derive(Debug, Clone, Copy)]
pub struct SearchBarState {
    visible: bool,
    offset: AnimatedScalar,
}

impl SearchBarState {
    /// Mount-time state. A bar mounted hidden rests at `initial_hidden_offset`.
    pub fn new(show_on_load: bool, initial_hidden_offset: f32) -> Self {
        let offset = if show_on_load { 0.0 } else { initial_hidden_offset };
        Self {
            visible: show_on_load,
            offset: AnimatedScalar::new(offset),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn offset(&self) -> &AnimatedScalar {
        &self.offset
    }

    pub fn offset_at(&self, now: Instant) -> f32 {
        self.offset.value_at(now)
    }

    pub fn phase(&self, now: Instant) -> Phase {
        match (self.visible, self.offset.target() == 0.0) {
            (false, _) => Phase::Hidden,
            (true, false) => Phase::Hiding,
            (true, true) if self.offset.is_animating(now) => Phase::Showing,
            (true, true) => Phase::Shown,
        }
    }

    /// Mark visible and send the offset home.
    pub fn apply_show(&mut self, motion: Motion, now: Instant) {
        self.visible = true;
        match motion {
            Motion::Jump => self.offset.set(0.0),
            Motion::Animate { duration, easing } => {
                self.offset.animate_to(0.0, duration, easing, now)
            }
        }
    }

    /// Send the offset to `hidden_offset`. Visibility is left alone until
    /// `apply_hide_complete`.
    pub fn apply_hide(&mut self, hidden_offset: f32, motion: Motion, now: Instant) -> HideCompletion {
        match motion {
            Motion::Jump => {
                self.offset.set(hidden_offset);
                HideCompletion::Immediate
            }
            Motion::Animate { duration, easing } => {
                self.offset.animate_to(hidden_offset, duration, easing, now);
                HideCompletion::Deferred(duration)
            }
        }
    }

    pub fn apply_hide_complete(&mut self) {
        self.visible = false;
    }

    /// Forget a finished tween
    pub fn settle(&mut self, now: Instant) {
        self.offset.settle(now);
    }
}
