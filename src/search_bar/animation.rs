//! # Animated Scalar
//!
//! A single `f32` that tweens toward a target over a fixed duration. The value
//! is a pure function of the clock reading handed in, so a fake clock drives
//! it exactly like a real one.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use searchbar::search_bar::animation::{AnimatedScalar, Easing};
//!
//! let start = Instant::now();
//! let mut offset = AnimatedScalar::new(-60.0);
//! offset.animate_to(0.0, Duration::from_millis(200), Easing::Linear, start);
//! assert_eq!(offset.value_at(start + Duration::from_millis(100)), -30.0);
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Timing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic ease in, ease out
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

/// A scalar that is either at rest or tweening toward its target
#[derive(Debug, Clone, Copy)]
pub struct AnimatedScalar {
    target: f32,
    tween: Option<Tween>,
}

impl AnimatedScalar {
    /// A value at rest
    pub fn new(value: f32) -> Self {
        Self {
            target: value,
            tween: None,
        }
    }

    /// Where the value is heading (or resting)
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Jump to `value`, dropping any running tween
    pub fn set(&mut self, value: f32) {
        self.target = value;
        self.tween = None;
    }

    /// Start tweening toward `to`. A running tween is replaced and the new one
    /// starts from wherever the value is at `now`.
    pub fn animate_to(&mut self, to: f32, duration: Duration, easing: Easing, now: Instant) {
        if duration.is_zero() {
            self.set(to);
            return;
        }
        let from = self.value_at(now);
        self.target = to;
        self.tween = Some(Tween {
            from,
            start: now,
            duration,
            easing,
        });
    }

    /// Value at the given clock reading
    pub fn value_at(&self, now: Instant) -> f32 {
        match self.tween {
            None => self.target,
            Some(tween) => {
                let elapsed = now.saturating_duration_since(tween.start);
                if elapsed >= tween.duration {
                    return self.target;
                }
                let t = elapsed.as_secs_f32() / tween.duration.as_secs_f32();
                let eased = tween.easing.apply(t);
                tween.from + (self.target - tween.from) * eased
            }
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.tween
            .map(|tween| now.saturating_duration_since(tween.start) < tween.duration)
            .unwrap_or(false)
    }

    /// Drop a tween that has run its course
    pub fn settle(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.tween = None;
        }
    }
}
