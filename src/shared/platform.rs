//! Platform Metrics
//!
//! The search bar mimics the native navigation bar of the platform it is
//! configured for. The platform decides where the bar rests when hidden and
//! how tall its navigation row is.

use serde::{Deserialize, Serialize};

/// Height of the status-bar strip drawn above the bar on iOS.
pub const IOS_STATUS_PADDING: f32 = 20.0;

/// Target platform look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    Android,
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl Platform {
    /// The platform matching the compilation target.
    pub const fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    pub fn is_ios(self) -> bool {
        self == Platform::Ios
    }

    /// Vertical offset the bar rests at while hidden.
    pub fn hidden_offset(self) -> f32 {
        match self {
            Platform::Ios => -80.0,
            Platform::Android => -60.0,
        }
    }

    /// Height of the navigation row before `height_adjust` is applied.
    pub fn nav_height(self) -> f32 {
        match self {
            Platform::Ios => 52.0,
            Platform::Android => 62.0,
        }
    }

    /// Height of the text input inside the navigation row.
    pub fn input_height(self) -> f32 {
        match self {
            Platform::Ios => 30.0,
            Platform::Android => 50.0,
        }
    }

    /// Top margin for the text input; iOS centres it against the adjusted row.
    pub fn input_top_margin(self, height_adjust: f32) -> f32 {
        match self {
            Platform::Ios => height_adjust / 2.0 + 10.0,
            Platform::Android => 0.0,
        }
    }
}
