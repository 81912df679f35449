use kaipad_core::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid keypad config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid keypad config: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Timings and distances for the keypad layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Hold time before a press counts as long.
    pub long_press_ms: u64,
    /// Window in which a second key-down (or key-up) is dropped.
    pub debounce_ms: u64,
    /// Horizontal drag at which the page is fully faded out.
    pub max_swipe_distance: f32,
    /// Downward swipe at the top of the page that asks for a refresh.
    pub refresh_swipe_distance: f32,
    pub swipe_threshold: f32,
    pub swipe_timeout_ms: u64,
    /// Pixels a focused `.scroll` region moves per arrow press.
    pub scroll_nudge: f32,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            long_press_ms: 2000,
            debounce_ms: 300,
            max_swipe_distance: 300.0,
            refresh_swipe_distance: 300.0,
            swipe_threshold: 20.0,
            swipe_timeout_ms: 500,
            scroll_nudge: 10.0,
        }
    }
}

impl KeypadConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: KeypadConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("long_press_ms", self.long_press_ms),
            ("debounce_ms", self.debounce_ms),
            ("swipe_timeout_ms", self.swipe_timeout_ms),
        ];
        for (field, v) in durations {
            if v == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }
        let distances = [
            ("max_swipe_distance", self.max_swipe_distance),
            ("refresh_swipe_distance", self.refresh_swipe_distance),
            ("swipe_threshold", self.swipe_threshold),
            ("scroll_nudge", self.scroll_nudge),
        ];
        for (field, v) in distances {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }
        Ok(())
    }

    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn swipe_timeout(&self) -> Duration {
        Duration::from_millis(self.swipe_timeout_ms)
    }
}
