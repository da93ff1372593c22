use serde::{Deserialize, Serialize};

// Repository Types

/// Pane width used until the user drags the divider for the first time.
pub const DEFAULT_PANE_WIDTH: f64 = 320.0;

/// Persisted UI settings. Every field is optional: a fresh profile has
/// none of them, and resolution falls back to the documented defaults
/// instead of failing.
#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Width of the left pane in pixels, as last dragged by the user
    #[serde(default)]
    pub preferred_pane_width: Option<f64>,
    /// Whether senders see who viewed their stories
    #[serde(default)]
    pub read_receipts: Option<bool>,
}

impl UiConfig {
    /// The persisted pane width if it is usable, `DEFAULT_PANE_WIDTH`
    /// otherwise.
    pub fn pane_width(&self) -> f64 {
        match self.preferred_pane_width {
            Some(width) if width.is_finite() && width > 0.0 => width,
            _ => DEFAULT_PANE_WIDTH,
        }
    }

    pub fn has_read_receipts(&self) -> bool {
        self.read_receipts.unwrap_or(false)
    }
}

/// The resolved settings snapshot handed to the view. One value per
/// setting; no call site ever falls back on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub pane_width: f64,
    pub has_read_receipt_setting: bool,
}

impl Preferences {
    pub fn resolve(config: &UiConfig) -> Self {
        Self {
            pane_width: config.pane_width(),
            has_read_receipt_setting: config.has_read_receipts(),
        }
    }
}

// Menu

use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::IntoStaticStr;

#[derive(IntoStaticStr, EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq)]
pub enum MainMenuEvent {
    NewStory,
    StoriesSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_width_defaults_when_unset() {
        let config = UiConfig::default();
        assert_eq!(config.pane_width(), DEFAULT_PANE_WIDTH);
    }

    #[test]
    fn pane_width_defaults_when_unusable() {
        let config = UiConfig {
            preferred_pane_width: Some(-10.0),
            ..Default::default()
        };
        assert_eq!(config.pane_width(), DEFAULT_PANE_WIDTH);

        let config = UiConfig {
            preferred_pane_width: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(config.pane_width(), DEFAULT_PANE_WIDTH);
    }

    #[test]
    fn pane_width_uses_persisted_value() {
        let config = UiConfig {
            preferred_pane_width: Some(412.0),
            ..Default::default()
        };
        assert_eq!(config.pane_width(), 412.0);
    }

    #[test]
    fn read_receipts_default_off() {
        assert!(!UiConfig::default().has_read_receipts());
    }

    #[test]
    fn resolve_carries_both_settings() {
        let config = UiConfig {
            preferred_pane_width: Some(280.0),
            read_receipts: Some(true),
        };
        let preferences = Preferences::resolve(&config);
        assert_eq!(preferences.pane_width, 280.0);
        assert!(preferences.has_read_receipt_setting);
    }
}
