//! Application preferences — the settings-page flags.
//!
//! These are plain persisted-preference style toggles with no behavioral
//! coupling to the core: nothing in validation, suggestion, or conversation
//! handling reads them, so core determinism cannot depend on them.

use serde::{Deserialize, Serialize};

use crate::models::{ArchivePolicy, RetentionPeriod};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Dark theme for low-light hangar environments.
    pub dark_mode: bool,
    /// Alerts for maintenance updates.
    pub notifications: bool,
    /// Automatic sync of maintenance data.
    pub auto_sync: bool,
    pub log_retention: RetentionPeriod,
    pub auto_archive: ArchivePolicy,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            auto_sync: true,
            log_retention: RetentionPeriod::FiveYears,
            auto_archive: ArchivePolicy::AfterOneYear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_settings_screen() {
        let prefs = Preferences::default();
        assert!(!prefs.dark_mode);
        assert!(prefs.notifications);
        assert!(prefs.auto_sync);
        assert_eq!(prefs.log_retention, RetentionPeriod::FiveYears);
        assert_eq!(prefs.auto_archive, ArchivePolicy::AfterOneYear);
    }

    #[test]
    fn serde_round_trip() {
        let prefs = Preferences {
            dark_mode: true,
            log_retention: RetentionPeriod::Indefinite,
            ..Preferences::default()
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"logRetention\":\"Indefinite\""));
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn partial_payload_fills_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"darkMode":true}"#).unwrap();
        assert!(prefs.dark_mode);
        assert!(prefs.notifications);
        assert_eq!(prefs.auto_archive, ArchivePolicy::AfterOneYear);
    }
}
