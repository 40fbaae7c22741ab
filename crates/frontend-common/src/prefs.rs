//! Client-side preference flags.
//!
//! Stored in browser local storage as `"true"`/`"false"` strings, read at
//! startup and written fire-and-forget on toggle. No schema versioning; an
//! unreadable value falls back to the flag's default.

use crate::config::AppConfig;
use gloo::storage::{LocalStorage, Storage};

/// Decode a stored flag value. Anything other than the two literal strings
/// keeps the default (matches the legacy `!== "false"` semantics for
/// default-on flags).
fn decode_flag(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

pub fn load_flag(key: &str, default: bool) -> bool {
    let raw: Option<String> = LocalStorage::get(key).ok();
    decode_flag(raw.as_deref(), default)
}

pub fn store_flag(key: &str, value: bool) {
    if let Err(err) = LocalStorage::set(key, if value { "true" } else { "false" }) {
        log::warn!("failed to persist {key}: {err}");
    }
}

/// Notification toggles shown on the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub daily_reminders: bool,
    pub weekly_summary: bool,
    pub ai_insights: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            daily_reminders: false,
            weekly_summary: true,
            ai_insights: true,
        }
    }
}

impl NotificationPrefs {
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            daily_reminders: load_flag(AppConfig::DAILY_REMINDERS_KEY, defaults.daily_reminders),
            weekly_summary: load_flag(AppConfig::WEEKLY_SUMMARY_KEY, defaults.weekly_summary),
            ai_insights: load_flag(AppConfig::AI_INSIGHTS_KEY, defaults.ai_insights),
        }
    }
}

pub fn load_sidebar_collapsed() -> bool {
    load_flag(AppConfig::SIDEBAR_COLLAPSED_KEY, false)
}

pub fn store_sidebar_collapsed(collapsed: bool) {
    store_flag(AppConfig::SIDEBAR_COLLAPSED_KEY, collapsed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_strings_decode() {
        assert!(decode_flag(Some("true"), false));
        assert!(!decode_flag(Some("false"), true));
    }

    #[test]
    fn anything_else_keeps_the_default() {
        assert!(decode_flag(None, true));
        assert!(!decode_flag(None, false));
        assert!(decode_flag(Some("1"), true));
        assert!(!decode_flag(Some("yes"), false));
    }

    #[test]
    fn notification_defaults_match_legacy_semantics() {
        let defaults = NotificationPrefs::default();
        assert!(!defaults.daily_reminders);
        assert!(defaults.weekly_summary);
        assert!(defaults.ai_insights);
    }
}
