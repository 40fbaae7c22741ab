//! Application configuration

/// Application-wide constants and environment-derived settings.
pub struct AppConfig;

impl AppConfig {
    /// Upper bound on how long the session resolver may stay in its
    /// loading state before it gives up and renders as unauthenticated.
    pub const SESSION_FALLBACK_TIMEOUT_MS: u32 = 5_000;

    /// Local storage key for the cached session.
    pub const SESSION_STORAGE_KEY: &'static str = "bloom.auth.session";

    /// Local storage keys for user preference flags.
    pub const DARK_MODE_KEY: &'static str = "darkMode";
    pub const SIDEBAR_COLLAPSED_KEY: &'static str = "sidebarCollapsed";
    pub const DAILY_REMINDERS_KEY: &'static str = "dailyReminders";
    pub const WEEKLY_SUMMARY_KEY: &'static str = "weeklySummary";
    pub const AI_INSIGHTS_KEY: &'static str = "aiInsights";

    /// Base URL of the backend service. Falls back to the page origin so a
    /// same-host deployment needs no configuration.
    pub fn backend_url() -> String {
        option_env!("BLOOM_BACKEND_URL")
            .map(str::to_owned)
            .unwrap_or_else(Self::origin)
    }

    /// Publishable API key sent with every backend request.
    pub fn anon_key() -> String {
        option_env!("BLOOM_ANON_KEY").unwrap_or_default().to_owned()
    }

    /// Redirect target embedded in magic-link emails.
    pub fn site_url() -> String {
        option_env!("BLOOM_SITE_URL")
            .map(str::to_owned)
            .unwrap_or_else(Self::origin)
    }

    fn origin() -> String {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
}
