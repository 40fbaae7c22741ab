mod dashboard;
mod login;
mod onboarding;
mod settings;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use onboarding::OnboardingPage;
pub use settings::SettingsPage;
