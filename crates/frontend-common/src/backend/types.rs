//! Domain types shared between the backend client and the UI.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Proof of an authenticated principal, opaque beyond its presence and the
/// associated user id. Issued by the auth subsystem; the application only
/// observes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix timestamp; `None` means the token carries no expiry.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl Session {
    /// Whether the session is expired at `now` (unix seconds).
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }
}

/// Onboarding goal selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Health,
    Focus,
    Learning,
    Meditating,
    Sleeping,
}

impl Goal {
    pub const ALL: [Self; 5] = [
        Self::Health,
        Self::Focus,
        Self::Learning,
        Self::Meditating,
        Self::Sleeping,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Focus => "focus",
            Self::Learning => "learning",
            Self::Meditating => "meditating",
            Self::Sleeping => "sleeping",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Focus => "Focus",
            Self::Learning => "Learning",
            Self::Meditating => "Meditating",
            Self::Sleeping => "Sleeping",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Health => "❤️",
            Self::Focus => "🎯",
            Self::Learning => "📚",
            Self::Meditating => "🧘",
            Self::Sleeping => "😴",
        }
    }
}

/// One-per-user profile row. May not exist yet for a fresh sign-up; absence
/// is equivalent to "onboarding not completed".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub selected_goal: Option<Goal>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub onboarding_completed: Option<bool>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Derive the onboarding flag from an optional row: only a literal
    /// `true` counts, absence or anything else is `false`.
    pub fn onboarding_complete(profile: Option<&Self>) -> bool {
        profile.and_then(|p| p.onboarding_completed) == Some(true)
    }
}

/// Upsert payload written by the onboarding wizard and settings changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpsert {
    pub user_id: String,
    pub display_name: Option<String>,
    pub full_name: Option<String>,
    pub selected_goal: Option<Goal>,
    pub age: Option<u8>,
    pub onboarding_completed: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
}

impl Frequency {
    pub const ALL: [Self; 2] = [Self::Daily, Self::Weekly];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferredTime {
    Morning,
    Afternoon,
    Evening,
}

impl PreferredTime {
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// A habit row. Always belongs to exactly one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub frequency: Frequency,
    pub preferred_time: PreferredTime,
    pub color: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a new habit, scoped to its owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewHabit {
    pub user_id: String,
    pub title: String,
    pub frequency: Frequency,
    pub preferred_time: PreferredTime,
    pub color: String,
}

/// Full replacement of a habit's editable fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HabitPatch {
    pub title: String,
    pub frequency: Frequency,
    pub preferred_time: PreferredTime,
    pub color: String,
}

/// A per-day completion mark for one habit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub habit_id: String,
    pub user_id: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_flag_requires_literal_true() {
        assert!(!UserProfile::onboarding_complete(None));

        let mut profile = UserProfile {
            user_id: "u1".into(),
            ..UserProfile::default()
        };
        assert!(!UserProfile::onboarding_complete(Some(&profile)));

        profile.onboarding_completed = Some(false);
        assert!(!UserProfile::onboarding_complete(Some(&profile)));

        profile.onboarding_completed = Some(true);
        assert!(UserProfile::onboarding_complete(Some(&profile)));
    }

    #[test]
    fn session_expiry_is_inclusive() {
        let session = Session {
            user_id: "u1".into(),
            email: None,
            access_token: "t".into(),
            refresh_token: None,
            expires_at: Some(100),
        };
        assert!(!session.is_expired_at(99));
        assert!(session.is_expired_at(100));

        let no_expiry = Session {
            expires_at: None,
            ..session
        };
        assert!(!no_expiry.is_expired_at(i64::MAX));
    }

    #[test]
    fn goal_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Goal::Focus).unwrap(),
            "\"focus\"".to_owned()
        );
        let parsed: Goal = serde_json::from_str("\"meditating\"").unwrap();
        assert_eq!(parsed, Goal::Meditating);
    }

    #[test]
    fn frequency_round_trips_through_parse() {
        for f in Frequency::ALL {
            assert_eq!(Frequency::parse(f.as_str()), Some(f));
        }
        assert_eq!(Frequency::parse("Hourly"), None);
    }
}
