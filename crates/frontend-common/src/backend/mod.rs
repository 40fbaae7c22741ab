//! Backend client abstraction.
//!
//! [`Backend`] is the single seam between the application and the remote
//! service: auth (magic links, session observation) and row storage
//! (profiles, habits, check-ins). Components receive it through
//! [`BackendProvider`] rather than a module-level singleton so tests can
//! inject [`testing::FakeBackend`].

mod context;
mod error;
mod listeners;
mod supabase;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod types;

use async_trait::async_trait;
use chrono::NaiveDate;
use std::rc::Rc;

pub use context::{use_backend, BackendProvider, BackendProviderProps};
pub use error::BackendError;
pub use listeners::{SessionListener, SessionListeners, SessionSubscription};
pub use supabase::SupabaseClient;
pub use types::{
    CheckIn, Frequency, Goal, Habit, HabitPatch, NewHabit, PreferredTime, ProfileUpsert, Session,
    UserProfile,
};

/// Shared handle to the active backend implementation.
pub type SharedBackend = Rc<dyn Backend>;

/// Operations the remote service exposes to the application.
///
/// All calls are one-shot and non-cancellable; callers that may go away
/// mid-flight guard against applying stale results themselves.
#[async_trait(?Send)]
pub trait Backend {
    /// Current session, if any. Never fails the caller into an error state:
    /// an unreadable or expired cached session resolves to `None`.
    async fn current_session(&self) -> Result<Option<Session>, BackendError>;

    /// Register for session-change notifications (login, logout, refresh).
    /// Dropping the returned subscription unregisters the listener.
    fn subscribe_session(&self, listener: SessionListener) -> SessionSubscription;

    /// Request a one-time sign-in link for `email`, redirecting back to
    /// `redirect_to` on redemption.
    async fn sign_in_with_magic_link(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), BackendError>;

    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Profile row for `user_id`. A missing row is `Ok(None)`, not an error.
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError>;

    async fn upsert_profile(&self, profile: &ProfileUpsert) -> Result<(), BackendError>;

    async fn list_habits(&self, user_id: &str) -> Result<Vec<Habit>, BackendError>;

    async fn insert_habit(&self, habit: &NewHabit) -> Result<Habit, BackendError>;

    async fn update_habit(&self, id: &str, patch: &HabitPatch) -> Result<(), BackendError>;

    async fn delete_habit(&self, id: &str) -> Result<(), BackendError>;

    /// Check-in rows for `user_id` on or after `since`.
    async fn list_check_ins(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<CheckIn>, BackendError>;

    async fn insert_check_in(&self, check_in: &CheckIn) -> Result<(), BackendError>;

    async fn delete_check_in(&self, habit_id: &str, date: NaiveDate) -> Result<(), BackendError>;

    /// Remove every check-in row belonging to a habit.
    async fn delete_check_ins_for_habit(&self, habit_id: &str) -> Result<(), BackendError>;

    /// Account deletion: habits, check-ins and profile for `user_id`.
    async fn delete_user_data(&self, user_id: &str) -> Result<(), BackendError>;
}
