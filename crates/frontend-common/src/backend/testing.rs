//! In-memory [`Backend`] fake for tests.
//!
//! Records every call by name so tests can assert on call counts, and can
//! be told to fail specific operations to exercise rollback paths.

use super::error::BackendError;
use super::listeners::{SessionListener, SessionListeners, SessionSubscription};
use super::types::{
    CheckIn, Habit, HabitPatch, NewHabit, ProfileUpsert, Session, UserProfile,
};
use super::Backend;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

#[derive(Default)]
pub struct FakeBackend {
    pub session: RefCell<Option<Session>>,
    pub profiles: RefCell<Vec<UserProfile>>,
    pub habits: RefCell<Vec<Habit>>,
    pub check_ins: RefCell<Vec<CheckIn>>,
    calls: RefCell<Vec<String>>,
    failing: RefCell<HashSet<&'static str>>,
    next_id: Cell<u32>,
    listeners: SessionListeners,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        let fake = Self::new();
        *fake.session.borrow_mut() = Some(session);
        fake
    }

    /// Make the named operation return an error until cleared.
    pub fn fail_on(&self, op: &'static str) {
        self.failing.borrow_mut().insert(op);
    }

    pub fn clear_failure(&self, op: &str) {
        self.failing.borrow_mut().remove(op);
    }

    /// Simulate an auth-subsystem notification (login/logout/refresh).
    pub fn emit_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session.clone();
        self.listeners.notify(session.as_ref());
    }

    pub fn call_count(&self, op: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == op).count()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn record(&self, op: &'static str) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(op.to_owned());
        if self.failing.borrow().contains(op) {
            return Err(BackendError::ServerError {
                status: 500,
                message: format!("injected failure: {op}"),
            });
        }
        Ok(())
    }
}

pub fn session(user_id: &str) -> Session {
    Session {
        user_id: user_id.to_owned(),
        email: Some(format!("{user_id}@example.com")),
        access_token: "token".to_owned(),
        refresh_token: None,
        expires_at: None,
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        self.record("current_session")?;
        Ok(self.session.borrow().clone())
    }

    fn subscribe_session(&self, listener: SessionListener) -> SessionSubscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_in_with_magic_link(
        &self,
        _email: &str,
        _redirect_to: &str,
    ) -> Result<(), BackendError> {
        self.record("sign_in_with_magic_link")
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.record("sign_out")?;
        self.emit_session(None);
        Ok(())
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError> {
        self.record("fetch_profile")?;
        Ok(self
            .profiles
            .borrow()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn upsert_profile(&self, profile: &ProfileUpsert) -> Result<(), BackendError> {
        self.record("upsert_profile")?;
        let mut profiles = self.profiles.borrow_mut();
        profiles.retain(|p| p.user_id != profile.user_id);
        profiles.push(UserProfile {
            user_id: profile.user_id.clone(),
            display_name: profile.display_name.clone(),
            full_name: profile.full_name.clone(),
            selected_goal: profile.selected_goal,
            age: profile.age,
            onboarding_completed: Some(profile.onboarding_completed),
            updated_at: Some(profile.updated_at),
        });
        Ok(())
    }

    async fn list_habits(&self, user_id: &str) -> Result<Vec<Habit>, BackendError> {
        self.record("list_habits")?;
        Ok(self
            .habits
            .borrow()
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_habit(&self, habit: &NewHabit) -> Result<Habit, BackendError> {
        self.record("insert_habit")?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let row = Habit {
            id: format!("habit-{id}"),
            user_id: habit.user_id.clone(),
            title: habit.title.clone(),
            frequency: habit.frequency,
            preferred_time: habit.preferred_time,
            color: habit.color.clone(),
            created_at: None,
        };
        self.habits.borrow_mut().push(row.clone());
        Ok(row)
    }

    async fn update_habit(&self, id: &str, patch: &HabitPatch) -> Result<(), BackendError> {
        self.record("update_habit")?;
        let mut habits = self.habits.borrow_mut();
        let habit = habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| BackendError::NotFound(id.to_owned()))?;
        habit.title = patch.title.clone();
        habit.frequency = patch.frequency;
        habit.preferred_time = patch.preferred_time;
        habit.color = patch.color.clone();
        Ok(())
    }

    async fn delete_habit(&self, id: &str) -> Result<(), BackendError> {
        self.record("delete_habit")?;
        self.habits.borrow_mut().retain(|h| h.id != id);
        Ok(())
    }

    async fn list_check_ins(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<CheckIn>, BackendError> {
        self.record("list_check_ins")?;
        Ok(self
            .check_ins
            .borrow()
            .iter()
            .filter(|c| c.user_id == user_id && c.date >= since)
            .cloned()
            .collect())
    }

    async fn insert_check_in(&self, check_in: &CheckIn) -> Result<(), BackendError> {
        self.record("insert_check_in")?;
        self.check_ins.borrow_mut().push(check_in.clone());
        Ok(())
    }

    async fn delete_check_in(&self, habit_id: &str, date: NaiveDate) -> Result<(), BackendError> {
        self.record("delete_check_in")?;
        self.check_ins
            .borrow_mut()
            .retain(|c| !(c.habit_id == habit_id && c.date == date));
        Ok(())
    }

    async fn delete_check_ins_for_habit(&self, habit_id: &str) -> Result<(), BackendError> {
        self.record("delete_check_ins_for_habit")?;
        self.check_ins.borrow_mut().retain(|c| c.habit_id != habit_id);
        Ok(())
    }

    async fn delete_user_data(&self, user_id: &str) -> Result<(), BackendError> {
        self.record("delete_user_data")?;
        self.check_ins.borrow_mut().retain(|c| c.user_id != user_id);
        self.habits.borrow_mut().retain(|h| h.user_id != user_id);
        self.profiles.borrow_mut().retain(|p| p.user_id != user_id);
        Ok(())
    }
}
