//! Profile service: onboarding completion write and display-name logic.

use crate::backend::{BackendError, Goal, ProfileUpsert, SharedBackend, UserProfile};
use chrono::Utc;

/// Everything the onboarding wizard collects.
#[derive(Clone, Debug, PartialEq)]
pub struct OnboardingAnswers {
    pub goal: Goal,
    pub display_name: String,
    pub age: Option<u8>,
}

/// Name shown in greetings and the settings header, in precedence order:
/// display name, full name, email local part, then a generic fallback.
pub fn greeting_name(profile: Option<&UserProfile>, email: Option<&str>) -> String {
    profile
        .and_then(|p| p.display_name.clone().filter(|n| !n.is_empty()))
        .or_else(|| profile.and_then(|p| p.full_name.clone().filter(|n| !n.is_empty())))
        .or_else(|| {
            email
                .and_then(|e| e.split('@').next())
                .filter(|local| !local.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "User".to_owned())
}

#[derive(Clone)]
pub struct ProfileService {
    backend: SharedBackend,
}

impl ProfileService {
    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }

    pub async fn fetch(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError> {
        self.backend.fetch_profile(user_id).await
    }

    /// Persist the completed wizard. The flag goes to `true` in the same
    /// write as the answers, so a successful call is sufficient for the
    /// resolver to land in the onboarded state on its next pass.
    pub async fn complete_onboarding(
        &self,
        user_id: &str,
        answers: &OnboardingAnswers,
    ) -> Result<(), BackendError> {
        let upsert = ProfileUpsert {
            user_id: user_id.to_owned(),
            display_name: Some(answers.display_name.clone()),
            full_name: Some(answers.display_name.clone()),
            selected_goal: Some(answers.goal),
            age: answers.age,
            onboarding_completed: true,
            updated_at: Utc::now(),
        };
        self.backend.upsert_profile(&upsert).await
    }

    /// Account deletion: habits, check-ins and profile rows, then sign-out.
    pub async fn delete_account(&self, user_id: &str) -> Result<(), BackendError> {
        self.backend.delete_user_data(user_id).await?;
        self.backend.sign_out().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{session, FakeBackend};
    use crate::session::resolve;
    use futures::executor::block_on;
    use std::rc::Rc;

    #[test]
    fn greeting_precedence() {
        let mut profile = UserProfile {
            user_id: "u1".into(),
            display_name: Some("Ada".into()),
            full_name: Some("Ada Lovelace".into()),
            ..Default::default()
        };
        assert_eq!(greeting_name(Some(&profile), Some("ada@example.com")), "Ada");

        profile.display_name = None;
        assert_eq!(
            greeting_name(Some(&profile), Some("ada@example.com")),
            "Ada Lovelace"
        );

        profile.full_name = None;
        assert_eq!(greeting_name(Some(&profile), Some("ada@example.com")), "ada");

        assert_eq!(greeting_name(None, None), "User");
    }

    #[test]
    fn completing_onboarding_writes_the_flag_and_answers() {
        let backend = Rc::new(FakeBackend::with_session(session("u1")));
        let service = ProfileService::new(backend.clone());

        block_on(service.complete_onboarding(
            "u1",
            &OnboardingAnswers {
                goal: Goal::Focus,
                display_name: "Ada".to_owned(),
                age: None,
            },
        ))
        .unwrap();

        assert_eq!(backend.call_count("upsert_profile"), 1);
        let profiles = backend.profiles.borrow();
        let row = profiles.iter().find(|p| p.user_id == "u1").unwrap();
        assert_eq!(row.selected_goal, Some(Goal::Focus));
        assert_eq!(row.display_name.as_deref(), Some("Ada"));
        assert_eq!(row.onboarding_completed, Some(true));
    }

    #[test]
    fn resolver_sees_completion_on_its_next_pass() {
        let backend = Rc::new(FakeBackend::with_session(session("u1")));
        let service = ProfileService::new(backend.clone());

        let (_, complete_before) = block_on(resolve(backend.as_ref(), None));
        assert!(!complete_before);

        block_on(service.complete_onboarding(
            "u1",
            &OnboardingAnswers {
                goal: Goal::Focus,
                display_name: "Ada".to_owned(),
                age: Some(30),
            },
        ))
        .unwrap();

        let (resolved_session, complete_after) = block_on(resolve(backend.as_ref(), None));
        assert_eq!(resolved_session.unwrap().user_id, "u1");
        assert!(complete_after);
    }

    #[test]
    fn account_deletion_clears_rows_and_signs_out() {
        let backend = Rc::new(FakeBackend::with_session(session("u1")));
        backend.profiles.borrow_mut().push(UserProfile {
            user_id: "u1".into(),
            ..Default::default()
        });
        let service = ProfileService::new(backend.clone());

        block_on(service.delete_account("u1")).unwrap();
        assert!(backend.profiles.borrow().is_empty());
        assert_eq!(backend.call_count("sign_out"), 1);
        assert!(backend.session.borrow().is_none());
    }
}
