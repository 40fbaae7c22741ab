//! Session resolver context and provider.
//!
//! The provider owns the single writer path for the shared triple: its own
//! handlers (initial resolve, session-change subscription, refresh signal,
//! fallback timer) are the only places that dispatch. Readers — the route
//! gate and the pages — never mutate it.

use crate::backend::{use_backend, Backend, Session, SharedBackend, UserProfile};
use crate::config::AppConfig;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// The resolved authentication/onboarding state.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub onboarding_complete: bool,
    pub loading: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            session: None,
            onboarding_complete: false,
            // Resolving starts immediately on mount.
            loading: true,
        }
    }
}

impl SessionSnapshot {
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }
}

pub enum SessionAction {
    /// A session-change notification is being processed; loading is
    /// re-asserted so stale content cannot flash while the profile
    /// re-fetch is pending.
    ChangeBegan,
    /// A resolve completed under the current epoch.
    Resolved {
        session: Option<Session>,
        onboarding_complete: bool,
    },
    /// The bounded fallback elapsed before the initial resolve finished.
    LoadingTimedOut,
}

impl Reducible for SessionSnapshot {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::ChangeBegan => Rc::new(Self {
                loading: true,
                ..(*self).clone()
            }),
            SessionAction::Resolved {
                session,
                onboarding_complete,
            } => Rc::new(Self {
                session,
                onboarding_complete,
                loading: false,
            }),
            SessionAction::LoadingTimedOut => Rc::new(Self {
                loading: false,
                ..(*self).clone()
            }),
        }
    }
}

pub type SessionContext = UseReducerHandle<SessionSnapshot>;

/// Typed completion signal for flows that change profile state out of band
/// (the onboarding wizard emits `refresh` after its upsert succeeds).
#[derive(Clone, PartialEq)]
pub struct SessionControl {
    pub refresh: Callback<()>,
}

/// Resolve the `(session, onboarding_complete)` pair.
///
/// `known_session` short-circuits the session fetch when the value arrived
/// with a change notification. Failures degrade: a failed session fetch
/// resolves to unauthenticated, a failed or missing profile to incomplete.
/// Neither is an error state for the caller.
pub(crate) async fn resolve(
    backend: &dyn Backend,
    known_session: Option<Option<Session>>,
) -> (Option<Session>, bool) {
    let session = match known_session {
        Some(session) => session,
        None => match backend.current_session().await {
            Ok(session) => session,
            Err(err) => {
                log::warn!("session fetch failed: {err}");
                None
            }
        },
    };

    let onboarding_complete = match &session {
        Some(session) => match backend.fetch_profile(&session.user_id).await {
            Ok(profile) => UserProfile::onboarding_complete(profile.as_ref()),
            Err(err) => {
                log::warn!("profile fetch failed: {err}");
                false
            }
        },
        None => false,
    };

    (session, onboarding_complete)
}

/// Whether an async completion may commit: the provider must still be
/// mounted and no newer resolve may have started since.
fn may_commit(alive: &Rc<RefCell<bool>>, epoch: &Rc<RefCell<u64>>, my_epoch: u64) -> bool {
    *alive.borrow() && *epoch.borrow() == my_epoch
}

fn spawn_resolve(
    backend: SharedBackend,
    dispatcher: UseReducerDispatcher<SessionSnapshot>,
    epoch: Rc<RefCell<u64>>,
    alive: Rc<RefCell<bool>>,
    known_session: Option<Option<Session>>,
) {
    let my_epoch = {
        let mut current = epoch.borrow_mut();
        *current += 1;
        *current
    };
    spawn_local(async move {
        let (session, onboarding_complete) = resolve(backend.as_ref(), known_session).await;
        if !may_commit(&alive, &epoch, my_epoch) {
            return;
        }
        dispatcher.dispatch(SessionAction::Resolved {
            session,
            onboarding_complete,
        });
    });
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let backend = use_backend();
    let state = use_reducer(SessionSnapshot::default);
    let epoch = use_mut_ref(|| 0u64);
    let alive = use_mut_ref(|| true);

    {
        let backend = backend.clone();
        let dispatcher = state.dispatcher();
        let epoch = epoch.clone();
        let alive = alive.clone();
        use_effect_with((), move |_| {
            spawn_resolve(
                backend.clone(),
                dispatcher.clone(),
                epoch.clone(),
                alive.clone(),
                None,
            );

            // Change notifications replace the session and re-run the
            // onboarding lookup; each one re-asserts loading first.
            let listener = {
                let backend = backend.clone();
                let dispatcher = dispatcher.clone();
                let epoch = epoch.clone();
                let alive = alive.clone();
                Callback::from(move |session: Option<Session>| {
                    dispatcher.dispatch(SessionAction::ChangeBegan);
                    spawn_resolve(
                        backend.clone(),
                        dispatcher.clone(),
                        epoch.clone(),
                        alive.clone(),
                        Some(session),
                    );
                })
            };
            let subscription = backend.subscribe_session(listener);

            // Bounded fallback so the app cannot sit in loading forever if
            // the backend hangs on first load.
            let fallback = {
                let dispatcher = dispatcher.clone();
                Timeout::new(AppConfig::SESSION_FALLBACK_TIMEOUT_MS, move || {
                    dispatcher.dispatch(SessionAction::LoadingTimedOut);
                })
            };

            move || {
                *alive.borrow_mut() = false;
                subscription.unsubscribe();
                fallback.cancel();
            }
        });
    }

    let control = {
        let backend = backend.clone();
        let dispatcher = state.dispatcher();
        let epoch = epoch.clone();
        let alive = alive.clone();
        use_memo((), move |_| SessionControl {
            refresh: Callback::from(move |()| {
                dispatcher.dispatch(SessionAction::ChangeBegan);
                spawn_resolve(
                    backend.clone(),
                    dispatcher.clone(),
                    epoch.clone(),
                    alive.clone(),
                    None,
                );
            }),
        })
    };

    html! {
        <ContextProvider<SessionContext> context={state}>
            <ContextProvider<SessionControl> context={(*control).clone()}>
                {props.children.clone()}
            </ContextProvider<SessionControl>>
        </ContextProvider<SessionContext>>
    }
}

/// Hook to read the resolved session state.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the session control handle (refresh signal).
#[hook]
pub fn use_session_control() -> SessionControl {
    use_context::<SessionControl>()
        .expect("SessionControl not found. Make sure to wrap your component with SessionProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{session, FakeBackend};
    use futures::executor::block_on;

    #[test]
    fn default_snapshot_is_loading_and_unauthenticated() {
        let snapshot = SessionSnapshot::default();
        assert!(snapshot.loading);
        assert!(snapshot.session.is_none());
        assert!(!snapshot.onboarding_complete);
    }

    #[test]
    fn change_began_reasserts_loading_and_keeps_state() {
        let resolved = Rc::new(SessionSnapshot {
            session: Some(session("u1")),
            onboarding_complete: true,
            loading: false,
        });
        let next = resolved.reduce(SessionAction::ChangeBegan);
        assert!(next.loading);
        assert!(next.session.is_some());
        assert!(next.onboarding_complete);
    }

    #[test]
    fn resolved_replaces_state_and_clears_loading() {
        let initial = Rc::new(SessionSnapshot::default());
        let next = initial.reduce(SessionAction::Resolved {
            session: Some(session("u1")),
            onboarding_complete: true,
        });
        assert!(!next.loading);
        assert_eq!(next.user_id(), Some("u1"));
        assert!(next.onboarding_complete);
    }

    #[test]
    fn timeout_only_clears_loading() {
        let initial = Rc::new(SessionSnapshot::default());
        let next = initial.reduce(SessionAction::LoadingTimedOut);
        assert!(!next.loading);
        assert!(next.session.is_none());
    }

    #[test]
    fn resolve_without_session_skips_profile_lookup() {
        let backend = FakeBackend::new();
        let (resolved_session, complete) = block_on(resolve(&backend, None));
        assert!(resolved_session.is_none());
        assert!(!complete);
        assert_eq!(backend.call_count("fetch_profile"), 0);
    }

    #[test]
    fn missing_profile_resolves_to_incomplete_without_error() {
        let backend = FakeBackend::with_session(session("u1"));
        let (resolved_session, complete) = block_on(resolve(&backend, None));
        assert_eq!(resolved_session.unwrap().user_id, "u1");
        assert!(!complete);
    }

    #[test]
    fn completed_profile_resolves_to_complete() {
        let backend = FakeBackend::with_session(session("u1"));
        backend
            .profiles
            .borrow_mut()
            .push(crate::backend::UserProfile {
                user_id: "u1".into(),
                onboarding_completed: Some(true),
                ..Default::default()
            });
        let (_, complete) = block_on(resolve(&backend, None));
        assert!(complete);
    }

    #[test]
    fn profile_fetch_failure_degrades_to_incomplete() {
        let backend = FakeBackend::with_session(session("u1"));
        backend.fail_on("fetch_profile");
        let (resolved_session, complete) = block_on(resolve(&backend, None));
        assert!(resolved_session.is_some());
        assert!(!complete);
    }

    #[test]
    fn session_fetch_failure_degrades_to_unauthenticated() {
        let backend = FakeBackend::new();
        backend.fail_on("current_session");
        let (resolved_session, complete) = block_on(resolve(&backend, None));
        assert!(resolved_session.is_none());
        assert!(!complete);
    }

    #[test]
    fn known_session_from_notification_skips_session_fetch() {
        let backend = FakeBackend::new();
        let (resolved_session, _) = block_on(resolve(&backend, Some(Some(session("u2")))));
        assert_eq!(resolved_session.unwrap().user_id, "u2");
        assert_eq!(backend.call_count("current_session"), 0);
    }

    #[test]
    fn commits_are_dropped_after_teardown_or_supersession() {
        let alive = Rc::new(RefCell::new(true));
        let epoch = Rc::new(RefCell::new(1u64));
        assert!(may_commit(&alive, &epoch, 1));

        // A newer resolve started: the older completion must not commit.
        *epoch.borrow_mut() = 2;
        assert!(!may_commit(&alive, &epoch, 1));
        assert!(may_commit(&alive, &epoch, 2));

        // Torn down: nothing commits, however fresh.
        *alive.borrow_mut() = false;
        assert!(!may_commit(&alive, &epoch, 2));
    }
}
