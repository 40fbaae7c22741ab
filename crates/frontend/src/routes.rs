//! Route table and the session/onboarding gate.
//!
//! [`decide`] is a pure function of the requested route and the resolved
//! session snapshot; the [`Gate`] component only maps its decision onto
//! views and redirects and never mutates session or profile state.

use crate::pages::{DashboardPage, LoginPage, OnboardingPage, SettingsPage};
use bloom_frontend_common::{use_session, SessionSnapshot};
use bloom_ui::{styles, Spinner, SpinnerSize};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/onboarding")]
    Onboarding,
    #[at("/dashboard")]
    Dashboard,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Login,
    Onboarding,
    Dashboard,
    Settings,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
    /// Resolution in flight; render a placeholder, make no routing call.
    Loading,
    Render(View),
    RedirectTo(Route),
}

/// Map `(route, snapshot)` onto what to show.
///
/// Three states: unauthenticated (login), authenticated without a completed
/// onboarding (wizard), authenticated and onboarded (dashboard/settings).
/// Unknown paths fall back to the root in every state.
pub fn decide(route: Route, snapshot: &SessionSnapshot) -> Decision {
    if snapshot.loading {
        return Decision::Loading;
    }
    if route == Route::NotFound {
        return Decision::RedirectTo(Route::Home);
    }

    match (snapshot.session.is_some(), snapshot.onboarding_complete) {
        (false, _) => match route {
            Route::Home => Decision::Render(View::Login),
            _ => Decision::RedirectTo(Route::Home),
        },
        (true, false) => match route {
            Route::Onboarding => Decision::Render(View::Onboarding),
            _ => Decision::RedirectTo(Route::Onboarding),
        },
        (true, true) => match route {
            Route::Dashboard => Decision::Render(View::Dashboard),
            Route::Settings => Decision::Render(View::Settings),
            _ => Decision::RedirectTo(Route::Dashboard),
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct GateProps {
    pub route: Route,
}

#[function_component(Gate)]
pub fn gate(props: &GateProps) -> Html {
    let snapshot = use_session();

    match decide(props.route, &snapshot) {
        Decision::Loading => html! {
            <div class={classes!("min-h-screen", "flex", "items-center", "justify-center", styles::PAGE_BG)}>
                <Spinner size={SpinnerSize::Large} text="Getting things ready…" />
            </div>
        },
        Decision::RedirectTo(to) => html! { <Redirect<Route> {to} /> },
        Decision::Render(View::Login) => html! { <LoginPage /> },
        Decision::Render(View::Onboarding) => html! { <OnboardingPage /> },
        Decision::Render(View::Dashboard) => html! { <DashboardPage /> },
        Decision::Render(View::Settings) => html! { <SettingsPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_frontend_common::backend::testing::session;

    const ALL_ROUTES: [Route; 5] = [
        Route::Home,
        Route::Onboarding,
        Route::Dashboard,
        Route::Settings,
        Route::NotFound,
    ];

    fn unauthenticated() -> SessionSnapshot {
        SessionSnapshot {
            session: None,
            onboarding_complete: false,
            loading: false,
        }
    }

    fn authenticated(onboarding_complete: bool) -> SessionSnapshot {
        SessionSnapshot {
            session: Some(session("u1")),
            onboarding_complete,
            loading: false,
        }
    }

    #[test]
    fn loading_suppresses_every_routing_decision() {
        let snapshot = SessionSnapshot {
            session: Some(session("u1")),
            onboarding_complete: true,
            loading: true,
        };
        for route in ALL_ROUTES {
            assert_eq!(decide(route, &snapshot), Decision::Loading);
        }
    }

    #[test]
    fn without_session_everything_leads_to_login() {
        let snapshot = unauthenticated();
        assert_eq!(decide(Route::Home, &snapshot), Decision::Render(View::Login));
        for route in [Route::Onboarding, Route::Dashboard, Route::Settings] {
            assert_eq!(decide(route, &snapshot), Decision::RedirectTo(Route::Home));
        }
    }

    #[test]
    fn incomplete_onboarding_funnels_into_the_wizard() {
        let snapshot = authenticated(false);
        assert_eq!(
            decide(Route::Onboarding, &snapshot),
            Decision::Render(View::Onboarding)
        );
        for route in [Route::Home, Route::Dashboard, Route::Settings] {
            assert_eq!(
                decide(route, &snapshot),
                Decision::RedirectTo(Route::Onboarding)
            );
        }
    }

    #[test]
    fn onboarded_users_get_the_dashboard_and_settings() {
        let snapshot = authenticated(true);
        assert_eq!(
            decide(Route::Dashboard, &snapshot),
            Decision::Render(View::Dashboard)
        );
        assert_eq!(
            decide(Route::Settings, &snapshot),
            Decision::Render(View::Settings)
        );
        assert_eq!(
            decide(Route::Home, &snapshot),
            Decision::RedirectTo(Route::Dashboard)
        );
    }

    #[test]
    fn revisiting_onboarding_after_completion_always_redirects() {
        let snapshot = authenticated(true);
        // Idempotent: no number of visits re-renders the wizard.
        for _ in 0..2 {
            assert_eq!(
                decide(Route::Onboarding, &snapshot),
                Decision::RedirectTo(Route::Dashboard)
            );
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_root_in_every_state() {
        for snapshot in [unauthenticated(), authenticated(false), authenticated(true)] {
            assert_eq!(
                decide(Route::NotFound, &snapshot),
                Decision::RedirectTo(Route::Home)
            );
        }
    }
}
