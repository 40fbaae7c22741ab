use crate::routes::{Gate, Route};
use bloom_frontend_common::backend::SharedBackend;
use bloom_frontend_common::{BackendProvider, SessionProvider, SupabaseClient, ThemeProvider};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

fn switch(route: Route) -> Html {
    html! { <Gate {route} /> }
}

#[function_component(App)]
pub fn app() -> Html {
    // One client for the whole app lifetime. Magic-link redirects are
    // consumed before the session resolver mounts so the resolver's first
    // fetch already sees the redeemed session.
    let backend = use_memo((), |_| {
        let client = SupabaseClient::from_env();
        client.resume_from_redirect();
        Rc::new(client) as SharedBackend
    });

    html! {
        <ThemeProvider>
            <BackendProvider backend={(*backend).clone()}>
                <SessionProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </SessionProvider>
            </BackendProvider>
        </ThemeProvider>
    }
}
