//! Magic-link sign-in page.

use bloom_frontend_common::backend::Backend;
use bloom_frontend_common::{use_backend, validate, AppConfig};
use bloom_ui::{styles, Button, ButtonSize, ButtonVariant, InputField, InputState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Status {
    Idle,
    Sending,
    Error(String),
    Success,
}

/// Run one submit attempt: validation failures never reach the network, a
/// valid address issues exactly one sign-in call.
async fn submit(backend: &dyn Backend, email: &str, redirect_to: &str) -> Status {
    let address = match validate::email(email) {
        Ok(()) => email.trim(),
        Err(message) => return Status::Error(message.to_owned()),
    };

    match backend.sign_in_with_magic_link(address, redirect_to).await {
        Ok(()) => Status::Success,
        Err(err) => {
            log::error!("magic link request failed: {err}");
            Status::Error("Couldn't send the link. Please try again.".to_owned())
        }
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let backend = use_backend();
    let email = use_state(String::new);
    let status = use_state(|| Status::Idle);

    let on_email_input = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            // Typing clears a previous validation error.
            if matches!(*status, Status::Error(_)) {
                status.set(Status::Idle);
            }
        })
    };

    let on_submit = {
        let backend = backend.clone();
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == Status::Sending {
                return;
            }
            status.set(Status::Sending);

            let backend = backend.clone();
            let email = (*email).clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = submit(backend.as_ref(), &email, &AppConfig::site_url()).await;
                status.set(outcome);
            });
        })
    };

    let header = html! {
        <div class="text-center mb-10">
            <div class="inline-flex items-center justify-center w-16 h-16 bg-indigo-600 rounded-2xl mb-6 shadow-lg">
                <span class="text-3xl">{"🌱"}</span>
            </div>
            <h1 class={classes!("text-4xl", "font-bold", "mb-2", styles::PRIMARY_TEXT)}>{"Bloom"}</h1>
            <p class={classes!("text-base", "m-0", styles::SECONDARY_TEXT)}>
                {"Cultivate habits that help you grow"}
            </p>
        </div>
    };

    let body = if *status == Status::Success {
        html! {
            <div class={classes!(styles::FLEX_COL_GAP_4)}>
                <InputField value={(*email).clone()} readonly=true state={InputState::Success} />
                <p class={classes!("text-sm", "text-center", "m-0", styles::SUCCESS_TEXT)}>
                    {"Magic link sent! Check your inbox"}
                </p>
                <Button size={ButtonSize::Large} variant={ButtonVariant::Primary}>
                    {"Check your email"}
                </Button>
            </div>
        }
    } else {
        let (input_state, error_message) = match &*status {
            Status::Error(message) => (InputState::Error, Some(message.clone())),
            _ => (InputState::Default, None),
        };
        html! {
            <form class={classes!(styles::FLEX_COL_GAP_4)} onsubmit={on_submit}>
                <InputField
                    input_type="email"
                    placeholder="Enter your email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    state={input_state}
                />
                if let Some(message) = error_message {
                    <p class={classes!("text-sm", "m-0", styles::ERROR_TEXT)}>{message}</p>
                }
                <Button
                    button_type="submit"
                    size={ButtonSize::Large}
                    variant={ButtonVariant::Primary}
                    disabled={*status == Status::Sending}
                >
                    { if *status == Status::Sending { "Sending…" } else { "Send magic link" } }
                </Button>
            </form>
        }
    };

    html! {
        <div class={classes!("min-h-screen", "flex", "items-center", "justify-center", "px-4", styles::PAGE_BG)}>
            <div class={classes!("max-w-lg", "w-full", "p-10", styles::CARD_BG, styles::ROUNDED_CARD, styles::CARD_SHADOW)}>
                {header}
                {body}
                <p class={classes!("text-sm", "text-center", "mt-8", "m-0", styles::MUTED_TEXT)}>
                    {"No passwords. Just good habits."}
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_frontend_common::backend::testing::FakeBackend;
    use futures::executor::block_on;

    #[test]
    fn invalid_email_never_reaches_the_network() {
        let backend = FakeBackend::new();

        let outcome = block_on(submit(&backend, "not-an-email", "https://app.example"));
        assert_eq!(
            outcome,
            Status::Error("Enter a valid email address".to_owned())
        );
        assert_eq!(backend.call_count("sign_in_with_magic_link"), 0);

        let outcome = block_on(submit(&backend, "", "https://app.example"));
        assert_eq!(outcome, Status::Error("Email is required".to_owned()));
        assert_eq!(backend.call_count("sign_in_with_magic_link"), 0);
    }

    #[test]
    fn valid_email_issues_exactly_one_call_and_succeeds() {
        let backend = FakeBackend::new();

        let outcome = block_on(submit(&backend, "user@example.com", "https://app.example"));
        assert_eq!(outcome, Status::Success);
        assert_eq!(backend.call_count("sign_in_with_magic_link"), 1);
    }

    #[test]
    fn backend_failure_surfaces_an_inline_error() {
        let backend = FakeBackend::new();
        backend.fail_on("sign_in_with_magic_link");

        let outcome = block_on(submit(&backend, "user@example.com", "https://app.example"));
        assert!(matches!(outcome, Status::Error(_)));
        assert_eq!(backend.call_count("sign_in_with_magic_link"), 1);
    }
}
