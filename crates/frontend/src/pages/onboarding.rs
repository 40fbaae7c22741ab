//! Three-step onboarding wizard: goal → name/age → AI-insights teaser.
//!
//! Forward-only. The final step performs the completion write; if that
//! write fails the wizard stays put and shows the error instead of
//! navigating, so the backend and the UI can never silently disagree about
//! whether onboarding happened.

use crate::routes::Route;
use bloom_frontend_common::backend::Goal;
use bloom_frontend_common::services::{OnboardingAnswers, ProfileService};
use bloom_frontend_common::{use_backend, use_session, use_session_control, validate};
use bloom_ui::{styles, Button, ButtonSize, ButtonVariant, GoalTile, InputField, InputState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Goal,
    Name,
    AiIntro,
}

impl Step {
    const fn index(self) -> usize {
        match self {
            Self::Goal => 0,
            Self::Name => 1,
            Self::AiIntro => 2,
        }
    }
}

fn progress_bar(current: Step) -> Html {
    html! {
        <div class="flex gap-1.5 items-center justify-center">
            { for (0..3).map(|i| {
                let fill = if i <= current.index() { "bg-indigo-600" } else { "bg-neutral-200 dark:bg-neutral-700" };
                html! { <div class={classes!("w-10", "h-2", "rounded-full", fill)} /> }
            }) }
        </div>
    }
}

#[function_component(OnboardingPage)]
pub fn onboarding_page() -> Html {
    let backend = use_backend();
    let snapshot = use_session();
    let control = use_session_control();
    let navigator = use_navigator().expect("navigator not available outside a router");

    let step = use_state(|| Step::Goal);
    let goal = use_state(|| None::<Goal>);
    let name = use_state(String::new);
    let age = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_select_goal = {
        let goal = goal.clone();
        Callback::from(move |selected: Goal| goal.set(Some(selected)))
    };

    let on_goal_next = {
        let step = step.clone();
        let goal = goal.clone();
        Callback::from(move |_: MouseEvent| {
            if goal.is_some() {
                step.set(Step::Name);
            }
        })
    };

    let on_name_input = {
        let name = name.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            error.set(None);
        })
    };

    let on_age_input = {
        let age = age.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            age.set(input.value());
            error.set(None);
        })
    };

    let on_name_next = {
        let step = step.clone();
        let name = name.clone();
        let age = age.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(message) = validate::display_name(&name) {
                error.set(Some(message.to_owned()));
                return;
            }
            if let Err(message) = validate::age(&age) {
                error.set(Some(message.to_owned()));
                return;
            }
            error.set(None);
            step.set(Step::AiIntro);
        })
    };

    let on_finish = {
        let backend = backend.clone();
        let refresh = control.refresh.clone();
        let navigator = navigator.clone();
        let user_id = snapshot.user_id().map(str::to_owned);
        let goal = goal.clone();
        let name = name.clone();
        let age = age.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |_: MouseEvent| {
            if *saving {
                return;
            }
            let (Some(user_id), Some(goal)) = (user_id.clone(), *goal) else {
                return;
            };
            let display_name = match validate::display_name(&name) {
                Ok(trimmed) => trimmed.to_owned(),
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
            let parsed_age = validate::age(&age).unwrap_or(None);

            saving.set(true);
            error.set(None);
            let service = ProfileService::new(backend.clone());
            let refresh = refresh.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let saving = saving.clone();
            spawn_local(async move {
                let answers = OnboardingAnswers {
                    goal,
                    display_name,
                    age: parsed_age,
                };
                match service.complete_onboarding(&user_id, &answers).await {
                    Ok(()) => {
                        refresh.emit(());
                        navigator.push(&Route::Dashboard);
                    }
                    Err(err) => {
                        log::error!("onboarding completion write failed: {err}");
                        saving.set(false);
                        error.set(Some(
                            "We couldn't save your answers. Please try again.".to_owned(),
                        ));
                    }
                }
            });
        })
    };

    let content = match *step {
        Step::Goal => html! {
            <>
                <div class="text-center">
                    <h1 class={classes!("text-4xl", "font-bold", "tracking-tight", "mb-2", styles::PRIMARY_TEXT)}>
                        {"What do you want to improve?"}
                    </h1>
                    <p class={classes!("text-base", "m-0", styles::SECONDARY_TEXT)}>
                        {"Select a goal to get started"}
                    </p>
                </div>
                <div class="grid grid-cols-3 gap-3">
                    { for Goal::ALL.iter().map(|&g| {
                        let on_select_goal = on_select_goal.clone();
                        html! {
                            <GoalTile
                                icon={g.icon()}
                                label={g.label()}
                                selected={*goal == Some(g)}
                                onclick={Callback::from(move |_| on_select_goal.emit(g))}
                            />
                        }
                    }) }
                </div>
                <Button
                    size={ButtonSize::Large}
                    variant={ButtonVariant::Primary}
                    disabled={goal.is_none()}
                    onclick={on_goal_next}
                >
                    {"Next"}
                </Button>
            </>
        },
        Step::Name => html! {
            <>
                <div class="text-center">
                    <h1 class={classes!("text-4xl", "font-bold", "tracking-tight", "mb-2", styles::PRIMARY_TEXT)}>
                        {"Tell us about yourself"}
                    </h1>
                    <p class={classes!("text-base", "m-0", styles::SECONDARY_TEXT)}>
                        {"We'll use this to personalize your experience"}
                    </p>
                </div>
                <InputField
                    label="Your name"
                    placeholder="Enter your name"
                    value={(*name).clone()}
                    oninput={on_name_input}
                    state={if error.is_some() { InputState::Error } else { InputState::Default }}
                />
                <InputField
                    label="Age (optional)"
                    placeholder="Enter your age"
                    value={(*age).clone()}
                    oninput={on_age_input}
                />
                if let Some(message) = &*error {
                    <p class={classes!("text-sm", "m-0", styles::ERROR_TEXT)}>{message}</p>
                }
                <Button size={ButtonSize::Large} variant={ButtonVariant::Primary} onclick={on_name_next}>
                    {"Continue"}
                </Button>
            </>
        },
        Step::AiIntro => html! {
            <>
                <div class="text-center">
                    <span class="text-5xl block mb-4">{"✨"}</span>
                    <h1 class={classes!("text-4xl", "font-bold", "tracking-tight", "mb-2", styles::PRIMARY_TEXT)}>
                        {"Insights that grow with you"}
                    </h1>
                    <p class={classes!("text-base", "m-0", styles::SECONDARY_TEXT)}>
                        {"Bloom learns from your check-ins and surfaces gentle, personalized nudges to keep your streaks alive."}
                    </p>
                </div>
                if let Some(message) = &*error {
                    <div class={classes!("p-3", "rounded-lg", "text-sm", styles::ERROR_BG, styles::ERROR_TEXT)}>
                        {message}
                    </div>
                }
                <Button
                    size={ButtonSize::Large}
                    variant={ButtonVariant::Primary}
                    disabled={*saving}
                    onclick={on_finish}
                >
                    { if *saving { "Saving…" } else { "Start growing" } }
                </Button>
            </>
        },
    };

    html! {
        <div class={classes!("min-h-screen", "flex", "items-center", "justify-center", "p-6", styles::PAGE_BG)}>
            <div class={classes!("w-full", "max-w-md", "p-6", "flex", "flex-col", "gap-8", styles::CARD_BG, styles::ROUNDED_CARD, styles::CARD_SHADOW)}>
                {progress_bar(*step)}
                {content}
            </div>
        </div>
    }
}
