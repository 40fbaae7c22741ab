//! Dashboard: the habit board with check-ins, streaks and the create/edit
//! dialog.
//!
//! Check-in toggles and deletes apply optimistically and roll back on a
//! failed write; creates and edits go through the dialog and trigger a
//! refetch on success so the board reflects server-assigned fields.

use crate::components::{HabitCard, HabitDraft, HabitModal, HabitModalMode, Header, Sidebar};
use crate::routes::Route;
use bloom_frontend_common::backend::{CheckIn, HabitPatch, NewHabit};
use bloom_frontend_common::services::{
    greeting_name, remove_habit, restore_habit, HabitBoard, HabitService, ProfileService,
};
use bloom_frontend_common::{prefs, use_backend, use_session};
use bloom_ui::{styles, Button, ButtonSize, ButtonVariant, Spinner, SpinnerSize};
use chrono::Local;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let backend = use_backend();
    let snapshot = use_session();
    let user_id = snapshot.user_id().map(str::to_owned);
    let email = snapshot.session.as_ref().and_then(|s| s.email.clone());

    let board = use_state(|| None::<HabitBoard>);
    let greeting = use_state(|| None::<String>);
    let load_failed = use_state(|| false);
    let reload = use_state(|| 0u32);
    let banner_error = use_state(|| None::<String>);

    let modal = use_state(|| None::<HabitModalMode>);
    let modal_saving = use_state(|| false);
    let modal_error = use_state(|| None::<String>);

    let collapsed = use_state(prefs::load_sidebar_collapsed);

    let today = Local::now().date_naive();

    // Load the board whenever the user or the reload tick changes.
    {
        let backend = backend.clone();
        let board = board.clone();
        let load_failed = load_failed.clone();
        use_effect_with((user_id.clone(), *reload), move |(user_id, _)| {
            let Some(user_id) = user_id.clone() else {
                return;
            };
            let service = HabitService::new(backend.clone());
            spawn_local(async move {
                match service.load(&user_id, Local::now().date_naive()).await {
                    Ok(loaded) => {
                        load_failed.set(false);
                        board.set(Some(loaded));
                    }
                    Err(err) => {
                        log::error!("failed to load habits: {err}");
                        load_failed.set(true);
                    }
                }
            });
        });
    }

    // Greeting name, best-effort: a failed profile fetch falls back to the
    // email local part.
    {
        let backend = backend.clone();
        let greeting = greeting.clone();
        let email = email.clone();
        use_effect_with(user_id.clone(), move |user_id| {
            let Some(user_id) = user_id.clone() else {
                return;
            };
            let service = ProfileService::new(backend.clone());
            spawn_local(async move {
                let profile = service.fetch(&user_id).await.unwrap_or_else(|err| {
                    log::warn!("failed to fetch profile for greeting: {err}");
                    None
                });
                greeting.set(Some(greeting_name(profile.as_ref(), email.as_deref())));
            });
        });
    }

    let on_toggle_sidebar = {
        let collapsed = collapsed.clone();
        Callback::from(move |()| {
            let next = !*collapsed;
            prefs::store_sidebar_collapsed(next);
            collapsed.set(next);
        })
    };

    let on_logout = {
        let backend = backend.clone();
        Callback::from(move |()| {
            let backend = backend.clone();
            spawn_local(async move {
                if let Err(err) = backend.sign_out().await {
                    log::warn!("sign-out failed: {err}");
                }
            });
        })
    };

    let on_toggle_check = {
        let backend = backend.clone();
        let board = board.clone();
        let banner_error = banner_error.clone();
        let user_id = user_id.clone();
        Callback::from(move |(habit_id, checked): (String, bool)| {
            let (Some(current), Some(user_id)) = ((*board).clone(), user_id.clone()) else {
                return;
            };

            let mut updated = current;
            updated.set_checked(&habit_id, today, checked);
            board.set(Some(updated.clone()));
            banner_error.set(None);

            let service = HabitService::new(backend.clone());
            let board = board.clone();
            let banner_error = banner_error.clone();
            spawn_local(async move {
                let check_in = CheckIn {
                    habit_id: habit_id.clone(),
                    user_id,
                    date: today,
                };
                if let Err(err) = service.set_check_in(check_in, checked).await {
                    log::error!("check-in write failed: {err}");
                    let mut reverted = updated;
                    reverted.set_checked(&habit_id, today, !checked);
                    board.set(Some(reverted));
                    banner_error.set(Some("Couldn't save your check-in.".to_owned()));
                }
            });
        })
    };

    let on_delete = {
        let backend = backend.clone();
        let board = board.clone();
        let banner_error = banner_error.clone();
        Callback::from(move |habit_id: String| {
            let Some(mut updated) = (*board).clone() else {
                return;
            };
            let Some((index, removed)) = remove_habit(&mut updated.habits, &habit_id) else {
                return;
            };
            board.set(Some(updated.clone()));
            banner_error.set(None);

            let service = HabitService::new(backend.clone());
            let board = board.clone();
            let banner_error = banner_error.clone();
            spawn_local(async move {
                if let Err(err) = service.delete(&habit_id).await {
                    log::error!("habit delete failed: {err}");
                    let mut restored = updated;
                    restore_habit(&mut restored.habits, index, removed);
                    board.set(Some(restored));
                    banner_error.set(Some("Couldn't delete the habit.".to_owned()));
                }
            });
        })
    };

    let on_add = {
        let modal = modal.clone();
        let modal_error = modal_error.clone();
        Callback::from(move |_: MouseEvent| {
            modal_error.set(None);
            modal.set(Some(HabitModalMode::Create));
        })
    };
    let on_edit = {
        let modal = modal.clone();
        let modal_error = modal_error.clone();
        Callback::from(move |habit| {
            modal_error.set(None);
            modal.set(Some(HabitModalMode::Edit(habit)));
        })
    };
    let on_modal_close = {
        let modal = modal.clone();
        Callback::from(move |()| modal.set(None))
    };

    let on_modal_submit = {
        let backend = backend.clone();
        let modal = modal.clone();
        let modal_saving = modal_saving.clone();
        let modal_error = modal_error.clone();
        let reload = reload.clone();
        let user_id = user_id.clone();
        let mode = (*modal).clone();
        Callback::from(move |draft: HabitDraft| {
            let (Some(mode), Some(user_id)) = (mode.clone(), user_id.clone()) else {
                return;
            };
            modal_saving.set(true);
            modal_error.set(None);

            let service = HabitService::new(backend.clone());
            let modal = modal.clone();
            let modal_saving = modal_saving.clone();
            let modal_error = modal_error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let result = match mode {
                    HabitModalMode::Create => service
                        .create(NewHabit {
                            user_id,
                            title: draft.title,
                            frequency: draft.frequency,
                            preferred_time: draft.preferred_time,
                            color: draft.color,
                        })
                        .await
                        .map(|_| ()),
                    HabitModalMode::Edit(habit) => service
                        .update(
                            &habit.id,
                            HabitPatch {
                                title: draft.title,
                                frequency: draft.frequency,
                                preferred_time: draft.preferred_time,
                                color: draft.color,
                            },
                        )
                        .await,
                };
                modal_saving.set(false);
                match result {
                    Ok(()) => {
                        modal.set(None);
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        log::error!("habit write failed: {err}");
                        modal_error.set(Some(
                            "We couldn't save your habit. Please try again.".to_owned(),
                        ));
                    }
                }
            });
        })
    };

    let content = if *load_failed {
        let on_retry = {
            let reload = reload.clone();
            let load_failed = load_failed.clone();
            Callback::from(move |_: MouseEvent| {
                load_failed.set(false);
                reload.set(*reload + 1);
            })
        };
        html! {
            <div class={classes!("p-6", "text-center", styles::FLEX_COL_GAP_4, styles::CARD_BG, styles::ROUNDED_CARD)}>
                <p class={classes!("m-0", styles::ERROR_TEXT)}>
                    {"We couldn't load your habits."}
                </p>
                <div>
                    <Button variant={ButtonVariant::Secondary} onclick={on_retry}>{"Retry"}</Button>
                </div>
            </div>
        }
    } else {
        match &*board {
            None => html! {
                <div class="flex justify-center py-20">
                    <Spinner size={SpinnerSize::Large} />
                </div>
            },
            Some(loaded) if loaded.habits.is_empty() => html! {
                <div class={classes!("p-10", "text-center", styles::FLEX_COL_GAP_4, styles::CARD_BG, styles::ROUNDED_CARD)}>
                    <span class="text-4xl">{"🌱"}</span>
                    <p class={classes!("m-0", styles::SECONDARY_TEXT)}>
                        {"No habits yet. Plant your first one."}
                    </p>
                    <div>
                        <Button variant={ButtonVariant::Primary} onclick={on_add.clone()}>
                            {"Add a habit"}
                        </Button>
                    </div>
                </div>
            },
            Some(loaded) => html! {
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                    { for loaded.habits.iter().map(|habit| {
                        let habit_id = habit.id.clone();
                        let on_toggle = {
                            let on_toggle_check = on_toggle_check.clone();
                            let habit_id = habit_id.clone();
                            Callback::from(move |checked: bool| {
                                on_toggle_check.emit((habit_id.clone(), checked));
                            })
                        };
                        html! {
                            <HabitCard
                                key={habit_id.clone()}
                                habit={habit.clone()}
                                checked_today={loaded.is_checked(&habit_id, today)}
                                streak={loaded.streak(&habit_id, today)}
                                dots={loaded.dots(&habit_id, today)}
                                {on_toggle}
                                on_edit={on_edit.clone()}
                                on_delete={on_delete.clone()}
                            />
                        }
                    }) }
                </div>
            },
        }
    };

    let name = greeting.as_deref().unwrap_or("there").to_owned();

    html! {
        <div class={classes!("min-h-screen", "flex", styles::PAGE_BG)}>
            <Sidebar
                active={Route::Dashboard}
                collapsed={*collapsed}
                on_toggle={on_toggle_sidebar}
                on_logout={on_logout}
            />
            <main class="flex-1 p-8 max-w-6xl mx-auto">
                <Header
                    name={name}
                    subtitle={Some(AttrValue::from(today.format("%A, %B %-d").to_string()))}
                />

                if let Some(message) = &*banner_error {
                    <div class={classes!("p-3", "mb-4", "rounded-lg", "text-sm", styles::ERROR_BG, styles::ERROR_TEXT)}>
                        {message}
                    </div>
                }

                <div class={classes!("mb-6", styles::FLEX_BETWEEN)}>
                    <h2 class={classes!("text-xl", "font-semibold", "m-0", styles::PRIMARY_TEXT)}>
                        {"Your habits"}
                    </h2>
                    <Button variant={ButtonVariant::Primary} size={ButtonSize::Medium} onclick={on_add.clone()}>
                        {"+ New habit"}
                    </Button>
                </div>

                {content}

                <HabitModal
                    open={modal.is_some()}
                    mode={(*modal).clone().unwrap_or(HabitModalMode::Create)}
                    saving={*modal_saving}
                    error={(*modal_error).clone().map(AttrValue::from)}
                    on_close={on_modal_close}
                    on_submit={on_modal_submit}
                />
            </main>
        </div>
    }
}
