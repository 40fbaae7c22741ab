//! Settings: profile summary, appearance, notification flags and the
//! danger zone.
//!
//! Notification flags live in browser local storage only; toggling one
//! writes fire-and-forget and never blocks the UI.

use crate::components::{Header, Sidebar};
use crate::routes::Route;
use bloom_frontend_common::backend::UserProfile;
use bloom_frontend_common::services::{greeting_name, ProfileService};
use bloom_frontend_common::{prefs, use_backend, use_session, use_theme, AppConfig, ThemeAction};
use bloom_ui::{styles, Button, ButtonVariant, Modal, ToggleSwitch};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn section(title: &str, children: Html) -> Html {
    html! {
        <section class={classes!("p-6", "mb-6", styles::CARD_BG, styles::ROUNDED_CARD, styles::CARD_SHADOW)}>
            <h2 class={classes!("text-lg", "font-semibold", "m-0", "mb-4", styles::PRIMARY_TEXT)}>
                {title}
            </h2>
            {children}
        </section>
    }
}

fn toggle_row(label: &str, description: &str, checked: bool, onchange: Callback<bool>) -> Html {
    html! {
        <div class={classes!("py-3", styles::FLEX_BETWEEN)}>
            <div>
                <p class={classes!("text-sm", "font-medium", "m-0", styles::PRIMARY_TEXT)}>{label}</p>
                <p class={classes!("text-xs", "m-0", styles::MUTED_TEXT)}>{description}</p>
            </div>
            <ToggleSwitch {checked} {onchange} />
        </div>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let backend = use_backend();
    let snapshot = use_session();
    let theme = use_theme();
    let user_id = snapshot.user_id().map(str::to_owned);
    let email = snapshot.session.as_ref().and_then(|s| s.email.clone());

    let profile = use_state(|| None::<UserProfile>);
    let notifications = use_state(prefs::NotificationPrefs::load);
    let collapsed = use_state(prefs::load_sidebar_collapsed);
    let confirm_delete = use_state(|| false);
    let deleting = use_state(|| false);
    let delete_error = use_state(|| None::<String>);

    {
        let backend = backend.clone();
        let profile = profile.clone();
        use_effect_with(user_id.clone(), move |user_id| {
            let Some(user_id) = user_id.clone() else {
                return;
            };
            let service = ProfileService::new(backend.clone());
            spawn_local(async move {
                match service.fetch(&user_id).await {
                    Ok(fetched) => profile.set(fetched),
                    Err(err) => log::warn!("failed to fetch profile: {err}"),
                }
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

    let set_notification = {
        let notifications = notifications.clone();
        move |key: &'static str, apply: fn(prefs::NotificationPrefs, bool) -> prefs::NotificationPrefs| {
            let notifications = notifications.clone();
            Callback::from(move |value: bool| {
                prefs::store_flag(key, value);
                notifications.set(apply(*notifications, value));
            })
        }
    };
    let on_daily = set_notification(AppConfig::DAILY_REMINDERS_KEY, |mut p, v| {
        p.daily_reminders = v;
        p
    });
    let on_weekly = set_notification(AppConfig::WEEKLY_SUMMARY_KEY, |mut p, v| {
        p.weekly_summary = v;
        p
    });
    let on_insights = set_notification(AppConfig::AI_INSIGHTS_KEY, |mut p, v| {
        p.ai_insights = v;
        p
    });

    let on_theme_change = {
        let theme = theme.clone();
        Callback::from(move |dark: bool| {
            let next = if dark {
                bloom_frontend_common::Theme::Dark
            } else {
                bloom_frontend_common::Theme::Light
            };
            theme.dispatch(ThemeAction::Set(next));
        })
    };

    let open_confirm = {
        let confirm_delete = confirm_delete.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_: MouseEvent| {
            delete_error.set(None);
            confirm_delete.set(true);
        })
    };
    let close_confirm = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |()| confirm_delete.set(false))
    };
    let cancel_confirm = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |_: MouseEvent| confirm_delete.set(false))
    };

    let on_delete_account = {
        let backend = backend.clone();
        let user_id = user_id.clone();
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_: MouseEvent| {
            if *deleting {
                return;
            }
            let Some(user_id) = user_id.clone() else {
                return;
            };
            deleting.set(true);
            let service = ProfileService::new(backend.clone());
            let deleting = deleting.clone();
            let delete_error = delete_error.clone();
            spawn_local(async move {
                // On success the sign-out notifies the session listeners
                // and the gate takes over; no navigation needed here.
                if let Err(err) = service.delete_account(&user_id).await {
                    log::error!("account deletion failed: {err}");
                    deleting.set(false);
                    delete_error.set(Some(
                        "We couldn't delete your account. Please try again.".to_owned(),
                    ));
                }
            });
        })
    };

    let name = greeting_name((*profile).as_ref(), email.as_deref());

    html! {
        <div class={classes!("min-h-screen", "flex", styles::PAGE_BG)}>
            <Sidebar
                active={Route::Settings}
                collapsed={*collapsed}
                on_toggle={on_toggle_sidebar}
                on_logout={on_logout.clone()}
            />
            <main class="flex-1 p-8 max-w-3xl mx-auto">
                <Header name={name.clone()} subtitle={Some(AttrValue::from("Settings"))} />

                {section("Profile", html! {
                    <div class={styles::FLEX_CENTER_GAP_2}>
                        <div class="w-12 h-12 rounded-full bg-indigo-600 flex items-center justify-center text-white text-lg font-semibold">
                            {name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                        </div>
                        <div>
                            <p class={classes!("text-sm", "font-medium", "m-0", styles::PRIMARY_TEXT)}>{&name}</p>
                            if let Some(email) = &email {
                                <p class={classes!("text-xs", "m-0", styles::MUTED_TEXT)}>{email}</p>
                            }
                        </div>
                    </div>
                })}

                {section("Appearance", toggle_row(
                    "Dark mode",
                    "Use the dark color scheme",
                    theme.theme.is_dark(),
                    on_theme_change,
                ))}

                {section("Notifications", html! {
                    <div class="divide-y divide-neutral-100 dark:divide-neutral-800">
                        {toggle_row(
                            "Daily reminders",
                            "A nudge to check in on your habits",
                            notifications.daily_reminders,
                            on_daily,
                        )}
                        {toggle_row(
                            "Weekly summary",
                            "A recap of your streaks every Monday",
                            notifications.weekly_summary,
                            on_weekly,
                        )}
                        {toggle_row(
                            "AI insights",
                            "Personalized suggestions based on your progress",
                            notifications.ai_insights,
                            on_insights,
                        )}
                    </div>
                })}

                {section("Danger zone", html! {
                    <div class={styles::FLEX_BETWEEN}>
                        <p class={classes!("text-sm", "m-0", styles::SECONDARY_TEXT)}>
                            {"Permanently delete your account and all of your data."}
                        </p>
                        <Button variant={ButtonVariant::Destructive} onclick={open_confirm}>
                            {"Delete account"}
                        </Button>
                    </div>
                })}

                <Modal open={*confirm_delete} title="Delete account?" on_close={close_confirm}>
                    <div class={styles::FLEX_COL_GAP_4}>
                        <p class={classes!("text-sm", "m-0", styles::SECONDARY_TEXT)}>
                            {"This removes your habits, check-ins and profile. There is no undo."}
                        </p>
                        if let Some(message) = &*delete_error {
                            <div class={classes!("p-3", "rounded-lg", "text-sm", styles::ERROR_BG, styles::ERROR_TEXT)}>
                                {message}
                            </div>
                        }
                        <div class="flex gap-3 justify-end">
                            <Button variant={ButtonVariant::Secondary} onclick={cancel_confirm}>
                                {"Cancel"}
                            </Button>
                            <Button
                                variant={ButtonVariant::Destructive}
                                disabled={*deleting}
                                onclick={on_delete_account}
                            >
                                { if *deleting { "Deleting…" } else { "Delete everything" } }
                            </Button>
                        </div>
                    </div>
                </Modal>
            </main>
        </div>
    }
}
