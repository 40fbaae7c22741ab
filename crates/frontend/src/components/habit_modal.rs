//! Create/edit habit dialog.
//!
//! The dialog owns its form fields; submission, persistence and the
//! resulting error state stay with the caller so a failed write keeps the
//! dialog open with everything the user typed.

use bloom_frontend_common::backend::{Frequency, Habit, PreferredTime};
use bloom_frontend_common::validate;
use bloom_ui::{styles, Button, ButtonSize, ButtonVariant, Dropdown, InputField, InputState, Modal};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum HabitModalMode {
    Create,
    Edit(Habit),
}

/// Validated form output, ready to become an insert or a patch.
#[derive(Clone, Debug, PartialEq)]
pub struct HabitDraft {
    pub title: String,
    pub frequency: Frequency,
    pub preferred_time: PreferredTime,
    pub color: String,
}

#[derive(Properties, Clone, PartialEq)]
pub struct HabitModalProps {
    pub open: bool,
    pub mode: HabitModalMode,
    pub saving: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_close: Callback<()>,
    pub on_submit: Callback<HabitDraft>,
}

fn default_color() -> String {
    styles::HABIT_PALETTE
        .first()
        .copied()
        .unwrap_or("#4f46e5")
        .to_owned()
}

#[function_component(HabitModal)]
pub fn habit_modal(props: &HabitModalProps) -> Html {
    let title = use_state(String::new);
    let frequency = use_state(|| Frequency::Daily);
    let preferred_time = use_state(|| PreferredTime::Morning);
    let color = use_state(default_color);
    let title_error = use_state(|| None::<&'static str>);

    // Seed the fields each time the dialog opens.
    {
        let title = title.clone();
        let frequency = frequency.clone();
        let preferred_time = preferred_time.clone();
        let color = color.clone();
        let title_error = title_error.clone();
        use_effect_with((props.open, props.mode.clone()), move |(open, mode)| {
            if *open {
                match mode {
                    HabitModalMode::Create => {
                        title.set(String::new());
                        frequency.set(Frequency::Daily);
                        preferred_time.set(PreferredTime::Morning);
                        color.set(default_color());
                    }
                    HabitModalMode::Edit(habit) => {
                        title.set(habit.title.clone());
                        frequency.set(habit.frequency);
                        preferred_time.set(habit.preferred_time);
                        color.set(habit.color.clone());
                    }
                }
                title_error.set(None);
            }
        });
    }

    let on_title_input = {
        let title = title.clone();
        let title_error = title_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
            title_error.set(None);
        })
    };

    let on_frequency_change = {
        let frequency = frequency.clone();
        Callback::from(move |value: String| {
            if let Some(parsed) = Frequency::parse(&value) {
                frequency.set(parsed);
            }
        })
    };

    let on_time_change = {
        let preferred_time = preferred_time.clone();
        Callback::from(move |value: String| {
            if let Some(parsed) = PreferredTime::parse(&value) {
                preferred_time.set(parsed);
            }
        })
    };

    let on_submit = {
        let title = title.clone();
        let frequency = frequency.clone();
        let preferred_time = preferred_time.clone();
        let color = color.clone();
        let title_error = title_error.clone();
        let on_submit = props.on_submit.clone();
        let saving = props.saving;
        Callback::from(move |_: MouseEvent| {
            if saving {
                return;
            }
            let trimmed = match validate::habit_title(&title) {
                Ok(trimmed) => trimmed.to_owned(),
                Err(message) => {
                    title_error.set(Some(message));
                    return;
                }
            };
            on_submit.emit(HabitDraft {
                title: trimmed,
                frequency: *frequency,
                preferred_time: *preferred_time,
                color: (*color).clone(),
            });
        })
    };

    let (dialog_title, submit_label) = match &props.mode {
        HabitModalMode::Create => ("New habit", "Create habit"),
        HabitModalMode::Edit(_) => ("Edit habit", "Save changes"),
    };

    html! {
        <Modal open={props.open} title={dialog_title} on_close={props.on_close.clone()}>
            <div class={styles::FLEX_COL_GAP_4}>
                <InputField
                    label="Habit name"
                    placeholder="e.g. Read for 20 minutes"
                    value={(*title).clone()}
                    oninput={on_title_input}
                    state={if title_error.is_some() { InputState::Error } else { InputState::Default }}
                    helper_text={(*title_error).map(AttrValue::from)}
                />
                <Dropdown
                    label="Frequency"
                    options={Frequency::ALL.iter().map(|f| AttrValue::from(f.as_str())).collect::<Vec<_>>()}
                    value={AttrValue::from(frequency.as_str())}
                    onchange={on_frequency_change}
                />
                <Dropdown
                    label="Preferred time"
                    options={PreferredTime::ALL.iter().map(|t| AttrValue::from(t.as_str())).collect::<Vec<_>>()}
                    value={AttrValue::from(preferred_time.as_str())}
                    onchange={on_time_change}
                />
                <div class={styles::FLEX_COL}>
                    <span class={classes!("text-sm", "font-medium", "mb-2", styles::PRIMARY_TEXT)}>
                        {"Color"}
                    </span>
                    <div class={styles::FLEX_CENTER_GAP_2}>
                        { for styles::HABIT_PALETTE.iter().map(|&swatch| {
                            let selected = *color == swatch;
                            let color = color.clone();
                            let ring = if selected {
                                "ring-2 ring-offset-2 ring-indigo-600 dark:ring-offset-[#171717]"
                            } else {
                                ""
                            };
                            html! {
                                <button
                                    type="button"
                                    class={classes!("w-7", "h-7", "rounded-full", "border-0", "cursor-pointer", ring)}
                                    style={format!("background-color: {swatch};")}
                                    onclick={Callback::from(move |_| color.set(swatch.to_owned()))}
                                    aria-label={format!("Pick color {swatch}")}
                                />
                            }
                        }) }
                    </div>
                </div>

                if let Some(message) = &props.error {
                    <div class={classes!("p-3", "rounded-lg", "text-sm", styles::ERROR_BG, styles::ERROR_TEXT)}>
                        {message}
                    </div>
                }

                <Button
                    size={ButtonSize::Large}
                    variant={ButtonVariant::Primary}
                    disabled={props.saving}
                    onclick={on_submit}
                >
                    { if props.saving { "Saving…" } else { submit_label } }
                </Button>
            </div>
        </Modal>
    }
}
