//! A single habit on the dashboard: today's check toggle, the current
//! streak, and a trailing 30-day completion strip.

use bloom_frontend_common::backend::Habit;
use bloom_ui::styles;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HabitCardProps {
    pub habit: Habit,
    pub checked_today: bool,
    pub streak: u32,
    /// Completion dots, oldest first.
    pub dots: Vec<bool>,
    /// Emits the desired checked state for today.
    pub on_toggle: Callback<bool>,
    pub on_edit: Callback<Habit>,
    pub on_delete: Callback<String>,
}

#[function_component(HabitCard)]
pub fn habit_card(props: &HabitCardProps) -> Html {
    let habit = &props.habit;

    let on_check = {
        let on_toggle = props.on_toggle.clone();
        let next = !props.checked_today;
        Callback::from(move |_: MouseEvent| on_toggle.emit(next))
    };
    let on_edit = {
        let on_edit = props.on_edit.clone();
        let habit = habit.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(habit.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = habit.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    let check_style = if props.checked_today {
        format!("background-color: {}; border-color: {};", habit.color, habit.color)
    } else {
        String::new()
    };
    let check_class = if props.checked_today {
        "text-white"
    } else {
        "border-2 border-neutral-300 dark:border-neutral-600 bg-transparent"
    };

    html! {
        <div class={classes!("p-5", "flex", "flex-col", "gap-4", styles::CARD_BG, styles::ROUNDED_CARD, styles::CARD_SHADOW)}>
            <div class={styles::FLEX_BETWEEN}>
                <div class={styles::FLEX_CENTER_GAP_2}>
                    <span
                        class="w-3 h-3 rounded-full inline-block"
                        style={format!("background-color: {};", habit.color)}
                    />
                    <div>
                        <h3 class={classes!("text-base", "font-semibold", "m-0", styles::PRIMARY_TEXT)}>
                            {&habit.title}
                        </h3>
                        <p class={classes!("text-xs", "m-0", styles::MUTED_TEXT)}>
                            {format!("{} · {}", habit.frequency.as_str(), habit.preferred_time.as_str())}
                        </p>
                    </div>
                </div>
                <div class={styles::FLEX_CENTER_GAP_2}>
                    <button
                        class={classes!("bg-transparent", "border-0", "cursor-pointer", "text-sm", styles::MUTED_TEXT)}
                        onclick={on_edit}
                        aria-label="Edit habit"
                    >
                        {"✏️"}
                    </button>
                    <button
                        class={classes!("bg-transparent", "border-0", "cursor-pointer", "text-sm", styles::MUTED_TEXT)}
                        onclick={on_delete}
                        aria-label="Delete habit"
                    >
                        {"🗑️"}
                    </button>
                </div>
            </div>

            <div class="flex gap-1 flex-wrap">
                { for props.dots.iter().map(|&done| {
                    let dot_style = if done {
                        format!("background-color: {};", habit.color)
                    } else {
                        String::new()
                    };
                    let dot_class = if done { "" } else { "bg-neutral-200 dark:bg-neutral-700" };
                    html! {
                        <span
                            class={classes!("w-2", "h-2", "rounded-full", "inline-block", dot_class)}
                            style={dot_style}
                        />
                    }
                }) }
            </div>

            <div class={styles::FLEX_BETWEEN}>
                <span class={classes!("text-sm", "font-medium", styles::SECONDARY_TEXT)}>
                    {format!("🔥 {} day streak", props.streak)}
                </span>
                <button
                    class={classes!(
                        "w-9", "h-9", "rounded-full", "cursor-pointer", "text-base",
                        "flex", "items-center", "justify-center",
                        styles::TRANSITION_COLORS, check_class
                    )}
                    style={check_style}
                    onclick={on_check}
                    aria-label="Toggle today's check-in"
                >
                    { if props.checked_today { "✓" } else { "" } }
                </button>
            </div>
        </div>
    }
}
