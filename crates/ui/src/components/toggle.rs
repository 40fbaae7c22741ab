//! Toggle switch used for settings flags.

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ToggleSwitchProps {
    pub checked: bool,
    pub onchange: Callback<bool>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ToggleSwitch)]
pub fn toggle_switch(props: &ToggleSwitchProps) -> Html {
    let track_class = if props.checked {
        "bg-indigo-600"
    } else {
        "bg-neutral-300 dark:bg-neutral-600"
    };
    let knob_class = if props.checked {
        "translate-x-5"
    } else {
        "translate-x-0"
    };

    let onclick = {
        let onchange = props.onchange.clone();
        let next = !props.checked;
        Callback::from(move |_: MouseEvent| onchange.emit(next))
    };

    html! {
        <button
            type="button"
            role="switch"
            aria-checked={props.checked.to_string()}
            disabled={props.disabled}
            onclick={onclick}
            class={classes!(
                "relative", "inline-flex", "h-6", "w-11", "items-center", "rounded-full",
                "transition-colors", "border-0", "cursor-pointer",
                "disabled:opacity-50", "disabled:cursor-not-allowed",
                track_class
            )}
        >
            <span
                class={classes!(
                    "inline-block", "h-5", "w-5", "transform", "rounded-full", "bg-white",
                    "transition-transform", "shadow", "ml-0.5",
                    knob_class
                )}
            />
        </button>
    }
}
