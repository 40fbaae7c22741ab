//! Indeterminate loading indicator.

use crate::styles;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub size: SpinnerSize,
    /// Label rendered under the ring.
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let ring_size = match props.size {
        SpinnerSize::Small => "w-5 h-5 border-2",
        SpinnerSize::Medium => "w-8 h-8 border-[3px]",
        SpinnerSize::Large => "w-12 h-12 border-4",
    };

    html! {
        <div class="inline-flex flex-col items-center gap-3" role="status">
            <span class={classes!(
                "rounded-full", "animate-spin",
                "border-neutral-200", "dark:border-neutral-700",
                "border-t-indigo-600", "dark:border-t-indigo-400",
                ring_size
            )} />
            if let Some(text) = &props.text {
                <span class={classes!("text-sm", styles::SECONDARY_TEXT)}>{text}</span>
            }
        </div>
    }
}
