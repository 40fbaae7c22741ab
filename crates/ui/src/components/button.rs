//! Button component with the variants from the design system.

use crate::styles;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Medium,
    Large,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or("button".into())]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let variant_class = match props.variant {
        ButtonVariant::Primary => styles::PRIMARY_BUTTON,
        ButtonVariant::Secondary => styles::SECONDARY_BUTTON,
        ButtonVariant::Destructive => styles::DANGER_BUTTON,
    };
    let size_class = match props.size {
        ButtonSize::Medium => "px-4 py-2 text-sm",
        ButtonSize::Large => "w-full px-6 py-3 text-base",
    };

    html! {
        <button
            type={props.button_type.clone()}
            class={classes!(variant_class, size_class)}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            {props.children.clone()}
        </button>
    }
}
