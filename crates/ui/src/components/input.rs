//! Text input with the default/error/success states from the design system.

use crate::styles;
use yew::prelude::*;

/// Visual state of the input. Maps to the Default, Error and Success
/// variants of the mockup; hover and focus are handled in CSS.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Default,
    Error,
    Success,
}

#[derive(Properties, Clone, PartialEq)]
pub struct InputFieldProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or("text".into())]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Hint or error message rendered below the field.
    #[prop_or_default]
    pub helper_text: Option<AttrValue>,
    #[prop_or_default]
    pub state: InputState,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub readonly: bool,
}

#[function_component(InputField)]
pub fn input_field(props: &InputFieldProps) -> Html {
    let state_class = match props.state {
        InputState::Default => styles::INPUT_DEFAULT,
        InputState::Error => styles::INPUT_ERROR,
        InputState::Success => styles::INPUT_SUCCESS,
    };
    let helper_class = match props.state {
        InputState::Error => styles::ERROR_TEXT,
        InputState::Success => styles::SUCCESS_TEXT,
        InputState::Default => styles::SECONDARY_TEXT,
    };

    html! {
        <div class={styles::FLEX_COL}>
            if let Some(label) = &props.label {
                <label class={classes!("text-sm", "font-medium", "mb-2", styles::PRIMARY_TEXT)}>
                    {label}
                </label>
            }
            <input
                type={props.input_type.clone()}
                class={classes!(styles::INPUT_BASE, state_class, styles::FOCUS_BORDER)}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                disabled={props.disabled}
                readonly={props.readonly}
            />
            if let Some(helper) = &props.helper_text {
                <p class={classes!("text-sm", "mt-2", "m-0", helper_class)}>{helper}</p>
            }
        </div>
    }
}
