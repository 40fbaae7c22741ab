//! Native select dropdown styled to match the input fields.

use crate::styles;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DropdownProps {
    /// Option values in display order.
    pub options: Vec<AttrValue>,
    pub value: AttrValue,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    html! {
        <div class={styles::FLEX_COL}>
            if let Some(label) = &props.label {
                <label class={classes!("text-sm", "font-medium", "mb-2", styles::PRIMARY_TEXT)}>
                    {label}
                </label>
            }
            <select
                class={classes!(styles::INPUT_BASE, styles::INPUT_DEFAULT, styles::FOCUS_BORDER)}
                onchange={onchange}
            >
                { for props.options.iter().map(|opt| html! {
                    <option value={opt.clone()} selected={*opt == props.value}>{opt}</option>
                }) }
            </select>
        </div>
    }
}
