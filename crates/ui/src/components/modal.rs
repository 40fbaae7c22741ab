//! Modal dialog with overlay dismissal.

use crate::styles;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub children: Children,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub open: bool,
    /// Fired when the user clicks the overlay or the close button.
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the card must not bubble up to the overlay handler.
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_OVERLAY} onclick={on_overlay_click}>
            <div class={styles::MODAL_CARD} onclick={stop_propagation}>
                <div class={classes!(styles::FLEX_BETWEEN, "mb-4")}>
                    if let Some(title) = &props.title {
                        <h2 class={classes!("text-xl", "font-bold", "m-0", styles::PRIMARY_TEXT)}>
                            {title}
                        </h2>
                    } else {
                        <span></span>
                    }
                    <button
                        class={classes!("text-2xl", "leading-none", "bg-transparent", "border-0", "cursor-pointer", styles::SECONDARY_TEXT)}
                        onclick={on_close_click}
                        aria-label="Close"
                    >
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
