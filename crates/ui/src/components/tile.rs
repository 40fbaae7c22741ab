//! Selectable tile for the onboarding goal grid.

use crate::styles;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct GoalTileProps {
    /// Emoji or short glyph shown above the label.
    pub icon: AttrValue,
    pub label: AttrValue,
    pub selected: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(GoalTile)]
pub fn goal_tile(props: &GoalTileProps) -> Html {
    let state_class = if props.selected {
        styles::TILE_SELECTED
    } else {
        styles::TILE_IDLE
    };

    html! {
        <button
            type="button"
            class={classes!(styles::TILE_BASE, state_class)}
            onclick={props.onclick.clone()}
        >
            <span class="text-2xl">{props.icon.clone()}</span>
            <span class={classes!("text-sm", "font-medium", styles::PRIMARY_TEXT)}>
                {props.label.clone()}
            </span>
        </button>
    }
}
