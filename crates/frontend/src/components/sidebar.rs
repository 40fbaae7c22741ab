//! Collapsible navigation sidebar shared by the dashboard and settings.

use crate::routes::Route;
use bloom_ui::styles;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SidebarProps {
    pub active: Route,
    pub collapsed: bool,
    pub on_toggle: Callback<()>,
    pub on_logout: Callback<()>,
}

fn nav_item(route: Route, icon: &'static str, label: &'static str, props: &SidebarProps) -> Html {
    let active = props.active == route;
    let item_class = if active {
        "bg-[#eef0ff] dark:bg-indigo-950 text-indigo-600 dark:text-indigo-400"
    } else {
        "text-[#666666] dark:text-[#a3a3a3] hover:bg-neutral-100 dark:hover:bg-neutral-800"
    };

    html! {
        <Link<Route> to={route} classes={classes!(
            "flex", "items-center", "gap-3", "px-3", "py-2.5", "rounded-xl",
            "no-underline", "font-medium", "text-sm", styles::TRANSITION_COLORS,
            item_class
        )}>
            <span class="text-lg">{icon}</span>
            if !props.collapsed {
                <span>{label}</span>
            }
        </Link<Route>>
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let width = if props.collapsed { "w-[72px]" } else { "w-60" };

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <aside class={classes!(
            "h-screen", "sticky", "top-0", "flex", "flex-col", "p-4", "border-r",
            "transition-all", "duration-200",
            width, styles::SIDEBAR_BG, styles::PRIMARY_BORDER
        )}>
            <div class={classes!("mb-8", styles::FLEX_BETWEEN)}>
                <div class={styles::FLEX_CENTER_GAP_2}>
                    <span class="text-2xl">{"🌱"}</span>
                    if !props.collapsed {
                        <span class={classes!("text-xl", "font-bold", styles::PRIMARY_TEXT)}>{"Bloom"}</span>
                    }
                </div>
                <button
                    class={classes!("bg-transparent", "border-0", "cursor-pointer", "p-1", styles::MUTED_TEXT)}
                    onclick={on_toggle}
                    aria-label="Toggle sidebar"
                >
                    { if props.collapsed { "»" } else { "«" } }
                </button>
            </div>

            <nav class={classes!("flex", "flex-col", "gap-1", "flex-1")}>
                {nav_item(Route::Dashboard, "🏠", "Dashboard", props)}
                {nav_item(Route::Settings, "⚙️", "Settings", props)}
            </nav>

            <button
                class={classes!(
                    "flex", "items-center", "gap-3", "px-3", "py-2.5", "rounded-xl",
                    "bg-transparent", "border-0", "cursor-pointer", "font-medium", "text-sm",
                    "hover:bg-neutral-100", "dark:hover:bg-neutral-800",
                    styles::SECONDARY_TEXT, styles::TRANSITION_COLORS
                )}
                onclick={on_logout}
            >
                <span class="text-lg">{"🚪"}</span>
                if !props.collapsed {
                    <span>{"Sign out"}</span>
                }
            </button>
        </aside>
    }
}
