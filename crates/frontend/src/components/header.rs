//! Page header with a time-of-day greeting and the theme toggle.

use bloom_frontend_common::{use_theme, ThemeAction};
use bloom_ui::styles;
use chrono::{Local, Timelike};
use yew::prelude::*;

/// Salutation for an hour of day (0..24).
fn salutation(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let theme = use_theme();

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::Toggle))
    };

    let greeting = format!("{}, {}", salutation(Local::now().hour()), props.name);

    html! {
        <header class={classes!("mb-8", styles::FLEX_BETWEEN)}>
            <div>
                <h1 class={classes!("text-3xl", "font-bold", "m-0", "mb-1", styles::PRIMARY_TEXT)}>
                    {greeting}
                </h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class={classes!("text-base", "m-0", styles::SECONDARY_TEXT)}>{subtitle}</p>
                }
            </div>
            <button
                class={classes!(
                    "text-xl", "p-2", "rounded-xl", "border-0", "cursor-pointer",
                    styles::SECONDARY_BG, styles::TRANSITION_COLORS
                )}
                onclick={on_theme_toggle}
                aria-label="Toggle dark mode"
            >
                { if theme.theme.is_dark() { "☀️" } else { "🌙" } }
            </button>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salutation_covers_the_day() {
        assert_eq!(salutation(0), "Good evening");
        assert_eq!(salutation(5), "Good morning");
        assert_eq!(salutation(11), "Good morning");
        assert_eq!(salutation(12), "Good afternoon");
        assert_eq!(salutation(17), "Good afternoon");
        assert_eq!(salutation(18), "Good evening");
        assert_eq!(salutation(23), "Good evening");
    }
}
