//! Theme context definition

use crate::config::AppConfig;
use crate::prefs;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    const fn from_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub theme: Theme,
}

pub enum ThemeAction {
    Set(Theme),
    Toggle,
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let theme = match action {
            ThemeAction::Set(theme) => theme,
            ThemeAction::Toggle => self.theme.toggle(),
        };

        prefs::store_flag(AppConfig::DARK_MODE_KEY, theme.is_dark());
        update_document_theme(theme);

        Rc::new(Self { theme })
    }
}

/// Add or remove the `dark` class on the document root.
fn update_document_theme(theme: Theme) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(html_element) = element {
        let class_list = html_element.class_list();
        let _ = match theme {
            Theme::Dark => class_list.add_1("dark"),
            Theme::Light => class_list.remove_1("dark"),
        };
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let state = use_reducer(ThemeState::default);

    // Restore the persisted preference once on mount.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let stored = Theme::from_flag(prefs::load_flag(AppConfig::DARK_MODE_KEY, false));
            if stored != state.theme {
                state.dispatch(ThemeAction::Set(stored));
            } else {
                update_document_theme(stored);
            }
        });
    }

    html! {
        <ContextProvider<ThemeContext> context={state}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

/// Hook to use the theme context.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .expect("ThemeContext not found. Make sure to wrap your component with ThemeProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn flag_maps_onto_theme() {
        assert_eq!(Theme::from_flag(true), Theme::Dark);
        assert_eq!(Theme::from_flag(false), Theme::Light);
    }
}
