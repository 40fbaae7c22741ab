//! Backend injection via Yew context.

use super::SharedBackend;
use yew::prelude::*;

/// Context wrapper; equality is handle identity, which is what re-render
/// decisions need (the backend itself never changes mid-session).
#[derive(Clone)]
pub struct BackendHandle(pub SharedBackend);

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        std::rc::Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, Clone)]
pub struct BackendProviderProps {
    pub backend: SharedBackend,
    pub children: Children,
}

impl PartialEq for BackendProviderProps {
    fn eq(&self, other: &Self) -> bool {
        std::rc::Rc::ptr_eq(&self.backend, &other.backend) && self.children == other.children
    }
}

/// Provides the backend client to the component tree.
#[function_component(BackendProvider)]
pub fn backend_provider(props: &BackendProviderProps) -> Html {
    let handle = BackendHandle(props.backend.clone());
    html! {
        <ContextProvider<BackendHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<BackendHandle>>
    }
}

/// Hook to get the injected backend client.
#[hook]
pub fn use_backend() -> SharedBackend {
    use_context::<BackendHandle>()
        .expect("BackendHandle not found. Make sure to wrap your component with BackendProvider")
        .0
}
