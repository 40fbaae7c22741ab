//! Session resolution: the authoritative `(session, onboarding_complete,
//! loading)` triple and the provider that keeps it current.

mod context;

pub(crate) use context::resolve;
pub use context::{
    use_session, use_session_control, SessionAction, SessionContext, SessionControl,
    SessionProvider, SessionProviderProps, SessionSnapshot,
};
