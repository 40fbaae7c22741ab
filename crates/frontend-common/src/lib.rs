//! Backend client abstraction, session resolution and shared browser state
//! for the Bloom habit tracker.
//!
//! The application never talks to the network directly; everything flows
//! through the [`backend::Backend`] trait, injected via [`BackendProvider`]
//! so pages and tests can substitute an in-memory fake.

pub mod backend;
pub mod config;
pub mod prefs;
pub mod services;
pub mod session;
pub mod theme;
pub mod validate;

pub use backend::{
    use_backend, Backend, BackendError, BackendProvider, SharedBackend, SupabaseClient,
};
pub use config::AppConfig;
pub use session::{
    use_session, use_session_control, SessionControl, SessionProvider, SessionSnapshot,
};
pub use theme::{use_theme, Theme, ThemeAction, ThemeContext, ThemeProvider};
