//! Dark-mode theme context.

mod context;

pub use context::{use_theme, Theme, ThemeAction, ThemeContext, ThemeProvider};
