//! Shared presentational components and design tokens for Bloom.
//!
//! Everything in this crate is stateless: components receive values and
//! callbacks through props and never touch the backend or any context.

pub mod components;
pub mod styles;

pub use components::{
    Button, ButtonSize, ButtonVariant, Dropdown, GoalTile, InputField, InputState, Modal,
    Spinner, SpinnerSize, ToggleSwitch,
};
