mod button;
mod dropdown;
mod input;
mod modal;
mod spinner;
mod tile;
mod toggle;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use dropdown::Dropdown;
pub use input::{InputField, InputState};
pub use modal::Modal;
pub use spinner::{Spinner, SpinnerSize};
pub use tile::GoalTile;
pub use toggle::ToggleSwitch;
