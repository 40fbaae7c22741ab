mod habit_card;
mod habit_modal;
mod header;
mod sidebar;

pub use habit_card::HabitCard;
pub use habit_modal::{HabitDraft, HabitModal, HabitModalMode};
pub use header::Header;
pub use sidebar::Sidebar;
