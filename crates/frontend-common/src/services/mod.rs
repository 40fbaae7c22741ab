//! Thin services over the backend trait, plus the pure display math
//! (streaks, completion dots, optimistic list edits) their callers use.

mod habits;
mod profile;

pub use habits::{
    remove_habit, restore_habit, HabitBoard, HabitService, WINDOW_DAYS,
};
pub use profile::{greeting_name, OnboardingAnswers, ProfileService};
