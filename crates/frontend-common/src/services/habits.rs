//! Habit CRUD service and check-in display math.

use crate::backend::{
    BackendError, CheckIn, Habit, HabitPatch, NewHabit, SharedBackend,
};
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// Rolling window, in days, for the completion strip and streaks.
pub const WINDOW_DAYS: i64 = 30;

/// Habits plus their check-ins over the rolling window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HabitBoard {
    pub habits: Vec<Habit>,
    checked: HashSet<(String, NaiveDate)>,
}

impl HabitBoard {
    pub fn new(habits: Vec<Habit>, check_ins: &[CheckIn]) -> Self {
        let checked = check_ins
            .iter()
            .map(|c| (c.habit_id.clone(), c.date))
            .collect();
        Self { habits, checked }
    }

    pub fn is_checked(&self, habit_id: &str, date: NaiveDate) -> bool {
        self.checked.contains(&(habit_id.to_owned(), date))
    }

    /// Apply a check-in toggle locally (optimistic path).
    pub fn set_checked(&mut self, habit_id: &str, date: NaiveDate, checked: bool) {
        let key = (habit_id.to_owned(), date);
        if checked {
            self.checked.insert(key);
        } else {
            self.checked.remove(&key);
        }
    }

    /// Consecutive checked days ending today. An unchecked today does not
    /// break the run: the streak stands until the day is over.
    pub fn streak(&self, habit_id: &str, today: NaiveDate) -> u32 {
        let mut day = if self.is_checked(habit_id, today) {
            today
        } else {
            today - Duration::days(1)
        };
        let mut streak = 0;
        while self.is_checked(habit_id, day) {
            streak += 1;
            day -= Duration::days(1);
        }
        streak
    }

    /// Completion dots for the trailing window, oldest first.
    pub fn dots(&self, habit_id: &str, today: NaiveDate) -> Vec<bool> {
        (0..WINDOW_DAYS)
            .rev()
            .map(|offset| self.is_checked(habit_id, today - Duration::days(offset)))
            .collect()
    }
}

/// Remove a habit from the list, returning its position for rollback.
pub fn remove_habit(habits: &mut Vec<Habit>, id: &str) -> Option<(usize, Habit)> {
    let index = habits.iter().position(|h| h.id == id)?;
    Some((index, habits.remove(index)))
}

/// Undo an optimistic removal at its original position.
pub fn restore_habit(habits: &mut Vec<Habit>, index: usize, habit: Habit) {
    let index = index.min(habits.len());
    habits.insert(index, habit);
}

/// CRUD operations for the dashboard, scoped to one user.
#[derive(Clone)]
pub struct HabitService {
    backend: SharedBackend,
}

impl HabitService {
    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }

    /// Habits plus the trailing 30 days of check-ins.
    pub async fn load(&self, user_id: &str, today: NaiveDate) -> Result<HabitBoard, BackendError> {
        let habits = self.backend.list_habits(user_id).await?;
        let since = today - Duration::days(WINDOW_DAYS - 1);
        let check_ins = self.backend.list_check_ins(user_id, since).await?;
        Ok(HabitBoard::new(habits, &check_ins))
    }

    pub async fn create(&self, habit: NewHabit) -> Result<Habit, BackendError> {
        self.backend.insert_habit(&habit).await
    }

    pub async fn update(&self, id: &str, patch: HabitPatch) -> Result<(), BackendError> {
        self.backend.update_habit(id, &patch).await
    }

    /// Delete a habit and, best-effort, its check-in rows. The two calls
    /// are not grouped transactionally; an orphaned check-in cleanup
    /// failure is logged and swallowed.
    pub async fn delete(&self, id: &str) -> Result<(), BackendError> {
        self.backend.delete_habit(id).await?;
        if let Err(err) = self.backend.delete_check_ins_for_habit(id).await {
            log::warn!("failed to clean up check-ins for habit {id}: {err}");
        }
        Ok(())
    }

    /// Persist a toggle: insert today's row when checking, delete it when
    /// unchecking.
    pub async fn set_check_in(
        &self,
        check_in: CheckIn,
        checked: bool,
    ) -> Result<(), BackendError> {
        if checked {
            self.backend.insert_check_in(&check_in).await
        } else {
            self.backend
                .delete_check_in(&check_in.habit_id, check_in.date)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::FakeBackend;
    use crate::backend::{Frequency, PreferredTime};
    use futures::executor::block_on;
    use std::rc::Rc;

    fn new_habit(title: &str) -> NewHabit {
        NewHabit {
            user_id: "u1".to_owned(),
            title: title.to_owned(),
            frequency: Frequency::Daily,
            preferred_time: PreferredTime::Morning,
            color: "#4f46e5".to_owned(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn create_issues_exactly_one_insert_and_refetch_sees_it() {
        let backend = Rc::new(FakeBackend::new());
        let service = HabitService::new(backend.clone());

        let habit = block_on(service.create(new_habit("Reading"))).unwrap();
        assert_eq!(backend.call_count("insert_habit"), 1);
        assert_eq!(habit.user_id, "u1");

        let board = block_on(service.load("u1", date("2026-08-29"))).unwrap();
        assert_eq!(board.habits.len(), 1);
        assert_eq!(board.habits[0].title, "Reading");
    }

    #[test]
    fn delete_removes_row_and_cleans_check_ins() {
        let backend = Rc::new(FakeBackend::new());
        let service = HabitService::new(backend.clone());
        let habit = block_on(service.create(new_habit("Reading"))).unwrap();
        block_on(service.set_check_in(
            CheckIn {
                habit_id: habit.id.clone(),
                user_id: "u1".to_owned(),
                date: date("2026-08-29"),
            },
            true,
        ))
        .unwrap();

        block_on(service.delete(&habit.id)).unwrap();
        assert!(backend.habits.borrow().is_empty());
        assert!(backend.check_ins.borrow().is_empty());
    }

    #[test]
    fn delete_failure_leaves_backend_row_in_place() {
        let backend = Rc::new(FakeBackend::new());
        let service = HabitService::new(backend.clone());
        let habit = block_on(service.create(new_habit("Reading"))).unwrap();

        backend.fail_on("delete_habit");
        assert!(block_on(service.delete(&habit.id)).is_err());
        assert_eq!(backend.habits.borrow().len(), 1);
    }

    #[test]
    fn check_in_cleanup_failure_is_swallowed() {
        let backend = Rc::new(FakeBackend::new());
        let service = HabitService::new(backend.clone());
        let habit = block_on(service.create(new_habit("Reading"))).unwrap();

        backend.fail_on("delete_check_ins_for_habit");
        assert!(block_on(service.delete(&habit.id)).is_ok());
    }

    #[test]
    fn toggle_maps_onto_insert_and_delete() {
        let backend = Rc::new(FakeBackend::new());
        let service = HabitService::new(backend.clone());
        let check_in = CheckIn {
            habit_id: "h1".to_owned(),
            user_id: "u1".to_owned(),
            date: date("2026-08-29"),
        };

        block_on(service.set_check_in(check_in.clone(), true)).unwrap();
        assert_eq!(backend.call_count("insert_check_in"), 1);
        assert_eq!(backend.check_ins.borrow().len(), 1);

        block_on(service.set_check_in(check_in, false)).unwrap();
        assert_eq!(backend.call_count("delete_check_in"), 1);
        assert!(backend.check_ins.borrow().is_empty());
    }

    fn board_with(dates: &[&str]) -> HabitBoard {
        let check_ins: Vec<CheckIn> = dates
            .iter()
            .map(|d| CheckIn {
                habit_id: "h1".to_owned(),
                user_id: "u1".to_owned(),
                date: date(d),
            })
            .collect();
        HabitBoard::new(Vec::new(), &check_ins)
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        let board = board_with(&["2026-08-27", "2026-08-28", "2026-08-29"]);
        assert_eq!(board.streak("h1", date("2026-08-29")), 3);
    }

    #[test]
    fn unchecked_today_does_not_break_the_streak() {
        let board = board_with(&["2026-08-27", "2026-08-28"]);
        assert_eq!(board.streak("h1", date("2026-08-29")), 2);
    }

    #[test]
    fn a_gap_resets_the_streak() {
        let board = board_with(&["2026-08-25", "2026-08-26", "2026-08-29"]);
        assert_eq!(board.streak("h1", date("2026-08-29")), 1);
        assert_eq!(board.streak("h1", date("2026-08-30")), 1);
    }

    #[test]
    fn dots_cover_the_window_oldest_first() {
        let board = board_with(&["2026-08-29", "2026-07-31"]);
        let dots = board.dots("h1", date("2026-08-29"));
        assert_eq!(dots.len(), WINDOW_DAYS as usize);
        assert!(dots[WINDOW_DAYS as usize - 1]); // today
        assert!(dots[1]); // 28 days back
        assert!(!dots[0]);
    }

    #[test]
    fn optimistic_remove_and_restore_round_trip() {
        let backend = Rc::new(FakeBackend::new());
        let service = HabitService::new(backend);
        let a = block_on(service.create(new_habit("A"))).unwrap();
        let b = block_on(service.create(new_habit("B"))).unwrap();
        let c = block_on(service.create(new_habit("C"))).unwrap();
        let mut habits = vec![a, b.clone(), c];

        let (index, removed) = remove_habit(&mut habits, &b.id).unwrap();
        assert_eq!(index, 1);
        assert_eq!(habits.len(), 2);
        assert!(remove_habit(&mut habits, "missing").is_none());

        restore_habit(&mut habits, index, removed);
        assert_eq!(habits[1].id, b.id);
    }
}
