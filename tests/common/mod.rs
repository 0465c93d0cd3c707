//! Shared test utilities for progression and store tests

#![allow(dead_code)]

use chrono::NaiveDate;
use xpquest::{Habit, HabitDraft, HabitId, ProgressionState, SkillType};

/// Parse a YYYY-MM-DD day
pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("Invalid test date")
}

/// Build a not yet completed habit
pub fn habit(id: &str, skill: SkillType, xp_reward: u32) -> Habit {
    Habit::new(
        HabitId::from(id),
        HabitDraft::new(format!("Quest {}", id), skill, xp_reward),
    )
}

/// Fresh state holding the given habits, added on `today`
pub fn state_with(habits: Vec<Habit>, today: NaiveDate) -> ProgressionState {
    let mut state = ProgressionState::default();
    for h in habits {
        state.add_habit(h, today);
    }
    state
}

pub fn id(s: &str) -> HabitId {
    HabitId::from(s)
}
