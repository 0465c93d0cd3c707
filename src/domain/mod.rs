//! Core domain types for XPQuest

mod habit;
mod stats;

pub use habit::{
    Habit, HabitDraft, HabitId, HabitType, HabitValidationError, MAX_XP_REWARD, MIN_XP_REWARD,
};
pub use stats::{CharacterStats, SkillType};
