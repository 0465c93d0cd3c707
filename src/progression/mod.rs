//! Progression engine: XP, levels, stats, streaks and completion history
//!
//! [`ProgressionState`] is the whole gamification state and the only place
//! it changes. Every operation runs to completion on `&mut self` and leaves
//! the state consistent.
//!
//! The engine does no I/O and never reads the clock. Operations that depend
//! on the calendar take `today` from the caller, who reads it once per
//! operation (see [`streaks::today`]).
//!
//! # Usage
//!
//! ```ignore
//! let mut state = ProgressionState::default();
//! let today = streaks::today();
//!
//! let id = HabitId::generate();
//! state.add_habit(Habit::new(id.clone(), draft), today);
//! let events = state.complete_habit(&id, today);
//! ```

pub mod history;
pub mod levels;
pub mod streaks;

pub use history::{CompletionHistory, DailyCompletion, HISTORY_DAYS};
pub use levels::{LevelProgress, xp_required_to_advance};
pub use streaks::{StreakChange, StreakRank};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{CharacterStats, Habit, HabitDraft, HabitId, SkillType};

/// Events produced by a habit completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionEvent {
    XpAwarded { amount: u32 },
    LevelUp { old_level: u32, new_level: u32 },
    StatIncreased { skill: SkillType, value: u32 },
    StreakStarted,
    StreakExtended { count: u32 },
    StreakReset,
    StreakUnchanged { count: u32 },
}

/// The complete gamification state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionState {
    /// Habits in display order
    pub habits: Vec<Habit>,
    pub level: u32,
    /// XP earned within the current level
    pub xp: u32,
    pub streak: u32,
    pub last_completed_date: Option<NaiveDate>,
    /// Set when a completion levels up, cleared by [`Self::acknowledge_level_up`]
    pub show_level_up_modal: bool,
    pub stats: CharacterStats,
    pub completion_history: CompletionHistory,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            level: 1,
            xp: 0,
            streak: 0,
            last_completed_date: None,
            show_level_up_modal: false,
            stats: CharacterStats::default(),
            completion_history: CompletionHistory::new(),
            avatar_url: None,
        }
    }
}

impl ProgressionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================
    // HABIT COLLECTION
    // ========================================

    /// Append a habit and refresh today's history record.
    ///
    /// The caller guarantees the id is unique.
    pub fn add_habit(&mut self, habit: Habit, today: NaiveDate) {
        debug!(id = %habit.id, name = %habit.name, "Adding habit");
        self.habits.push(habit);
        self.recompute_history(today);
    }

    /// Remove a habit by id. Today's history is refreshed whether or not
    /// anything was removed. Returns true if the habit existed.
    pub fn remove_habit(&mut self, id: &HabitId, today: NaiveDate) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| &h.id != id);
        let removed = self.habits.len() != before;

        if removed {
            debug!(%id, "Removed habit");
        } else {
            debug!(%id, "Remove ignored, no such habit");
        }

        self.recompute_history(today);
        removed
    }

    /// Replace name, type and XP reward of a habit. Returns false if the id
    /// is unknown.
    pub fn update_habit(&mut self, id: &HabitId, draft: HabitDraft) -> bool {
        match self.habits.iter_mut().find(|h| &h.id == id) {
            Some(habit) => {
                habit.apply_edit(draft);
                debug!(%id, "Updated habit");
                true
            }
            None => {
                debug!(%id, "Update ignored, no such habit");
                false
            }
        }
    }

    pub fn habit(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == id)
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Number of habits currently marked completed
    pub fn completed_today(&self) -> u32 {
        self.habits.iter().filter(|h| h.completed).count() as u32
    }

    // ========================================
    // COMPLETION
    // ========================================

    /// Complete a habit: award XP, resolve level-ups, bump the habit's stat,
    /// update the streak and refresh today's history.
    ///
    /// Unknown ids and habits that are already completed are ignored; the
    /// returned event list is empty in that case.
    pub fn complete_habit(&mut self, id: &HabitId, today: NaiveDate) -> Vec<ProgressionEvent> {
        let Some(habit) = self.habits.iter_mut().find(|h| &h.id == id) else {
            debug!(%id, "Completion ignored, no such habit");
            return Vec::new();
        };

        if habit.completed {
            debug!(%id, "Completion ignored, habit already completed");
            return Vec::new();
        }

        habit.completed = true;
        let reward = habit.xp_reward;
        let skill = habit.habit_type.skill();
        let habit_type = habit.habit_type.clone();

        let mut events = vec![ProgressionEvent::XpAwarded { amount: reward }];

        // XP and level-ups
        let old_level = self.level;
        let (new_level, remaining, gained) =
            levels::resolve_level_ups(self.level, self.xp.saturating_add(reward));
        self.level = new_level;
        self.xp = remaining;
        if gained > 0 {
            self.show_level_up_modal = true;
            info!(old_level, new_level, "Level up");
            events.push(ProgressionEvent::LevelUp {
                old_level,
                new_level,
            });
        }

        // Stat
        match skill {
            Some(skill) => {
                let value = self.stats.increment(skill);
                events.push(ProgressionEvent::StatIncreased { skill, value });
            }
            None => {
                warn!(%id, %habit_type, "Habit type is not a known skill, no stat increased");
            }
        }

        // Streak
        let change = streaks::next_streak(self.last_completed_date, today, self.streak);
        self.streak = change.count();
        self.last_completed_date = Some(today);
        events.push(match change {
            StreakChange::Unchanged(count) => ProgressionEvent::StreakUnchanged { count },
            StreakChange::Started => ProgressionEvent::StreakStarted,
            StreakChange::Extended(count) => ProgressionEvent::StreakExtended { count },
            StreakChange::Reset => ProgressionEvent::StreakReset,
        });

        self.recompute_history(today);

        debug!(
            %id,
            level = self.level,
            xp = self.xp,
            streak = self.streak,
            "Habit completed"
        );
        events
    }

    /// Close the day: record the final tally, then mark every habit as not
    /// completed. XP, level, stats and streak are left alone.
    pub fn reset_daily_habits(&mut self, today: NaiveDate) {
        self.recompute_history(today);
        for habit in &mut self.habits {
            habit.completed = false;
        }
        info!(habits = self.habits.len(), %today, "Daily habits reset");
    }

    /// Clear the level-up flag
    pub fn acknowledge_level_up(&mut self) {
        self.show_level_up_modal = false;
    }

    /// Write today's scheduled/completed tally into the history
    pub fn recompute_history(&mut self, today: NaiveDate) {
        let scheduled = self.habits.len() as u32;
        let completed = self.completed_today();
        self.completion_history.record(today, scheduled, completed);
    }

    pub fn set_avatar_url(&mut self, url: Option<String>) {
        self.avatar_url = url;
    }

    // ========================================
    // DERIVED VIEWS
    // ========================================

    pub fn level_progress(&self) -> LevelProgress {
        LevelProgress::new(self.level, self.xp)
    }

    /// XP earned since level 1
    pub fn total_xp(&self) -> u64 {
        levels::total_xp(self.level, self.xp)
    }

    pub fn streak_rank(&self) -> StreakRank {
        StreakRank::for_streak(self.streak)
    }
}
