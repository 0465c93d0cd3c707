//! Streak tracking
//!
//! A streak counts consecutive calendar days with at least one completed
//! habit. Days are local calendar days without a time component.

use chrono::{Local, NaiveDate};

/// Streak length at which the Diamond rank is reached
pub const DIAMOND_STREAK_DAYS: u32 = 30;

/// Get today's local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// What a completion does to the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already counted today
    Unchanged(u32),
    /// First completion ever
    Started,
    /// Continued from the previous completion day
    Extended(u32),
    /// Too many days missed, back to 1
    Reset,
}

impl StreakChange {
    /// The streak value after the change
    pub fn count(&self) -> u32 {
        match self {
            StreakChange::Unchanged(count) | StreakChange::Extended(count) => *count,
            StreakChange::Started | StreakChange::Reset => 1,
        }
    }
}

/// Decide the new streak for a completion on `today`.
///
/// A gap of one day or less (including a negative gap when the clock moved
/// backwards) continues the streak.
pub fn next_streak(last_completed: Option<NaiveDate>, today: NaiveDate, current: u32) -> StreakChange {
    let Some(last) = last_completed else {
        return StreakChange::Started;
    };

    if last == today {
        return StreakChange::Unchanged(current);
    }

    let days_since = (today - last).num_days();
    if days_since <= 1 {
        StreakChange::Extended(current.saturating_add(1))
    } else {
        StreakChange::Reset
    }
}

/// Streak milestone ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StreakRank {
    Novice,
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl StreakRank {
    pub fn for_streak(streak: u32) -> Self {
        match streak {
            s if s >= DIAMOND_STREAK_DAYS => Self::Diamond,
            s if s >= 14 => Self::Gold,
            s if s >= 7 => Self::Silver,
            s if s >= 3 => Self::Bronze,
            _ => Self::Novice,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Diamond => "Diamond",
        }
    }
}

impl std::fmt::Display for StreakRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Progress toward the Diamond rank (0.0 - 1.0)
pub fn diamond_progress(streak: u32) -> f32 {
    (streak as f32 / DIAMOND_STREAK_DAYS as f32).min(1.0)
}
