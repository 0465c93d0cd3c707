//! Rolling per-day completion log

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of distinct days kept in the history
pub const HISTORY_DAYS: usize = 7;

/// How many habits existed and how many were done on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCompletion {
    pub date: NaiveDate,
    pub scheduled: u32,
    pub completed: u32,
}

impl DailyCompletion {
    /// Completion percentage, rounded. 0 when nothing was scheduled.
    pub fn completion_rate(&self) -> u32 {
        if self.scheduled == 0 {
            return 0;
        }
        ((f64::from(self.completed) / f64::from(self.scheduled)) * 100.0).round() as u32
    }
}

/// The last [`HISTORY_DAYS`] days that had a history update, in the order
/// they were first recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionHistory(Vec<DailyCompletion>);

impl CompletionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the tally for `date`.
    ///
    /// An existing record for the day is overwritten in place. A new day is
    /// appended and the oldest records are dropped to stay within
    /// [`HISTORY_DAYS`].
    pub fn record(&mut self, date: NaiveDate, scheduled: u32, completed: u32) {
        let entry = DailyCompletion {
            date,
            scheduled,
            completed,
        };

        if let Some(existing) = self.0.iter_mut().find(|e| e.date == date) {
            *existing = entry;
            return;
        }

        self.0.push(entry);
        if self.0.len() > HISTORY_DAYS {
            let excess = self.0.len() - HISTORY_DAYS;
            self.0.drain(..excess);
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyCompletion> {
        self.0.iter().find(|e| e.date == date)
    }

    /// Records in insertion order
    pub fn entries(&self) -> &[DailyCompletion] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records in calendar order, oldest first
    pub fn sorted_by_date(&self) -> Vec<DailyCompletion> {
        let mut sorted = self.0.clone();
        sorted.sort_by_key(|e| e.date);
        sorted
    }

    /// Most recent day by calendar date
    pub fn latest(&self) -> Option<&DailyCompletion> {
        self.0.iter().max_by_key(|e| e.date)
    }

    /// Mean of the per-day completion rates, rounded
    pub fn average_completion_rate(&self) -> u32 {
        if self.0.is_empty() {
            return 0;
        }
        let sum: u32 = self.0.iter().map(DailyCompletion::completion_rate).sum();
        (f64::from(sum) / self.0.len() as f64).round() as u32
    }
}
