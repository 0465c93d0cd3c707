//! XPQuest - level up your life
//!
//! XPQuest turns daily habits into quests. Each habit trains one of five
//! skills (strength, intelligence, wisdom, charisma, agility) and grants XP
//! when completed. XP fills levels, completions on consecutive days build a
//! streak, and a rolling 7-day log shows how many quests were done each day.
//!
//! ## Layout
//!
//! - [`progression`]: the state machine. All rules for XP, levels, stats,
//!   streaks and history live in [`progression::ProgressionState`].
//! - [`domain`]: habits, skills and character stats.
//! - [`store`]: the JSON state document, atomic saves and the daily reset.
//! - [`avatar`]: square-crops uploaded images for the character portrait.
//! - [`config`]: `~/.xpquest/config.toml`.

pub mod avatar;
pub mod config;
pub mod domain;
pub mod progression;
pub mod store;

pub use domain::*;
pub use progression::{ProgressionEvent, ProgressionState};
