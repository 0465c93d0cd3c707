//! CLI command implementations

pub mod avatar;
pub mod export;
pub mod habit;
pub mod init;
pub mod reset;
pub mod status;

use anyhow::{Result, bail};

use xpquest::{HabitId, ProgressionState};

/// Resolve a full id or a unique id prefix to a habit id.
///
/// Input matching nothing is passed through unchanged; the engine treats
/// unknown ids as a no-op.
pub fn resolve_habit_id(state: &ProgressionState, input: &str) -> Result<HabitId> {
    let input = input.trim();
    if input.is_empty() {
        bail!("Quest id must not be empty");
    }

    if let Some(habit) = state.habits().iter().find(|h| h.id.as_str() == input) {
        return Ok(habit.id.clone());
    }

    let matches: Vec<_> = state
        .habits()
        .iter()
        .filter(|h| h.id.as_str().starts_with(input))
        .collect();

    match matches.as_slice() {
        [] => Ok(HabitId::from(input)),
        [habit] => Ok(habit.id.clone()),
        _ => bail!(
            "Id prefix '{}' is ambiguous ({} quests match)",
            input,
            matches.len()
        ),
    }
}

/// Text progress bar, `width` cells wide
pub fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
