//! Status and history commands

use anyhow::Result;

use xpquest::progression::streaks::{self, DIAMOND_STREAK_DAYS};
use xpquest::store::StateStore;

use super::progress_bar;

/// Show the character sheet
pub fn status_command(store: &StateStore) -> Result<()> {
    let state = store.load()?;
    let progress = state.level_progress();

    println!(
        "Level {}  {} {} / {} XP",
        state.level,
        progress_bar(progress.fraction(), 20),
        progress.current,
        progress.required
    );
    println!("Total XP earned: {}", state.total_xp());

    if state.show_level_up_modal {
        println!(
            "\n*** LEVEL UP! You reached level {}. (`xpquest ack` to dismiss) ***",
            state.level
        );
    }

    println!(
        "\nStreak: {} {}  rank {}  {}",
        state.streak,
        if state.streak == 1 { "day" } else { "days" },
        state.streak_rank(),
        progress_bar(streaks::diamond_progress(state.streak), DIAMOND_STREAK_DAYS as usize)
    );
    if let Some(last) = state.last_completed_date {
        println!("Last completion: {}", last);
    }

    println!("\nStats:");
    for (skill, value) in state.stats.iter() {
        println!("  {:<13} {}", skill.label(), value);
    }

    println!(
        "\nToday: {}/{} quests done",
        state.completed_today(),
        state.habits().len()
    );

    if state.avatar_url.is_some() {
        println!("Avatar: set");
    }

    Ok(())
}

/// Show the completion history in calendar order
pub fn history_command(store: &StateStore) -> Result<()> {
    let state = store.load()?;
    let history = &state.completion_history;

    if history.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    println!("Weekly progress:\n");
    for entry in history.sorted_by_date() {
        println!(
            "  {}  {:>2}/{:<2} {} {:>3}%",
            entry.date.format("%a %b %e"),
            entry.completed,
            entry.scheduled,
            progress_bar(entry.completion_rate() as f32 / 100.0, 10),
            entry.completion_rate()
        );
    }

    println!("\nAverage completion: {}%", history.average_completion_rate());
    if let Some(latest) = history.latest() {
        println!("Latest day: {}/{}", latest.completed, latest.scheduled);
    }

    Ok(())
}
