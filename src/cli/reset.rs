//! Daily reset and level-up acknowledgement

use anyhow::Result;

use xpquest::progression::streaks;
use xpquest::store::StateStore;

/// Reset all quests to not done
pub fn reset_command(store: &StateStore) -> Result<()> {
    let today = streaks::today();
    let count = store.update(|state| {
        state.reset_daily_habits(today);
        state.habits().len()
    })?;

    println!("Habits have been reset successfully! ({} quests)", count);
    Ok(())
}

/// Dismiss the level-up notice
pub fn ack_command(store: &StateStore) -> Result<()> {
    let was_shown = store.update(|state| {
        let shown = state.show_level_up_modal;
        state.acknowledge_level_up();
        shown
    })?;

    if was_shown {
        println!("Level-up acknowledged.");
    } else {
        println!("Nothing to acknowledge.");
    }
    Ok(())
}
