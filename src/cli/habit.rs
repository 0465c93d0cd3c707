//! Quest management commands

use anyhow::Result;

use xpquest::progression::streaks;
use xpquest::store::StateStore;
use xpquest::{Habit, HabitDraft, HabitId, ProgressionEvent, SkillType};

use super::resolve_habit_id;

/// Add a quest
pub fn add_command(store: &StateStore, name: String, skill: SkillType, xp: u32) -> Result<()> {
    let draft = HabitDraft::new(name, skill, xp).validate()?;
    let today = streaks::today();
    let id = HabitId::generate();

    let habit = Habit::new(id.clone(), draft);
    let label = format!("{} ({}, {} XP)", habit.name, habit.habit_type, habit.xp_reward);
    store.update(|state| state.add_habit(habit, today))?;

    println!("Added quest {} - {}", id.short(), label);
    Ok(())
}

/// Edit a quest. Fields not given keep their current value.
pub fn edit_command(
    store: &StateStore,
    id: &str,
    name: Option<String>,
    skill: Option<SkillType>,
    xp: Option<u32>,
) -> Result<()> {
    let updated = store.try_update(|state| -> Result<Option<Habit>> {
        let id = resolve_habit_id(state, id)?;
        let Some(current) = state.habit(&id) else {
            return Ok(None);
        };

        let mut draft = HabitDraft::from(current);
        if let Some(name) = name {
            draft.name = name;
        }
        if let Some(skill) = skill {
            draft.habit_type = skill.into();
        }
        if let Some(xp) = xp {
            draft.xp_reward = xp;
        }
        let draft = draft.validate()?;

        state.update_habit(&id, draft);
        Ok(state.habit(&id).cloned())
    })?;

    match updated {
        Some(habit) => println!(
            "Updated quest {} - {} ({}, {} XP)",
            habit.id.short(),
            habit.name,
            habit.habit_type,
            habit.xp_reward
        ),
        None => println!("No quest with id '{}', nothing changed.", id),
    }
    Ok(())
}

/// Delete a quest
pub fn remove_command(store: &StateStore, id: &str) -> Result<()> {
    let today = streaks::today();
    let removed = store.try_update(|state| -> Result<Option<Habit>> {
        let id = resolve_habit_id(state, id)?;
        let habit = state.habit(&id).cloned();
        state.remove_habit(&id, today);
        Ok(habit)
    })?;

    match removed {
        Some(habit) => println!("Removed quest {} - {}", habit.id.short(), habit.name),
        None => println!("No quest with id '{}', nothing changed.", id),
    }
    Ok(())
}

/// Complete a quest and report what it earned
pub fn complete_command(store: &StateStore, id: &str) -> Result<()> {
    let today = streaks::today();
    let (name, events) = store.try_update(|state| -> Result<(Option<String>, Vec<ProgressionEvent>)> {
        let id = resolve_habit_id(state, id)?;
        let name = state.habit(&id).map(|h| h.name.clone());
        Ok((name, state.complete_habit(&id, today)))
    })?;

    let Some(name) = name else {
        println!("No quest with id '{}', nothing changed.", id);
        return Ok(());
    };

    if events.is_empty() {
        println!("'{}' is already done for today.", name);
        return Ok(());
    }

    println!("Quest complete: {}", name);
    for event in &events {
        match event {
            ProgressionEvent::XpAwarded { amount } => println!("  +{} XP", amount),
            ProgressionEvent::LevelUp {
                old_level,
                new_level,
            } => println!(
                "  LEVEL UP! {} -> {} (run `xpquest ack` to dismiss)",
                old_level, new_level
            ),
            ProgressionEvent::StatIncreased { skill, value } => {
                println!("  {} is now {}", skill.label(), value)
            }
            ProgressionEvent::StreakStarted => println!("  Streak started: 1 day"),
            ProgressionEvent::StreakExtended { count } => {
                println!("  Streak extended: {} days", count)
            }
            ProgressionEvent::StreakReset => println!("  Streak restarted: 1 day"),
            ProgressionEvent::StreakUnchanged { .. } => {}
        }
    }
    Ok(())
}

/// List quests in display order
pub fn list_command(store: &StateStore) -> Result<()> {
    let state = store.load()?;

    if state.habits().is_empty() {
        println!("No quests yet. Add one with `xpquest add <name> --type <skill>`.");
        return Ok(());
    }

    println!(
        "Quests ({}/{} done):\n",
        state.completed_today(),
        state.habits().len()
    );

    for habit in state.habits() {
        println!(
            "  [{}] {}  {:<24} {:<13} +{} XP",
            if habit.completed { "x" } else { " " },
            habit.id.short(),
            habit.name,
            habit.habit_type.to_string(),
            habit.xp_reward
        );
    }

    Ok(())
}
