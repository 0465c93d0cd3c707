//! Completion history tests

use chrono::Duration;
use xpquest::SkillType;
use xpquest::progression::HISTORY_DAYS;

use crate::common::{day, habit, id, state_with};

#[test]
fn test_add_and_remove_refresh_today() {
    let today = day("2024-08-01");
    let mut state = state_with(
        vec![
            habit("a", SkillType::Strength, 10),
            habit("b", SkillType::Wisdom, 10),
        ],
        today,
    );

    let entry = state.completion_history.get(today).unwrap();
    assert_eq!((entry.scheduled, entry.completed), (2, 0));

    state.complete_habit(&id("a"), today);
    let entry = state.completion_history.get(today).unwrap();
    assert_eq!((entry.scheduled, entry.completed), (2, 1));

    state.remove_habit(&id("a"), today);
    let entry = state.completion_history.get(today).unwrap();
    assert_eq!((entry.scheduled, entry.completed), (1, 0));
    assert_eq!(state.completion_history.len(), 1);
}

#[test]
fn test_history_capped_at_seven_days() {
    let start = day("2024-08-01");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 10)], start);

    for n in 0..9 {
        state.recompute_history(start + Duration::days(n));
        assert!(state.completion_history.len() <= HISTORY_DAYS);
    }

    let dates: Vec<_> = state
        .completion_history
        .entries()
        .iter()
        .map(|e| e.date)
        .collect();
    let expected: Vec<_> = (2..9).map(|n| start + Duration::days(n)).collect();
    assert_eq!(dates, expected);
}

#[test]
fn test_update_habit_leaves_history_alone() {
    let today = day("2024-08-01");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 10)], today);
    let history = state.completion_history.clone();

    state.update_habit(
        &id("a"),
        xpquest::HabitDraft::new("Renamed", SkillType::Agility, 50),
    );
    assert_eq!(state.completion_history, history);
}

#[test]
fn test_reset_captures_tally_then_clears() {
    let today = day("2024-08-01");
    let mut state = state_with(
        vec![
            habit("a", SkillType::Strength, 10),
            habit("b", SkillType::Strength, 10),
            habit("c", SkillType::Strength, 10),
        ],
        today,
    );
    state.complete_habit(&id("a"), today);
    state.complete_habit(&id("b"), today);

    state.reset_daily_habits(today);

    let entry = state.completion_history.get(today).unwrap();
    assert_eq!((entry.scheduled, entry.completed), (3, 2));
    assert_eq!(state.completed_today(), 0);
}
