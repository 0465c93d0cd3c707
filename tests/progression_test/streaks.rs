//! Streak update tests

use xpquest::progression::StreakRank;
use xpquest::{ProgressionEvent, SkillType};

use crate::common::{day, habit, id, state_with};

#[test]
fn test_first_completion_starts_streak() {
    let today = day("2024-07-01");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 10)], today);

    let events = state.complete_habit(&id("a"), today);

    assert_eq!(state.streak, 1);
    assert_eq!(state.last_completed_date, Some(today));
    assert!(events.contains(&ProgressionEvent::StreakStarted));
}

#[test]
fn test_streak_continues_from_yesterday() {
    let today = day("2024-07-01");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 10)], today);
    state.streak = 4;
    state.last_completed_date = Some(day("2024-06-30"));

    state.complete_habit(&id("a"), today);

    assert_eq!(state.streak, 5);
    assert_eq!(state.last_completed_date, Some(today));
}

#[test]
fn test_streak_breaks_after_gap() {
    let today = day("2024-07-01");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 10)], today);
    state.streak = 10;
    state.last_completed_date = Some(day("2024-06-28"));

    let events = state.complete_habit(&id("a"), today);

    assert_eq!(state.streak, 1);
    assert!(events.contains(&ProgressionEvent::StreakReset));
}

#[test]
fn test_second_completion_same_day_keeps_streak() {
    let today = day("2024-07-01");
    let mut state = state_with(
        vec![
            habit("a", SkillType::Strength, 10),
            habit("b", SkillType::Wisdom, 10),
        ],
        today,
    );
    state.streak = 5;
    state.last_completed_date = Some(today);

    let events = state.complete_habit(&id("b"), today);

    assert_eq!(state.streak, 5);
    assert_eq!(state.last_completed_date, Some(today));
    assert!(events.contains(&ProgressionEvent::StreakUnchanged { count: 5 }));
}

#[test]
fn test_streak_across_reset_days() {
    let mut state = state_with(vec![habit("a", SkillType::Agility, 10)], day("2024-07-01"));

    for (n, date) in ["2024-07-01", "2024-07-02", "2024-07-03"].iter().enumerate() {
        let today = day(date);
        state.reset_daily_habits(today);
        state.complete_habit(&id("a"), today);
        assert_eq!(state.streak, n as u32 + 1);
    }

    // Skip the 4th, come back on the 5th
    let today = day("2024-07-05");
    state.reset_daily_habits(today);
    state.complete_habit(&id("a"), today);
    assert_eq!(state.streak, 1);
}

#[test]
fn test_streak_rank() {
    let today = day("2024-07-01");
    let mut state = state_with(Vec::new(), today);
    assert_eq!(state.streak_rank(), StreakRank::Novice);
    state.streak = 7;
    assert_eq!(state.streak_rank(), StreakRank::Silver);
}
