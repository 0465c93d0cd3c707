//! XP accumulation and level-up tests

use xpquest::progression::xp_required_to_advance;
use xpquest::{ProgressionEvent, SkillType};

use crate::common::{day, habit, id, state_with};

#[test]
fn test_leveling_formula() {
    for level in 1..=100 {
        assert_eq!(xp_required_to_advance(level), level * 50);
        assert!(xp_required_to_advance(level + 1) > xp_required_to_advance(level));
    }
}

#[test]
fn test_single_completion_without_level_up() {
    let today = day("2024-04-10");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 30)], today);

    state.complete_habit(&id("a"), today);

    assert_eq!(state.level, 1);
    assert_eq!(state.xp, 30);
    assert!(!state.show_level_up_modal);
}

#[test]
fn test_single_level_up() {
    let today = day("2024-04-10");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 20)], today);
    state.xp = 40;

    state.complete_habit(&id("a"), today);

    assert_eq!(state.level, 2);
    assert_eq!(state.xp, 10);
    assert!(state.show_level_up_modal);
}

#[test]
fn test_multiple_level_ups_in_one_completion() {
    let today = day("2024-04-10");
    let mut state = state_with(vec![habit("a", SkillType::Wisdom, 170)], today);

    let events = state.complete_habit(&id("a"), today);

    assert_eq!(state.level, 3);
    assert_eq!(state.xp, 20);
    assert!(state.show_level_up_modal);
    assert!(events.contains(&ProgressionEvent::LevelUp {
        old_level: 1,
        new_level: 3
    }));
}

#[test]
fn test_exact_threshold_leaves_zero_xp() {
    let today = day("2024-04-10");
    let mut state = state_with(vec![habit("a", SkillType::Agility, 50)], today);

    state.complete_habit(&id("a"), today);

    assert_eq!((state.level, state.xp), (2, 0));
}

#[test]
fn test_xp_stays_below_threshold_after_many_completions() {
    let mut state = state_with(Vec::new(), day("2024-04-01"));
    for n in 0..30 {
        let today = day("2024-04-01") + chrono::Duration::days(n);
        let quest = format!("q{}", n);
        state.add_habit(habit(&quest, SkillType::Charisma, 100), today);
        state.complete_habit(&id(&quest), today);
        assert!(state.xp < xp_required_to_advance(state.level));
    }
    assert_eq!(state.total_xp(), 3000);
    assert_eq!(state.stats.charisma, 31);
}

#[test]
fn test_stat_follows_habit_type() {
    let today = day("2024-04-10");
    let mut state = state_with(
        vec![
            habit("s", SkillType::Strength, 5),
            habit("i", SkillType::Intelligence, 5),
            habit("i2", SkillType::Intelligence, 5),
        ],
        today,
    );

    state.complete_habit(&id("s"), today);
    state.complete_habit(&id("i"), today);
    state.complete_habit(&id("i2"), today);

    assert_eq!(state.stats.strength, 2);
    assert_eq!(state.stats.intelligence, 3);
    assert_eq!(state.stats.wisdom, 1);
    assert_eq!(state.stats.charisma, 1);
    assert_eq!(state.stats.agility, 1);
}

#[test]
fn test_double_completion_is_noop() {
    let today = day("2024-04-10");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 30)], today);

    state.complete_habit(&id("a"), today);
    let before = state.clone();

    let events = state.complete_habit(&id("a"), today);
    assert!(events.is_empty());
    assert_eq!(state, before);
}

#[test]
fn test_unknown_id_is_noop() {
    let today = day("2024-04-10");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 30)], today);
    let before = state.clone();

    assert!(state.complete_habit(&id("missing"), today).is_empty());
    assert_eq!(state, before);
}
