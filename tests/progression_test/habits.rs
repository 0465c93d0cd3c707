//! Habit collection tests: add, edit, remove, level-up acknowledgement

use xpquest::{HabitDraft, HabitType, SkillType};

use crate::common::{day, habit, id, state_with};

#[test]
fn test_add_preserves_order() {
    let today = day("2024-09-01");
    let state = state_with(
        vec![
            habit("c", SkillType::Strength, 10),
            habit("a", SkillType::Wisdom, 10),
            habit("b", SkillType::Agility, 10),
        ],
        today,
    );
    let order: Vec<_> = state.habits().iter().map(|h| h.id.as_str()).collect();
    assert_eq!(order, vec!["c", "a", "b"]);
}

#[test]
fn test_edit_preserves_id_and_completion() {
    let today = day("2024-09-01");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 10)], today);
    state.complete_habit(&id("a"), today);

    assert!(state.update_habit(&id("a"), HabitDraft::new("Sprint", SkillType::Agility, 40)));

    let edited = state.habit(&id("a")).unwrap();
    assert_eq!(edited.id, id("a"));
    assert!(edited.completed);
    assert_eq!(edited.name, "Sprint");
    assert_eq!(edited.habit_type, HabitType::Skill(SkillType::Agility));
    assert_eq!(edited.xp_reward, 40);
}

#[test]
fn test_edit_does_not_touch_progression() {
    let today = day("2024-09-01");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 10)], today);
    state.complete_habit(&id("a"), today);
    let (level, xp, streak, stats) = (state.level, state.xp, state.streak, state.stats);

    state.update_habit(&id("a"), HabitDraft::new("Heavy", SkillType::Strength, 100));

    assert_eq!(
        (state.level, state.xp, state.streak, state.stats),
        (level, xp, streak, stats)
    );
}

#[test]
fn test_remove_missing_is_noop_for_habits() {
    let today = day("2024-09-01");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 10)], today);

    assert!(!state.remove_habit(&id("zzz"), today));
    assert_eq!(state.habits().len(), 1);
    assert!(state.remove_habit(&id("a"), today));
    assert!(state.habits().is_empty());
}

#[test]
fn test_acknowledge_level_up_only_clears_flag() {
    let today = day("2024-09-01");
    let mut state = state_with(vec![habit("a", SkillType::Strength, 80)], today);
    state.complete_habit(&id("a"), today);
    assert!(state.show_level_up_modal);

    let mut expected = state.clone();
    expected.show_level_up_modal = false;

    state.acknowledge_level_up();
    assert_eq!(state, expected);
}

#[test]
fn test_avatar_url_setter() {
    let today = day("2024-09-01");
    let mut state = state_with(Vec::new(), today);
    state.set_avatar_url(Some("data:image/jpeg;base64,AAAA".to_string()));
    assert_eq!(state.avatar_url.as_deref(), Some("data:image/jpeg;base64,AAAA"));
    state.set_avatar_url(None);
    assert!(state.avatar_url.is_none());
}
