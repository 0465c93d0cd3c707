use serde::{Deserialize, Serialize};

use super::SkillType;

/// Lowest XP reward a habit may grant
pub const MIN_XP_REWARD: u32 = 1;
/// Highest XP reward a habit may grant
pub const MAX_XP_REWARD: u32 = 100;

/// Stable, opaque habit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub String);

impl HabitId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for compact listings
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl From<&str> for HabitId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for HabitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `type` of a habit as stored in the state document.
///
/// Documents written by hand (or by older builds) may carry a type string
/// that is not a known skill. Those load fine and complete normally, they
/// just don't bump any stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HabitType {
    Skill(SkillType),
    Unrecognized(String),
}

impl HabitType {
    /// The stat this habit trains, if the type is a known skill
    pub fn skill(&self) -> Option<SkillType> {
        match self {
            HabitType::Skill(skill) => Some(*skill),
            HabitType::Unrecognized(_) => None,
        }
    }
}

impl From<SkillType> for HabitType {
    fn from(skill: SkillType) -> Self {
        HabitType::Skill(skill)
    }
}

impl std::fmt::Display for HabitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HabitType::Skill(skill) => write!(f, "{}", skill),
            HabitType::Unrecognized(raw) => write!(f, "{}?", raw),
        }
    }
}

/// A recurring daily quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    pub xp_reward: u32,
    pub completed: bool,
}

impl Habit {
    /// Create a new, not yet completed habit from a validated draft
    pub fn new(id: HabitId, draft: HabitDraft) -> Self {
        Self {
            id,
            name: draft.name,
            habit_type: draft.habit_type,
            xp_reward: draft.xp_reward,
            completed: false,
        }
    }

    /// Replace the user-editable fields. `id` and `completed` stay as they are.
    pub fn apply_edit(&mut self, draft: HabitDraft) {
        self.name = draft.name;
        self.habit_type = draft.habit_type;
        self.xp_reward = draft.xp_reward;
    }
}

/// Error type for habit input validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HabitValidationError {
    #[error("Habit name is required")]
    EmptyName,

    #[error("XP reward must be at least {MIN_XP_REWARD}")]
    XpRewardTooLow,

    #[error("XP reward cannot exceed {MAX_XP_REWARD}")]
    XpRewardTooHigh,
}

/// The user-editable part of a habit (everything except `id` and `completed`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitDraft {
    pub name: String,
    pub habit_type: HabitType,
    pub xp_reward: u32,
}

impl HabitDraft {
    pub fn new(name: impl Into<String>, habit_type: impl Into<HabitType>, xp_reward: u32) -> Self {
        Self {
            name: name.into(),
            habit_type: habit_type.into(),
            xp_reward,
        }
    }

    /// Check the draft before it is handed to the engine.
    ///
    /// The engine trusts its input, so this is the only place names and
    /// rewards are checked. The name is trimmed on success.
    pub fn validate(mut self) -> Result<Self, HabitValidationError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(HabitValidationError::EmptyName);
        }
        if self.xp_reward < MIN_XP_REWARD {
            return Err(HabitValidationError::XpRewardTooLow);
        }
        if self.xp_reward > MAX_XP_REWARD {
            return Err(HabitValidationError::XpRewardTooHigh);
        }
        self.name = trimmed.to_string();
        Ok(self)
    }
}

impl From<&Habit> for HabitDraft {
    fn from(habit: &Habit) -> Self {
        Self {
            name: habit.name.clone(),
            habit_type: habit.habit_type.clone(),
            xp_reward: habit.xp_reward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_name() {
        let draft = HabitDraft::new("  Push-ups  ", SkillType::Strength, 20)
            .validate()
            .unwrap();
        assert_eq!(draft.name, "Push-ups");
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert_eq!(
            HabitDraft::new("   ", SkillType::Wisdom, 10).validate(),
            Err(HabitValidationError::EmptyName)
        );
        assert_eq!(
            HabitDraft::new("Read", SkillType::Wisdom, 0).validate(),
            Err(HabitValidationError::XpRewardTooLow)
        );
        assert_eq!(
            HabitDraft::new("Read", SkillType::Wisdom, 101).validate(),
            Err(HabitValidationError::XpRewardTooHigh)
        );
        assert!(HabitDraft::new("Read", SkillType::Wisdom, 100).validate().is_ok());
    }

    #[test]
    fn test_habit_json_shape() {
        let habit = Habit::new(
            HabitId::from("1700000000000"),
            HabitDraft::new("Meditate", SkillType::Wisdom, 15),
        );
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["id"], "1700000000000");
        assert_eq!(json["type"], "wisdom");
        assert_eq!(json["xpReward"], 15);
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_unrecognized_type_survives_deserialize() {
        let json = r#"{"id":"a","name":"Juggle","type":"luck","xpReward":5,"completed":false}"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.habit_type, HabitType::Unrecognized("luck".to_string()));
        assert_eq!(habit.habit_type.skill(), None);

        let back = serde_json::to_value(&habit).unwrap();
        assert_eq!(back["type"], "luck");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(HabitId::from("abcdef0123456789").short(), "abcdef01");
        assert_eq!(HabitId::from("abc").short(), "abc");
    }
}
