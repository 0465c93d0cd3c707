use serde::{Deserialize, Serialize};

/// The skill a habit trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Strength,
    Intelligence,
    Wisdom,
    Charisma,
    Agility,
}

impl SkillType {
    /// All skills in display order
    pub const ALL: [SkillType; 5] = [
        SkillType::Strength,
        SkillType::Intelligence,
        SkillType::Wisdom,
        SkillType::Charisma,
        SkillType::Agility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
            Self::Agility => "agility",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
            Self::Agility => "Agility",
        }
    }
}

impl std::fmt::Display for SkillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SkillType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "wisdom" | "wis" => Ok(Self::Wisdom),
            "charisma" | "cha" => Ok(Self::Charisma),
            "agility" | "agi" => Ok(Self::Agility),
            other => Err(format!(
                "Unknown skill '{}' (expected strength, intelligence, wisdom, charisma or agility)",
                other
            )),
        }
    }
}

/// Per-skill character counters. Each starts at 1 and only ever goes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub strength: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
    pub agility: u32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            strength: 1,
            intelligence: 1,
            wisdom: 1,
            charisma: 1,
            agility: 1,
        }
    }
}

impl CharacterStats {
    pub fn get(&self, skill: SkillType) -> u32 {
        match skill {
            SkillType::Strength => self.strength,
            SkillType::Intelligence => self.intelligence,
            SkillType::Wisdom => self.wisdom,
            SkillType::Charisma => self.charisma,
            SkillType::Agility => self.agility,
        }
    }

    /// Bump one counter by exactly 1, returning its new value
    pub fn increment(&mut self, skill: SkillType) -> u32 {
        let counter = match skill {
            SkillType::Strength => &mut self.strength,
            SkillType::Intelligence => &mut self.intelligence,
            SkillType::Wisdom => &mut self.wisdom,
            SkillType::Charisma => &mut self.charisma,
            SkillType::Agility => &mut self.agility,
        };
        *counter = counter.saturating_add(1);
        *counter
    }

    /// (skill, value) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (SkillType, u32)> + '_ {
        SkillType::ALL.into_iter().map(|skill| (skill, self.get(skill)))
    }
}
