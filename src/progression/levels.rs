//! XP and Level system
//!
//! XP is tracked per level: `xp` is what has been earned since the last
//! level-up, and advancing past level `n` costs `n * 50`.

/// XP cost per level step
pub const XP_PER_LEVEL_STEP: u32 = 50;

/// XP needed to go from `level` to `level + 1`
pub fn xp_required_to_advance(level: u32) -> u32 {
    level.saturating_mul(XP_PER_LEVEL_STEP)
}

/// Spend `xp` down against the thresholds starting at `level`.
///
/// Returns `(new_level, remaining_xp, levels_gained)`. The remainder is
/// always below `xp_required_to_advance(new_level)`.
pub fn resolve_level_ups(level: u32, xp: u32) -> (u32, u32, u32) {
    let mut level = level.max(1);
    let mut remaining = xp;
    let mut gained = 0;

    loop {
        let required = xp_required_to_advance(level);
        if remaining < required {
            break;
        }
        remaining -= required;
        level = level.saturating_add(1);
        gained += 1;
    }

    (level, remaining, gained)
}

/// Lifetime XP for a character at `level` holding `xp` within that level
pub fn total_xp(level: u32, xp: u32) -> u64 {
    // 50 * (1 + 2 + ... + (level - 1))
    let level = u64::from(level.max(1));
    (level - 1)
        .saturating_mul(level)
        .saturating_mul(u64::from(XP_PER_LEVEL_STEP) / 2)
        .saturating_add(u64::from(xp))
}

/// Progress through the current level, for XP bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub current: u32,
    pub required: u32,
}

impl LevelProgress {
    pub fn new(level: u32, xp: u32) -> Self {
        Self {
            level,
            current: xp,
            required: xp_required_to_advance(level),
        }
    }

    /// Calculate progress fraction to next level (0.0 - 1.0)
    pub fn fraction(&self) -> f32 {
        if self.required == 0 {
            return 1.0;
        }
        (self.current as f32 / self.required as f32).min(1.0)
    }

    /// XP still missing before the next level-up
    pub fn remaining(&self) -> u32 {
        self.required.saturating_sub(self.current)
    }
}
