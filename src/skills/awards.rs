//! Experience awards and level-up reporting.
//!
//! The only place a skill's level changes outside initialization. Combat
//! awards follow the fixed ratios: every point of damage grants Hitpoints
//! experience, and the active combat style decides which one of
//! Attack/Strength/Defence receives the style award.

use crate::combat::types::CombatStyle;
use crate::core::constants::{HITPOINTS_XP_PER_DAMAGE, STYLE_XP_PER_DAMAGE};
use crate::skills::experience::ExperienceTable;
use crate::skills::types::{SkillName, SkillSet};

/// Adds `amount` experience to one skill and re-derives its level.
/// Returns the skill name when it leveled up. Used directly for
/// gathering/production awards (woodcutting, mining, fishing, cooking).
pub fn award_xp(
    skills: &mut SkillSet,
    skill: SkillName,
    amount: f64,
    table: &ExperienceTable,
) -> Option<SkillName> {
    skills.get_mut(skill).add_xp(amount, table).then_some(skill)
}

/// Awards combat experience for damage dealt: `1.33 * damage` to Hitpoints
/// unconditionally and `4 * damage` to the style's skill. Returns every
/// skill that leveled up as a result.
pub fn award_combat_xp(
    skills: &mut SkillSet,
    damage: u32,
    style: CombatStyle,
    table: &ExperienceTable,
) -> Vec<SkillName> {
    let mut leveled = Vec::new();
    let damage = damage as f64;

    if let Some(skill) = award_xp(
        skills,
        SkillName::Hitpoints,
        damage * HITPOINTS_XP_PER_DAMAGE,
        table,
    ) {
        leveled.push(skill);
    }
    if let Some(skill) = award_xp(skills, style.xp_skill(), damage * STYLE_XP_PER_DAMAGE, table) {
        leveled.push(skill);
    }

    leveled
}
