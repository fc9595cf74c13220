//! Attack resolution: accuracy and damage rolls.
//!
//! The accuracy check is the two-sided roll comparison: attacker and
//! defender each draw a uniform integer bounded by their effective level,
//! and the attack lands only when the attacker's draw is strictly greater.
//! An exact tie counts as a miss, which puts the hit rate at stat parity
//! just under 50%.
//!
//! The max hit is the exact integer formula
//! `floor(effective_strength * (64 + strength_bonus) / 640)` with effective
//! strength = strength level + 8 (+3 when the style is Aggressive). Damage
//! on a successful hit is uniform in `[0, max_hit]` inclusive, so a hit can
//! still deal 0 damage.

use rand::Rng;

use crate::combat::types::{CombatOutcome, CombatStyle, Combatant};
use crate::core::constants::{
    EFFECTIVE_LEVEL_OFFSET, MAX_HIT_BONUS_BASE, MAX_HIT_DIVISOR, STYLE_FOCUS_BONUS,
};
use crate::core::rolls::roll_inclusive;

fn effective_level(level: u8, bonus: i32, focused: bool) -> u32 {
    let mut effective = level as i64 + bonus as i64 + EFFECTIVE_LEVEL_OFFSET as i64;
    if focused {
        effective += STYLE_FOCUS_BONUS as i64;
    }
    effective.max(0) as u32
}

fn effective_attack(attacker: &impl Combatant) -> u32 {
    effective_level(
        attacker.combat_stats().attack,
        attacker.equipment_bonuses().attack,
        attacker.combat_style() == CombatStyle::Accurate,
    )
}

fn effective_defence(defender: &impl Combatant) -> u32 {
    effective_level(
        defender.combat_stats().defence,
        defender.equipment_bonuses().defence,
        defender.combat_style() == CombatStyle::Defensive,
    )
}

/// Upper bound (inclusive) of the damage roll for this attacker's current
/// strength level, strength bonus and style.
pub fn max_hit(attacker: &impl Combatant) -> u32 {
    let effective_strength = effective_level(
        attacker.combat_stats().strength,
        0,
        attacker.combat_style() == CombatStyle::Aggressive,
    );
    let multiplier =
        (MAX_HIT_BONUS_BASE as i64 + attacker.equipment_bonuses().strength as i64).max(0) as u32;
    effective_strength * multiplier / MAX_HIT_DIVISOR
}

/// Resolves a single attack between two stat snapshots. Reads both
/// combatants, mutates neither; the caller applies the damage.
///
/// Draw order is fixed: attacker accuracy, defender accuracy, then (only on
/// a hit) the damage roll.
pub fn resolve_attack(
    attacker: &impl Combatant,
    defender: &impl Combatant,
    rng: &mut impl Rng,
) -> CombatOutcome {
    let attack_roll = roll_inclusive(rng, effective_attack(attacker));
    let defence_roll = roll_inclusive(rng, effective_defence(defender));

    if attack_roll <= defence_roll {
        return CombatOutcome::miss();
    }

    let damage = roll_inclusive(rng, max_hit(attacker));
    CombatOutcome::hit(damage)
}
