//! Combat-facing data: stat snapshots, equipment bonuses, health pools and
//! the `Combatant` capability implemented by player- and monster-like
//! entities.

use serde::{Deserialize, Serialize};

use crate::combat::scheduler::ActionCooldown;
use crate::skills::experience::ExperienceTable;
use crate::skills::types::{SkillName, SkillSet};

/// Snapshot of the combat-relevant levels of an entity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombatStats {
    pub attack: u8,
    pub strength: u8,
    pub defence: u8,
    #[serde(default)]
    pub ranged: u8,
    #[serde(default)]
    pub magic: u8,
}

/// Additive equipment bonuses. Negative values are legal (cursed or
/// makeshift gear); effective values clamp at zero inside the resolver.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EquipmentBonuses {
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub defence: i32,
}

/// The chosen combat focus. Grants +3 effective levels to the focused stat
/// and decides which skill receives the style experience award.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CombatStyle {
    #[default]
    Accurate,
    Aggressive,
    Defensive,
}

impl CombatStyle {
    /// The non-Hitpoints skill this style trains.
    pub fn xp_skill(&self) -> SkillName {
        match self {
            CombatStyle::Accurate => SkillName::Attack,
            CombatStyle::Aggressive => SkillName::Strength,
            CombatStyle::Defensive => SkillName::Defence,
        }
    }
}

/// Result of one attack resolution. `damage` is always 0 on a miss, and a
/// hit may still roll 0 damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatOutcome {
    pub hit: bool,
    pub damage: u32,
}

impl CombatOutcome {
    pub fn miss() -> Self {
        Self {
            hit: false,
            damage: 0,
        }
    }

    pub fn hit(damage: u32) -> Self {
        Self { hit: true, damage }
    }
}

/// Current/maximum health pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthPool {
    pub current: u32,
    pub max: u32,
}

impl HealthPool {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn heal_full(&mut self) {
        self.current = self.max;
    }
}

/// Capability exposed by anything that can take part in an attack
/// resolution. The resolver only reads these snapshots; callers apply
/// damage and experience themselves.
pub trait Combatant {
    fn combat_stats(&self) -> CombatStats;

    fn equipment_bonuses(&self) -> EquipmentBonuses {
        EquipmentBonuses::default()
    }

    fn combat_style(&self) -> CombatStyle {
        CombatStyle::default()
    }
}

/// A player-like combatant: skills, gear bonuses, a health pool and the
/// melee attack cooldown. The host's entity layer owns richer state
/// (position, appearance); this is only what the core needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub skills: SkillSet,
    pub bonuses: EquipmentBonuses,
    pub style: CombatStyle,
    pub health: HealthPool,
    pub cooldown: ActionCooldown,
}

impl Player {
    pub fn new(table: &ExperienceTable) -> Self {
        let skills = SkillSet::new(table);
        let health = HealthPool::new(skills.level(SkillName::Hitpoints) as u32);
        Self {
            skills,
            bonuses: EquipmentBonuses::default(),
            style: CombatStyle::default(),
            health,
            cooldown: ActionCooldown::melee(),
        }
    }

    /// Raises the health cap to match the current Hitpoints level. Called
    /// after experience awards; current health is untouched.
    pub fn sync_max_health(&mut self) {
        self.health.max = self.skills.level(SkillName::Hitpoints) as u32;
    }
}

impl Combatant for Player {
    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack: self.skills.level(SkillName::Attack),
            strength: self.skills.level(SkillName::Strength),
            defence: self.skills.level(SkillName::Defence),
            ranged: self.skills.level(SkillName::Ranged),
            magic: self.skills.level(SkillName::Magic),
        }
    }

    fn equipment_bonuses(&self) -> EquipmentBonuses {
        self.bonuses
    }

    fn combat_style(&self) -> CombatStyle {
        self.style
    }
}
