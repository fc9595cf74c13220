//! Towncore - Combat & Progression Resolution Library
//!
//! Pure, synchronous game logic for a small RPG town: experience tables and
//! level resolution, attack/damage rolls, combat experience awards, tiered
//! loot tables with a shared rare drop table, and the action cooldown gate.
//!
//! The crate owns no rendering, UI, persistence or content data. Hosts pass
//! data tables in as plain parameters, thread simulation time explicitly
//! through every time-sensitive call, and supply the random source for every
//! roll, so all outcomes are deterministic under test.

pub mod combat;
pub mod core;
pub mod loot;
pub mod skills;

pub use combat::encounter::{perform_attack, CombatEvent, EncounterTables};
pub use combat::monster::{Monster, MonsterDef};
pub use combat::resolver::{max_hit, resolve_attack};
pub use combat::scheduler::ActionCooldown;
pub use combat::types::{
    CombatOutcome, CombatStats, CombatStyle, Combatant, EquipmentBonuses, HealthPool, Player,
};
pub use loot::resolver::resolve_loot;
pub use loot::tables::DropTables;
pub use loot::types::{Drop, DropTable, ItemId, LootEntry, LootError, RarityTier};
pub use skills::awards::{award_combat_xp, award_xp};
pub use skills::experience::{ExperienceError, ExperienceTable};
pub use skills::types::{Skill, SkillName, SkillSet};
