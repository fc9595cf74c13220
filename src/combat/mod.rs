//! Combat resolution: stat snapshots, attack rolls, action cooldowns and
//! the encounter event loop glue.

pub mod encounter;
pub mod monster;
pub mod resolver;
pub mod scheduler;
pub mod types;

pub use encounter::{perform_attack, CombatEvent, EncounterTables};
pub use monster::{Monster, MonsterDef};
pub use resolver::{max_hit, resolve_attack};
pub use scheduler::ActionCooldown;
pub use types::{
    CombatOutcome, CombatStats, CombatStyle, Combatant, EquipmentBonuses, HealthPool, Player,
};
