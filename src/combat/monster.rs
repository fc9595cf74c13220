//! Data-table-backed monsters.
//!
//! The core ships no monster content. Hosts define `MonsterDef` rows in
//! their static data tables (goblins, chickens, cows, ...) and spawn live
//! `Monster` instances from them.

use serde::{Deserialize, Serialize};

use crate::combat::types::{CombatStats, CombatStyle, Combatant, EquipmentBonuses, HealthPool};

/// Static definition of a monster kind, as found in the host's data tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonsterDef {
    pub name: String,
    pub stats: CombatStats,
    #[serde(default)]
    pub bonuses: EquipmentBonuses,
    pub hitpoints: u32,
    /// Combat style the monster fights with. Defaults to Accurate; the
    /// focus bonus applies to whichever stat the style names.
    #[serde(default)]
    pub style: CombatStyle,
    /// Key into the host's drop table registry. `None` for monsters that
    /// drop nothing.
    #[serde(default)]
    pub drop_table: Option<String>,
}

/// A live monster spawned from a definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Monster {
    pub name: String,
    pub stats: CombatStats,
    pub bonuses: EquipmentBonuses,
    pub style: CombatStyle,
    pub health: HealthPool,
    pub drop_table: Option<String>,
}

impl Monster {
    pub fn spawn(def: &MonsterDef) -> Self {
        Self {
            name: def.name.clone(),
            stats: def.stats,
            bonuses: def.bonuses,
            style: def.style,
            health: HealthPool::new(def.hitpoints),
            drop_table: def.drop_table.clone(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }
}

impl Combatant for Monster {
    fn combat_stats(&self) -> CombatStats {
        self.stats
    }

    fn equipment_bonuses(&self) -> EquipmentBonuses {
        self.bonuses
    }

    fn combat_style(&self) -> CombatStyle {
        self.style
    }
}
