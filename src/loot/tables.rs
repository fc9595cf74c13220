//! Registry of per-entity drop tables plus the shared rare drop table.
//!
//! Hosts load this once at startup from their static content data and pass
//! it by reference into kill resolution. Referencing an entity with no
//! registered table is a host programming error and surfaces as
//! [`LootError::UnknownEntity`].

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::loot::resolver::resolve_loot;
use crate::loot::types::{Drop, DropTable, LootError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DropTables {
    tables: HashMap<String, DropTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rare: Option<DropTable>,
}

impl DropTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity_id: impl Into<String>, table: DropTable) {
        self.tables.insert(entity_id.into(), table);
    }

    /// Installs the shared rare drop table reachable from any kill.
    pub fn set_rare_table(&mut self, table: DropTable) {
        self.rare = Some(table);
    }

    pub fn get(&self, entity_id: &str) -> Option<&DropTable> {
        self.tables.get(entity_id)
    }

    pub fn rare_table(&self) -> Option<&DropTable> {
        self.rare.as_ref()
    }

    /// Resolves the drops for a kill of `entity_id`.
    pub fn resolve_kill(
        &self,
        entity_id: &str,
        rng: &mut impl Rng,
    ) -> Result<Vec<Drop>, LootError> {
        let table = self.get(entity_id).ok_or_else(|| LootError::UnknownEntity {
            id: entity_id.to_string(),
        })?;
        Ok(resolve_loot(table, self.rare_table(), rng))
    }
}
