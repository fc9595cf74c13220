//! Loot table data model.
//!
//! Tables are validated once, when constructed from the host's static data;
//! the resolver assumes well-formed entries and never re-checks per roll.
//! Rarity tiers are documentation labels only — resolution treats every
//! entry as an independent Bernoulli trial against its own chance.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LootError {
    #[error("drop chance {chance} for '{item}' is outside (0, 1]")]
    InvalidDropChance { item: ItemId, chance: f64 },
    #[error("quantity range {min}..={max} for '{item}' is invalid")]
    InvalidQuantityRange { item: ItemId, min: u32, max: u32 },
    #[error("no drop table registered for entity '{id}'")]
    UnknownEntity { id: String },
}

/// Identifier of an item in the host's content tables. The core never
/// interprets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Rarity tier label for a loot entry. Purely descriptive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RarityTier {
    Always,
    Common,
    Uncommon,
    Rare,
    VeryRare,
}

fn default_quantity() -> u32 {
    1
}

/// One potential drop: an item, its independent drop chance in `(0, 1]`,
/// and an inclusive quantity range (both bounds default to 1).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LootEntry {
    item: ItemId,
    chance: f64,
    #[serde(default = "default_quantity")]
    min_quantity: u32,
    #[serde(default = "default_quantity")]
    max_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tier: Option<RarityTier>,
}

impl LootEntry {
    pub fn new(item: impl Into<ItemId>, chance: f64) -> Result<Self, LootError> {
        Self::with_quantity(item, chance, 1, 1)
    }

    pub fn with_quantity(
        item: impl Into<ItemId>,
        chance: f64,
        min_quantity: u32,
        max_quantity: u32,
    ) -> Result<Self, LootError> {
        let entry = Self {
            item: item.into(),
            chance,
            min_quantity,
            max_quantity,
            tier: None,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Attaches the documentation tier label.
    pub fn tagged(mut self, tier: RarityTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), LootError> {
        if !(self.chance > 0.0 && self.chance <= 1.0) {
            return Err(LootError::InvalidDropChance {
                item: self.item.clone(),
                chance: self.chance,
            });
        }
        if self.min_quantity < 1 || self.min_quantity > self.max_quantity {
            return Err(LootError::InvalidQuantityRange {
                item: self.item.clone(),
                min: self.min_quantity,
                max: self.max_quantity,
            });
        }
        Ok(())
    }

    pub fn item(&self) -> &ItemId {
        &self.item
    }

    pub fn chance(&self) -> f64 {
        self.chance
    }

    pub fn min_quantity(&self) -> u32 {
        self.min_quantity
    }

    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    pub fn tier(&self) -> Option<RarityTier> {
        self.tier
    }
}

/// A validated set of loot entries for one defeated-entity kind (or for the
/// shared rare drop table). Entry order is preserved only so resolution is
/// reproducible under a seeded generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<LootEntry>", into = "Vec<LootEntry>")]
pub struct DropTable {
    entries: Vec<LootEntry>,
}

impl DropTable {
    /// Validates every entry. An empty table is legal (a monster that drops
    /// nothing).
    pub fn new(entries: Vec<LootEntry>) -> Result<Self, LootError> {
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LootEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<LootEntry>> for DropTable {
    type Error = LootError;

    fn try_from(entries: Vec<LootEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<DropTable> for Vec<LootEntry> {
    fn from(table: DropTable) -> Self {
        table.entries
    }
}

/// A resolved drop handed to the host's inventory/UI layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Drop {
    pub item: ItemId,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_rejects_out_of_range_chances() {
        assert!(matches!(
            LootEntry::new("bones", 0.0),
            Err(LootError::InvalidDropChance { .. })
        ));
        assert!(matches!(
            LootEntry::new("bones", 1.5),
            Err(LootError::InvalidDropChance { .. })
        ));
        assert!(matches!(
            LootEntry::new("bones", -0.2),
            Err(LootError::InvalidDropChance { .. })
        ));
        assert!(LootEntry::new("bones", 1.0).is_ok());
        assert!(LootEntry::new("bones", 0.001).is_ok());
    }

    #[test]
    fn test_entry_rejects_bad_quantity_ranges() {
        assert!(matches!(
            LootEntry::with_quantity("coins", 0.5, 10, 3),
            Err(LootError::InvalidQuantityRange { .. })
        ));
        assert!(matches!(
            LootEntry::with_quantity("coins", 0.5, 0, 3),
            Err(LootError::InvalidQuantityRange { .. })
        ));
        assert!(LootEntry::with_quantity("coins", 0.5, 3, 24).is_ok());
    }

    #[test]
    fn test_table_validation_catches_malformed_json() {
        let json = r#"[{ "item": "bones", "chance": 2.0 }]"#;
        let result: Result<DropTable, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_table_deserializes_with_quantity_defaults() {
        let json = r#"[
            { "item": "bones", "chance": 1.0, "tier": "always" },
            { "item": "coins", "chance": 0.5, "min_quantity": 3, "max_quantity": 24 },
            { "item": "rune-dagger", "chance": 0.01, "tier": "very-rare" }
        ]"#;
        let table: DropTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.entries().len(), 3);
        assert_eq!(table.entries()[0].min_quantity(), 1);
        assert_eq!(table.entries()[0].max_quantity(), 1);
        assert_eq!(table.entries()[0].tier(), Some(RarityTier::Always));
        assert_eq!(table.entries()[1].max_quantity(), 24);
        assert_eq!(table.entries()[2].tier(), Some(RarityTier::VeryRare));
    }

    #[test]
    fn test_empty_table_is_legal() {
        assert!(DropTable::new(Vec::new()).unwrap().is_empty());
    }
}
