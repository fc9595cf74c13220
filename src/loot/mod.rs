//! Tiered drop tables, the shared rare drop table and loot resolution.

pub mod resolver;
pub mod tables;
pub mod types;

pub use resolver::resolve_loot;
pub use tables::DropTables;
pub use types::{Drop, DropTable, ItemId, LootEntry, LootError, RarityTier};
