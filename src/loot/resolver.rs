//! Loot resolution for a kill.
//!
//! Every entry in the defeated entity's table is an independent Bernoulli
//! trial against its own chance. A second, independent gate at 1/1000 then
//! grants a roll over the shared rare drop table, which uses the same
//! per-entry process. No drops at all is a common, valid outcome.

use rand::Rng;

use crate::core::constants::RARE_TABLE_CHANCE;
use crate::core::rolls::{roll_inclusive, roll_unit};
use crate::loot::types::{Drop, DropTable, LootEntry};

fn roll_quantity(entry: &LootEntry, rng: &mut impl Rng) -> u32 {
    let (min, max) = (entry.min_quantity(), entry.max_quantity());
    if min == max {
        min
    } else {
        min + roll_inclusive(rng, max - min)
    }
}

fn roll_entries(table: &DropTable, rng: &mut impl Rng) -> Vec<Drop> {
    let mut drops = Vec::new();
    for entry in table.entries() {
        if roll_unit(rng) < entry.chance() {
            drops.push(Drop {
                item: entry.item().clone(),
                quantity: roll_quantity(entry, rng),
            });
        }
    }
    drops
}

/// Rolls a defeated entity's drop table, then independently gates access to
/// the shared rare drop table. Consumes only the random source; inventory
/// and entity state belong to the caller.
pub fn resolve_loot(
    table: &DropTable,
    rare_table: Option<&DropTable>,
    rng: &mut impl Rng,
) -> Vec<Drop> {
    let mut drops = roll_entries(table, rng);

    if let Some(rare) = rare_table {
        if roll_unit(rng) < RARE_TABLE_CHANCE {
            drops.extend(roll_entries(rare, rng));
        }
    }

    drops
}
