//! Encounter glue: one attack request from gate to drop list.
//!
//! `perform_attack` is the control flow a host's entity layer drives every
//! simulation tick: cooldown gate, attack resolution, damage application,
//! experience awards and, on a kill, loot resolution. Results come back as
//! plain events for the presentation and UI layers to display; the core
//! holds no reference to either.

use rand::Rng;

use crate::combat::monster::Monster;
use crate::combat::resolver::resolve_attack;
use crate::combat::types::Player;
use crate::loot::tables::DropTables;
use crate::loot::types::{Drop, LootError};
use crate::skills::awards::award_combat_xp;
use crate::skills::experience::ExperienceTable;
use crate::skills::types::SkillName;

/// The static data an encounter reads: the experience table and the host's
/// drop table registry. Both are owned by the host and passed by reference.
#[derive(Debug, Clone, Copy)]
pub struct EncounterTables<'a> {
    pub experience: &'a ExperienceTable,
    pub drops: &'a DropTables,
}

/// What happened in response to one attack request.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// The attack cooldown has not elapsed; nothing was rolled.
    OnCooldown,
    /// The accuracy check failed.
    Missed,
    /// The accuracy check passed; `damage` may be 0.
    Hit { damage: u32 },
    /// An experience award pushed a skill past a level threshold.
    LeveledUp { skill: SkillName },
    /// The target's health reached zero. Loot was resolved exactly once.
    TargetDied { drops: Vec<Drop> },
}

/// Resolves one attack request at simulation time `now`.
///
/// Errors only when a defeated monster references a drop table the registry
/// does not contain, which is a host data bug.
pub fn perform_attack(
    player: &mut Player,
    target: &mut Monster,
    tables: &EncounterTables<'_>,
    now: f64,
    rng: &mut impl Rng,
) -> Result<Vec<CombatEvent>, LootError> {
    let mut events = Vec::new();

    if !player.cooldown.can_act(now) {
        events.push(CombatEvent::OnCooldown);
        return Ok(events);
    }
    player.cooldown.record_action(now);

    let outcome = resolve_attack(&*player, &*target, rng);
    if !outcome.hit {
        events.push(CombatEvent::Missed);
        return Ok(events);
    }

    target.health.take_damage(outcome.damage);
    events.push(CombatEvent::Hit {
        damage: outcome.damage,
    });

    for skill in award_combat_xp(
        &mut player.skills,
        outcome.damage,
        player.style,
        tables.experience,
    ) {
        events.push(CombatEvent::LeveledUp { skill });
    }
    player.sync_max_health();

    if !target.is_alive() {
        let drops = match &target.drop_table {
            Some(id) => tables.drops.resolve_kill(id, rng)?,
            None => Vec::new(),
        };
        events.push(CombatEvent::TargetDied { drops });
    }

    Ok(events)
}
