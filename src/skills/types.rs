//! Skill records owned by a character.
//!
//! A `Skill` is a `{level, xp}` pair where the level is always derived from
//! the experience table — it is never set independently after
//! initialization. The one mutation point outside construction is the award
//! engine in [`crate::skills::awards`].

use serde::{Deserialize, Serialize};

use crate::core::constants::{NUM_SKILLS, STARTING_HITPOINTS_LEVEL};
use crate::skills::experience::{ExperienceError, ExperienceTable};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SkillName {
    Attack,
    Strength,
    Defence,
    Ranged,
    Magic,
    Hitpoints,
    Woodcutting,
    Mining,
    Fishing,
    Cooking,
}

impl SkillName {
    pub fn all() -> [SkillName; NUM_SKILLS] {
        [
            SkillName::Attack,
            SkillName::Strength,
            SkillName::Defence,
            SkillName::Ranged,
            SkillName::Magic,
            SkillName::Hitpoints,
            SkillName::Woodcutting,
            SkillName::Mining,
            SkillName::Fishing,
            SkillName::Cooking,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            SkillName::Attack => 0,
            SkillName::Strength => 1,
            SkillName::Defence => 2,
            SkillName::Ranged => 3,
            SkillName::Magic => 4,
            SkillName::Hitpoints => 5,
            SkillName::Woodcutting => 6,
            SkillName::Mining => 7,
            SkillName::Fishing => 8,
            SkillName::Cooking => 9,
        }
    }

    pub fn is_combat(&self) -> bool {
        matches!(
            self,
            SkillName::Attack
                | SkillName::Strength
                | SkillName::Defence
                | SkillName::Ranged
                | SkillName::Magic
                | SkillName::Hitpoints
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            SkillName::Attack => "Attack",
            SkillName::Strength => "Strength",
            SkillName::Defence => "Defence",
            SkillName::Ranged => "Ranged",
            SkillName::Magic => "Magic",
            SkillName::Hitpoints => "Hitpoints",
            SkillName::Woodcutting => "Woodcutting",
            SkillName::Mining => "Mining",
            SkillName::Fishing => "Fishing",
            SkillName::Cooking => "Cooking",
        }
    }
}

/// A single skill's progress. `level` is derived from `xp` via the
/// experience table after every mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    level: u8,
    xp: f64,
}

impl Skill {
    /// Fresh skill at level 1 with no experience.
    pub fn new() -> Self {
        Self { level: 1, xp: 0.0 }
    }

    /// Skill seeded at `level` with exactly that level's threshold xp.
    pub fn at_level(level: u8, table: &ExperienceTable) -> Result<Self, ExperienceError> {
        let xp = table.threshold_for(level)? as f64;
        Ok(Self { level, xp })
    }

    /// Skill reconstructed from a raw experience total (e.g. a loaded save).
    pub fn from_xp(xp: f64, table: &ExperienceTable) -> Self {
        Self {
            level: table.level_for(xp),
            xp,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn xp(&self) -> f64 {
        self.xp
    }

    /// Adds experience and re-derives the level. Returns true when the
    /// level increased. Only the award engine calls this.
    pub(crate) fn add_xp(&mut self, amount: f64, table: &ExperienceTable) -> bool {
        debug_assert!(amount >= 0.0, "xp awards are non-negative");
        self.xp += amount;
        let new_level = table.level_for(self.xp);
        let leveled = new_level > self.level;
        self.level = new_level;
        leveled
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::new()
    }
}

/// One `Skill` record per [`SkillName`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SkillSet {
    values: [Skill; NUM_SKILLS],
}

impl SkillSet {
    /// New character skills: everything at level 1 except Hitpoints, which
    /// starts at level 10 with the matching threshold xp.
    pub fn new(table: &ExperienceTable) -> Self {
        let mut values = [Skill::new(); NUM_SKILLS];
        values[SkillName::Hitpoints.index()] =
            Skill::at_level(STARTING_HITPOINTS_LEVEL, table).expect("starting level is in range");
        Self { values }
    }

    pub fn get(&self, skill: SkillName) -> Skill {
        self.values[skill.index()]
    }

    pub fn level(&self, skill: SkillName) -> u8 {
        self.values[skill.index()].level()
    }

    pub fn xp(&self, skill: SkillName) -> f64 {
        self.values[skill.index()].xp()
    }

    pub fn total_level(&self) -> u32 {
        self.values.iter().map(|s| s.level() as u32).sum()
    }

    pub(crate) fn get_mut(&mut self, skill: SkillName) -> &mut Skill {
        &mut self.values[skill.index()]
    }
}
