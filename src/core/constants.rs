//! Balance constants shared by the combat, skill and loot modules.
//!
//! All core balance numbers live here. Change once, test everywhere.

// =============================================================================
// SKILLS & EXPERIENCE
// =============================================================================

/// Highest attainable skill level. The experience table has one cumulative
/// threshold per level up to this cap.
pub const MAX_LEVEL: u8 = 99;

/// Number of distinct skills a character owns.
pub const NUM_SKILLS: usize = 10;

/// Hitpoints level a fresh character starts at (all other skills start at 1).
pub const STARTING_HITPOINTS_LEVEL: u8 = 10;

/// Hitpoints experience awarded per point of damage dealt.
pub const HITPOINTS_XP_PER_DAMAGE: f64 = 1.33;

/// Experience awarded to the active combat style's skill per point of damage.
pub const STYLE_XP_PER_DAMAGE: f64 = 4.0;

// =============================================================================
// COMBAT FORMULAS
// =============================================================================

/// Fixed offset added to a combat level before it enters an accuracy or
/// max-hit computation.
pub const EFFECTIVE_LEVEL_OFFSET: u32 = 8;

/// Extra effective levels granted to the stat a combat style focuses on
/// (Accurate -> attack, Aggressive -> strength, Defensive -> defence).
pub const STYLE_FOCUS_BONUS: u32 = 3;

/// Multiplier base in the max-hit formula.
pub const MAX_HIT_BONUS_BASE: u32 = 64;

/// Divisor in the max-hit formula:
/// `max_hit = effective_strength * (64 + strength_bonus) / 640`.
pub const MAX_HIT_DIVISOR: u32 = 640;

// =============================================================================
// LOOT
// =============================================================================

/// Probability that any single kill also rolls the shared rare drop table.
/// Independent of the monster's own drop table.
pub const RARE_TABLE_CHANCE: f64 = 1.0 / 1000.0;

// =============================================================================
// ACTION TIMING
// =============================================================================

/// Cooldown between successive melee attacks, in simulated seconds.
pub const MELEE_ATTACK_COOLDOWN_SECONDS: f64 = 2.4;
