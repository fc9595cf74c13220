//! Skill records, the experience table and experience awards.

pub mod awards;
pub mod experience;
pub mod types;

pub use awards::{award_combat_xp, award_xp};
pub use experience::{ExperienceError, ExperienceTable};
pub use types::{Skill, SkillName, SkillSet};
