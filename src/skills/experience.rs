//! The cumulative experience table and level resolution.
//!
//! One threshold per level 1..=99. Position `i` (0-indexed) holds the
//! minimum cumulative experience required for level `i + 1`, so
//! `thresholds[0] == 0` and the sequence is strictly increasing. The table
//! is generated once and is immutable for the process lifetime; every query
//! is a pure function over it.

use thiserror::Error;

use crate::core::constants::MAX_LEVEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExperienceError {
    /// A level outside 1..=99 was passed where a valid level is required.
    #[error("level {level} is outside the valid range 1..=99")]
    LevelOutOfRange { level: u8 },
}

/// Fixed lookup table mapping levels to cumulative experience thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceTable {
    thresholds: [u64; MAX_LEVEL as usize],
}

impl Default for ExperienceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceTable {
    /// Builds the standard experience curve: each level `l` contributes
    /// `floor(l + 300 * 2^(l/7))` points, and the threshold for the next
    /// level is the running total divided by 4, floored. Level 99 lands at
    /// 13,034,431 cumulative experience.
    pub fn new() -> Self {
        let mut thresholds = [0u64; MAX_LEVEL as usize];
        let mut points = 0.0f64;
        for level in 1..MAX_LEVEL as usize {
            points += (level as f64 + 300.0 * 2f64.powf(level as f64 / 7.0)).floor();
            thresholds[level] = (points / 4.0).floor() as u64;
        }
        debug_assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
        Self { thresholds }
    }

    /// Returns the highest level whose threshold is at or below `xp`.
    /// Clamps to 1 below the first threshold and to 99 at or above the last.
    pub fn level_for(&self, xp: f64) -> u8 {
        let count = self.thresholds.partition_point(|&t| t as f64 <= xp);
        count.max(1) as u8
    }

    /// Returns the cumulative experience required to hold `level`.
    pub fn threshold_for(&self, level: u8) -> Result<u64, ExperienceError> {
        if level == 0 || level > MAX_LEVEL {
            return Err(ExperienceError::LevelOutOfRange { level });
        }
        Ok(self.thresholds[level as usize - 1])
    }

    /// Experience still needed to reach the next level, or 0.0 at the cap.
    pub fn xp_to_next_level(&self, xp: f64) -> f64 {
        let level = self.level_for(xp);
        if level >= MAX_LEVEL {
            return 0.0;
        }
        self.thresholds[level as usize] as f64 - xp
    }

    /// Fraction of the way from the current level's threshold to the next,
    /// in `[0, 1]`. Always 1.0 at the level cap.
    pub fn progress_to_next_level(&self, xp: f64) -> f64 {
        let level = self.level_for(xp);
        if level >= MAX_LEVEL {
            return 1.0;
        }
        let current = self.thresholds[level as usize - 1] as f64;
        let next = self.thresholds[level as usize] as f64;
        ((xp - current) / (next - current)).clamp(0.0, 1.0)
    }
}
