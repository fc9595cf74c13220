//! The action cooldown gate.
//!
//! Simulation time is an explicit parameter, never wall clock, so hosts and
//! tests drive it deterministically. The gate holds no queue: a request made
//! while cooling down is simply rejected and the caller decides whether to
//! retry on a later tick.

use serde::{Deserialize, Serialize};

use crate::core::constants::MELEE_ATTACK_COOLDOWN_SECONDS;

/// Per-actor cooldown state for one gated action category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActionCooldown {
    /// Simulation time of the last successful action. `None` until the
    /// actor acts for the first time, so a fresh actor can act immediately.
    last_action_at: Option<f64>,
    cooldown_seconds: f64,
}

impl ActionCooldown {
    pub fn new(cooldown_seconds: f64) -> Self {
        Self {
            last_action_at: None,
            cooldown_seconds,
        }
    }

    /// Cooldown for melee attacks (2.4 simulated seconds).
    pub fn melee() -> Self {
        Self::new(MELEE_ATTACK_COOLDOWN_SECONDS)
    }

    /// True when the cooldown has fully elapsed at simulation time `now`.
    pub fn can_act(&self, now: f64) -> bool {
        match self.last_action_at {
            Some(at) => now - at >= self.cooldown_seconds,
            None => true,
        }
    }

    /// Marks a successful action at simulation time `now`, restarting the
    /// cooldown.
    pub fn record_action(&mut self, now: f64) {
        self.last_action_at = Some(now);
    }

    /// Seconds left until the actor may act again; 0.0 when ready.
    pub fn remaining(&self, now: f64) -> f64 {
        match self.last_action_at {
            Some(at) => (self.cooldown_seconds - (now - at)).max(0.0),
            None => 0.0,
        }
    }
}
