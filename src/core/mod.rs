//! Shared constants and roll primitives used by the combat, skill and loot
//! modules.

pub mod constants;
pub mod rolls;

pub use constants::*;
