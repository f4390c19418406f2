//! Horde Companion - decision engine for Horde Mode campaigns
//!
//! Resolves the random tables of a Horde Mode battle: enemy Spawn Rolls,
//! Misery card reveals with cascades, and Secondary Mission draws and
//! settlement. Every engine takes its random source as a parameter.

pub mod core;
pub mod misery;
pub mod round;
pub mod secondary;
pub mod spawn;

pub use crate::core::error::{HordeError, Result};
