//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only (coin phases)
//! - Stable iteration order (actor spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod geometry;
pub mod grid;
pub mod level;
pub mod parser;

pub use actor::{Actor, ActorId, ActorKind, Behavior, FireballMotion, Spring};
pub use geometry::{Bounds, Vector};
pub use grid::{Grid, Obstacle};
pub use level::{Level, Outcome, TouchKind};
pub use parser::{Glyph, Legend, LevelParser};
