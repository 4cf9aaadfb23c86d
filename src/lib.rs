//! Tile Runner - A tile-based 2D platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, actors, grid, level state machine, parser)
//! - `config`: Data-driven level plans and symbol legend
//! - `error`: Contract and config errors
//!
//! Rendering, input capture and the "play every level" loop belong to the
//! embedding application, which polls [`sim::Level`] between frames.

pub mod config;
pub mod error;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, SimError};

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Grace period after a level is won or lost before it counts as finished
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player box, positioned half a cell above its spawn cell
    pub const PLAYER_SIZE: (f32, f32) = (0.8, 1.5);
    pub const PLAYER_SPAWN_OFFSET: (f32, f32) = (0.0, -0.5);

    /// Fireballs always occupy a full cell
    pub const FIREBALL_SIZE: (f32, f32) = (1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: f32 = 2.0;
    pub const VERTICAL_FIREBALL_SPEED: f32 = 2.0;
    pub const FIRE_RAIN_SPEED: f32 = 3.0;

    /// Coins are centered in their cell and bob vertically
    pub const COIN_SIZE: (f32, f32) = (0.6, 0.6);
    pub const COIN_OFFSET: (f32, f32) = (0.2, 0.1);
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    pub const COIN_SPRING_AMPLITUDE: f32 = 0.07;
}
