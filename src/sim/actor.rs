//! Moving entities: player, fireballs and coins
//!
//! Every actor is an axis-aligned box with a position, a fixed size and a
//! velocity. Per-kind motion lives in [`Behavior`], a closed set of
//! variants dispatched in [`Actor::act`].

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Vector};
use super::grid::Grid;
use crate::consts::*;

/// Stable handle of an actor inside a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor #{}", self.0)
    }
}

/// Gameplay tag of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Player,
    Fireball,
    Coin,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Player => "player",
            ActorKind::Fireball => "fireball",
            ActorKind::Coin => "coin",
        }
    }
}

/// What a fireball does when its next step is blocked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireballMotion {
    /// Reverse velocity and stay put this tick
    Bounce,
    /// Teleport back to the spawn position and keep falling
    Rain { home: Vector },
}

/// Bobbing animation state of a coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Rest position the coin oscillates around
    pub home: Vector,
    /// Current phase (radians)
    pub phase: f32,
    pub speed: f32,
    pub amplitude: f32,
}

/// Per-kind motion rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Moved only by the embedding application's input handler
    Player,
    Fireball(FireballMotion),
    Coin(Spring),
}

/// A moving or interactive box in a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Assigned by [`super::Level::spawn`]; zero until then
    pub id: ActorId,
    /// Top-left corner
    pub pos: Vector,
    /// Units per second
    pub vel: Vector,
    size: Vector,
    behavior: Behavior,
}

impl Actor {
    fn with_behavior(pos: Vector, size: Vector, vel: Vector, behavior: Behavior) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "actor size must be positive");
        Self {
            id: ActorId::default(),
            pos,
            vel,
            size,
            behavior,
        }
    }

    /// Player standing on the floor of `cell`
    pub fn player(cell: Vector) -> Self {
        Self::with_behavior(
            cell + Vec2::from(PLAYER_SPAWN_OFFSET),
            Vec2::from(PLAYER_SIZE),
            Vec2::ZERO,
            Behavior::Player,
        )
    }

    /// Bouncing fireball with an arbitrary velocity
    pub fn fireball(pos: Vector, vel: Vector) -> Self {
        Self::with_behavior(
            pos,
            Vec2::from(FIREBALL_SIZE),
            vel,
            Behavior::Fireball(FireballMotion::Bounce),
        )
    }

    /// Fireball patrolling left and right
    pub fn horizontal_fireball(pos: Vector) -> Self {
        Self::fireball(pos, Vec2::new(HORIZONTAL_FIREBALL_SPEED, 0.0))
    }

    /// Fireball patrolling up and down
    pub fn vertical_fireball(pos: Vector) -> Self {
        Self::fireball(pos, Vec2::new(0.0, VERTICAL_FIREBALL_SPEED))
    }

    /// Falling fireball that restarts from `pos` whenever it lands
    pub fn fire_rain(pos: Vector) -> Self {
        Self::with_behavior(
            pos,
            Vec2::from(FIREBALL_SIZE),
            Vec2::new(0.0, FIRE_RAIN_SPEED),
            Behavior::Fireball(FireballMotion::Rain { home: pos }),
        )
    }

    /// Coin centered in `cell`, starting its bob at `phase`
    pub fn coin(cell: Vector, phase: f32) -> Self {
        let home = cell + Vec2::from(COIN_OFFSET);
        Self::with_behavior(
            home,
            Vec2::from(COIN_SIZE),
            Vec2::ZERO,
            Behavior::Coin(Spring {
                home,
                phase,
                speed: COIN_SPRING_SPEED,
                amplitude: COIN_SPRING_AMPLITUDE,
            }),
        )
    }

    #[inline]
    pub fn size(&self) -> Vector {
        self.size
    }

    #[inline]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn kind(&self) -> ActorKind {
        match self.behavior {
            Behavior::Player => ActorKind::Player,
            Behavior::Fireball(_) => ActorKind::Fireball,
            Behavior::Coin(_) => ActorKind::Coin,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Positive-area intersection with another actor; never true for itself
    pub fn overlaps(&self, other: &Actor) -> bool {
        if std::ptr::eq(self, other) {
            return false;
        }
        self.bounds().overlaps(&other.bounds())
    }

    /// Advance this actor by `dt` seconds against the static terrain
    pub fn act(&mut self, dt: f32, grid: &Grid) {
        match self.behavior {
            Behavior::Player => {}
            Behavior::Fireball(motion) => {
                let next = self.pos + self.vel * dt;
                if grid.obstacle_at(next, self.size).is_none() {
                    self.pos = next;
                } else {
                    match motion {
                        FireballMotion::Bounce => self.vel = -self.vel,
                        FireballMotion::Rain { home } => self.pos = home,
                    }
                }
            }
            Behavior::Coin(ref mut spring) => {
                spring.phase += spring.speed * dt;
                self.pos = spring.home + Vec2::new(0.0, spring.phase.sin() * spring.amplitude);
            }
        }
    }
}
