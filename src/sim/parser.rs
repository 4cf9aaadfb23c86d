//! Text plan to [`Level`] translation
//!
//! A plan is a list of rows, one character per cell. `x` is a wall, `!` is
//! lava, and any symbol found in the legend is looked up there. Unknown
//! symbols are empty cells.

use std::collections::BTreeMap;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::geometry::Vector;
use super::grid::{Grid, Obstacle};
use super::level::Level;

/// What a legend symbol stands for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Wall,
    Lava,
    Player,
    Coin,
    Fireball { velocity: Vector },
    HorizontalFireball,
    VerticalFireball,
    FireRain,
}

impl Glyph {
    /// Terrain for obstacle glyphs
    pub fn obstacle(&self) -> Option<Obstacle> {
        match self {
            Glyph::Wall => Some(Obstacle::Wall),
            Glyph::Lava => Some(Obstacle::Lava),
            _ => None,
        }
    }

    /// Build the actor for `cell`; obstacle glyphs build nothing
    pub fn spawn<R: Rng>(&self, cell: Vector, rng: &mut R) -> Option<Actor> {
        match *self {
            Glyph::Wall | Glyph::Lava => None,
            Glyph::Player => Some(Actor::player(cell)),
            Glyph::Coin => Some(Actor::coin(cell, rng.random_range(0.0..TAU))),
            Glyph::Fireball { velocity } => Some(Actor::fireball(cell, velocity)),
            Glyph::HorizontalFireball => Some(Actor::horizontal_fireball(cell)),
            Glyph::VerticalFireball => Some(Actor::vertical_fireball(cell)),
            Glyph::FireRain => Some(Actor::fire_rain(cell)),
        }
    }

    pub fn is_actor(&self) -> bool {
        self.obstacle().is_none()
    }
}

/// Symbol table used by [`LevelParser`]
pub type Legend = BTreeMap<char, Glyph>;

/// Builds levels from text plans
#[derive(Debug, Clone, Default)]
pub struct LevelParser {
    legend: Legend,
}

impl LevelParser {
    pub fn new(legend: Legend) -> Self {
        Self { legend }
    }

    /// Actor glyph for `symbol`, if the legend has one
    pub fn actor_from_symbol(&self, symbol: char) -> Option<Glyph> {
        self.legend.get(&symbol).copied().filter(Glyph::is_actor)
    }

    /// Terrain for `symbol`. Legend entries take precedence over the
    /// built-in `x` and `!`, so an actor symbol always leaves its cell empty.
    pub fn obstacle_from_symbol(&self, symbol: char) -> Option<Obstacle> {
        if let Some(glyph) = self.legend.get(&symbol) {
            return glyph.obstacle();
        }
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn create_grid(&self, plan: &[impl AsRef<str>]) -> Grid {
        Grid::new(
            plan.iter()
                .map(|row| {
                    row.as_ref()
                        .chars()
                        .map(|symbol| self.obstacle_from_symbol(symbol))
                        .collect()
                })
                .collect(),
        )
    }

    /// Spawn every actor symbol at its `(column, row)` cell, in row-major order
    pub fn create_actors<R: Rng>(&self, plan: &[impl AsRef<str>], rng: &mut R) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                let Some(glyph) = self.actor_from_symbol(symbol) else {
                    continue;
                };
                if let Some(actor) = glyph.spawn(Vec2::new(x as f32, y as f32), rng) {
                    actors.push(actor);
                }
            }
        }
        actors
    }

    /// Parse with coin phases drawn from `rng`
    pub fn parse_with_rng<R: Rng>(&self, plan: &[impl AsRef<str>], rng: &mut R) -> Level {
        let level = Level::new(self.create_grid(plan), self.create_actors(plan, rng));
        log::debug!(
            "Parsed {}x{} level with {} actors",
            level.width(),
            level.height(),
            level.actors().len()
        );
        level
    }

    /// Reproducible parse: the same seed gives the same coin phases
    pub fn parse_seeded(&self, plan: &[impl AsRef<str>], seed: u64) -> Level {
        let mut rng = Pcg32::seed_from_u64(seed);
        self.parse_with_rng(plan, &mut rng)
    }

    /// Parse with a random seed
    pub fn parse(&self, plan: &[impl AsRef<str>]) -> Level {
        let seed: u64 = rand::random();
        log::debug!("Parsing level with coin seed {}", seed);
        self.parse_seeded(plan, seed)
    }
}
