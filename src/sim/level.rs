//! Level state: terrain, live actors and the win/loss state machine
//!
//! A level is polled by its driver: call [`Level::advance_time`] once per
//! frame, move the player, resolve contacts, then check
//! [`Level::is_finished`].

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorKind};
use super::geometry::Vector;
use super::grid::{Grid, Obstacle};
use crate::consts::FINISH_DELAY;
use crate::error::SimError;

/// Terminal result of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Anything the player can touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchKind {
    Wall,
    Lava,
    Player,
    Fireball,
    Coin,
}

impl From<Obstacle> for TouchKind {
    fn from(obstacle: Obstacle) -> Self {
        match obstacle {
            Obstacle::Wall => TouchKind::Wall,
            Obstacle::Lava => TouchKind::Lava,
        }
    }
}

impl From<ActorKind> for TouchKind {
    fn from(kind: ActorKind) -> Self {
        match kind {
            ActorKind::Player => TouchKind::Player,
            ActorKind::Fireball => TouchKind::Fireball,
            ActorKind::Coin => TouchKind::Coin,
        }
    }
}

/// A playable level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    grid: Grid,
    /// Live actors in spawn order
    actors: Vec<Actor>,
    /// First player found at construction
    player: Option<ActorId>,
    /// `None` while in progress; set at most once
    status: Option<Outcome>,
    /// Seconds left after `status` is set before the level is finished
    finish_delay: f32,
    next_id: u32,
}

impl Level {
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        let mut level = Self {
            grid,
            actors: Vec::with_capacity(actors.len()),
            player: None,
            status: None,
            finish_delay: FINISH_DELAY,
            next_id: 1,
        };
        for actor in actors {
            level.spawn(actor);
        }
        level.player = level
            .actors
            .iter()
            .find(|a| a.kind() == ActorKind::Player)
            .map(|a| a.id);
        level
    }

    /// Override the grace period used once the level is decided
    pub fn with_finish_delay(mut self, delay: f32) -> Self {
        self.finish_delay = delay;
        self
    }

    /// Add a live actor, assigning it a fresh id
    pub fn spawn(&mut self, mut actor: Actor) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        actor.id = id;
        self.actors.push(actor);
        id
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub fn player_id(&self) -> Option<ActorId> {
        self.player
    }

    pub fn player(&self) -> Option<&Actor> {
        self.player.and_then(|id| self.actor(id))
    }

    /// Mutable player access for the input handler
    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        let id = self.player?;
        self.actor_mut(id)
    }

    #[inline]
    pub fn status(&self) -> Option<Outcome> {
        self.status
    }

    #[inline]
    pub fn finish_delay(&self) -> f32 {
        self.finish_delay
    }

    /// Decided and past the grace period
    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// Terrain a box would hit at `pos` (see [`Grid::obstacle_at`])
    #[inline]
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// First live actor, other than `probe` itself, that `probe` overlaps.
    ///
    /// `probe` need not be part of the level, which lets the input handler
    /// test a proposed move before committing it.
    pub fn actor_at(&self, probe: &Actor) -> Option<&Actor> {
        self.actors
            .iter()
            .find(|candidate| candidate.id != probe.id && probe.overlaps(candidate))
    }

    /// [`Level::actor_at`] for a live actor addressed by id
    pub fn query_actor_at(&self, id: ActorId) -> Result<Option<&Actor>, SimError> {
        let probe = self.actor(id).ok_or(SimError::NotAnActor(id))?;
        Ok(self.actor_at(probe))
    }

    /// Remove a live actor; `None` if it was already gone
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|a| a.id == id)?;
        Some(self.actors.remove(index))
    }

    /// Number of live actors of `kind`
    pub fn remaining(&self, kind: ActorKind) -> usize {
        self.actors.iter().filter(|a| a.kind() == kind).count()
    }

    pub fn no_more(&self, kind: ActorKind) -> bool {
        !self.actors.iter().any(|a| a.kind() == kind)
    }

    /// React to the player touching something.
    ///
    /// Lava and fireballs lose the level. A coin is collected and the level
    /// is won once no coins remain. Ignored once the level is decided.
    pub fn on_player_touch(&mut self, kind: TouchKind, actor: Option<ActorId>) {
        if self.status.is_some() {
            return;
        }

        match kind {
            TouchKind::Lava | TouchKind::Fireball => {
                log::info!("Level lost (touched {:?})", kind);
                self.status = Some(Outcome::Lost);
            }
            TouchKind::Coin => {
                if let Some(coin) = actor.and_then(|id| self.remove_actor(id)) {
                    log::debug!(
                        "Collected coin {} ({} left)",
                        coin.id,
                        self.remaining(ActorKind::Coin)
                    );
                }
                if self.no_more(ActorKind::Coin) {
                    log::info!("Level won");
                    self.status = Some(Outcome::Won);
                }
            }
            TouchKind::Wall | TouchKind::Player => {}
        }
    }

    /// Advance every actor by `dt` seconds, in spawn order.
    ///
    /// Actors only see the static grid while acting, so the actor list
    /// cannot change during the pass.
    pub fn advance_time(&mut self, dt: f32) {
        let grid = &self.grid;
        for actor in &mut self.actors {
            actor.act(dt, grid);
        }

        if self.status.is_some() {
            self.finish_delay -= dt;
        }
    }

    /// Resolve what the player is currently touching.
    ///
    /// Any lava under the player's box takes priority, even next to a wall
    /// or a world edge, then the first overlapping actor. Returns the touch
    /// that was applied.
    pub fn check_player_contacts(&mut self) -> Option<TouchKind> {
        let player = self.player()?;

        let (kind, actor) = if self.grid.touches(player.pos, player.size(), Obstacle::Lava) {
            log::debug!("Player touched {}", Obstacle::Lava.as_str());
            (TouchKind::Lava, None)
        } else {
            let hit = self.actor_at(player)?;
            log::debug!("Player touched {} {}", hit.kind().as_str(), hit.id);
            (TouchKind::from(hit.kind()), Some(hit.id))
        };

        self.on_player_touch(kind, actor);
        Some(kind)
    }
}
