//! Tile Runner headless entry point
//!
//! Plays every configured level with a scripted player that walks right
//! until something stops it, and logs how each level ends. Pass a JSON
//! config path to use custom levels.

#[cfg(not(target_arch = "wasm32"))]
use glam::Vec2;
#[cfg(not(target_arch = "wasm32"))]
use tile_runner::GameConfig;
#[cfg(not(target_arch = "wasm32"))]
use tile_runner::consts::SIM_DT;
#[cfg(not(target_arch = "wasm32"))]
use tile_runner::sim::{Level, Obstacle, Outcome, TouchKind};

/// Give up on a level after this many simulated seconds
#[cfg(not(target_arch = "wasm32"))]
const MAX_SECONDS: f32 = 30.0;

/// Scripted player speed (cells per second)
#[cfg(not(target_arch = "wasm32"))]
const WALK_SPEED: f32 = 3.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tile Runner (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    for index in 0..config.level_count() {
        let level = match config.level(index, Some(index as u64)) {
            Ok(level) => level,
            Err(e) => {
                log::error!("{}", e);
                continue;
            }
        };

        let (outcome, seconds) = run_level(level);
        match outcome {
            Some(Outcome::Won) => log::info!("Level {}: won after {:.2}s", index + 1, seconds),
            Some(Outcome::Lost) => log::info!("Level {}: lost after {:.2}s", index + 1, seconds),
            None => log::info!("Level {}: undecided after {:.0}s", index + 1, seconds),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is embedded by a web driver; nothing to run here
}

/// Fixed-timestep loop: tick actors, move the player, resolve contacts,
/// poll for the end
#[cfg(not(target_arch = "wasm32"))]
fn run_level(mut level: Level) -> (Option<Outcome>, f32) {
    let max_ticks = (MAX_SECONDS / SIM_DT) as u32;
    for tick in 1..=max_ticks {
        level.advance_time(SIM_DT);
        if level.status().is_none() {
            walk_player(&mut level, SIM_DT);
        }
        level.check_player_contacts();
        if level.is_finished() {
            return (level.status(), tick as f32 * SIM_DT);
        }
    }
    (level.status(), MAX_SECONDS)
}

/// Propose a step to the right and commit it only if the terrain allows
#[cfg(not(target_arch = "wasm32"))]
fn walk_player(level: &mut Level, dt: f32) {
    let Some(player) = level.player() else {
        return;
    };
    let proposed = player.pos + Vec2::new(WALK_SPEED * dt, 0.0);

    match level.obstacle_at(proposed, player.size()) {
        None => {
            if let Some(player) = level.player_mut() {
                player.pos = proposed;
            }
        }
        Some(Obstacle::Lava) => {
            log::debug!("Player walked into {}", Obstacle::Lava.as_str());
            level.on_player_touch(TouchKind::Lava, None);
        }
        Some(obstacle @ Obstacle::Wall) => {
            log::trace!("Player blocked by {}", obstacle.as_str());
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_walker_reaches_lava_in_second_level() {
        let level = GameConfig::default().level(1, Some(1)).unwrap();
        let (outcome, seconds) = run_level(level);
        assert_eq!(outcome, Some(Outcome::Lost));
        assert!(seconds < MAX_SECONDS);
    }

    #[test]
    fn test_walker_stops_at_walls() {
        let config = GameConfig::from_json(r#"{ "levels": [["    ", "@ x ", "xxxx"]] }"#).unwrap();
        let mut level = config.level(0, Some(0)).unwrap();
        for _ in 0..120 {
            walk_player(&mut level, SIM_DT);
        }
        let player = level.player().unwrap();
        assert!(player.right() <= 2.0);
        assert!(player.right() > 1.9);
        assert_eq!(level.status(), None);
    }
}
