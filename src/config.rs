//! Game configuration
//!
//! The legend and the ordered list of level plans. Owned by the driver and
//! handed to the core; there is no global parser or level table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FINISH_DELAY;
use crate::error::ConfigError;
use crate::sim::{Glyph, Legend, Level, LevelParser};

/// Levels bundled with the crate
const DEFAULT_LEVELS: [&[&str]; 3] = [
    &[
        "!!!!v    ",
        "         ",
        "         ",
        " o       ",
        "xxxx     ",
        "       o ",
        "     xxxx",
        "         ",
        " @     o ",
        "xxxx xxxx",
        "         ",
    ],
    &[
        "         ",
        "         ",
        "    =    ",
        "       o ",
        "     !xxx",
        " @      ",
        "xxx!     ",
        "         ",
    ],
    &[
        "      v  ",
        "    v    ",
        "  v      ",
        "        o",
        "        x",
        "@   x    ",
        "x        ",
        "         ",
    ],
];

/// Legend and level plans for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Symbol table shared by every level
    pub legend: Legend,
    /// Level plans in play order, one string per row
    pub levels: Vec<Vec<String>>,
    /// Seconds a decided level stays on screen
    pub finish_delay: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            legend: Self::default_legend(),
            levels: DEFAULT_LEVELS
                .iter()
                .map(|plan| plan.iter().map(|row| row.to_string()).collect())
                .collect(),
            finish_delay: FINISH_DELAY,
        }
    }
}

impl GameConfig {
    pub fn default_legend() -> Legend {
        Legend::from([
            ('@', Glyph::Player),
            ('o', Glyph::Coin),
            ('v', Glyph::FireRain),
            ('=', Glyph::HorizontalFireball),
            ('|', Glyph::VerticalFireball),
        ])
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded {} levels from {}",
            config.levels.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn parser(&self) -> LevelParser {
        LevelParser::new(self.legend.clone())
    }

    /// Build level `index`; `seed` fixes coin phases for reproducible runs
    pub fn level(&self, index: usize, seed: Option<u64>) -> Result<Level, ConfigError> {
        let plan = self.levels.get(index).ok_or(ConfigError::NoSuchLevel {
            index,
            count: self.levels.len(),
        })?;
        let parser = self.parser();
        let level = match seed {
            Some(seed) => parser.parse_seeded(plan.as_slice(), seed),
            None => parser.parse(plan.as_slice()),
        };
        Ok(level.with_finish_delay(self.finish_delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ActorKind;
    use glam::Vec2;

    #[test]
    fn test_default_levels_parse() {
        let config = GameConfig::default();
        assert_eq!(config.level_count(), 3);

        let level = config.level(0, Some(1)).unwrap();
        assert_eq!(level.width(), 9);
        assert_eq!(level.height(), 11);
        assert_eq!(level.remaining(ActorKind::Coin), 3);
        assert_eq!(level.remaining(ActorKind::Fireball), 1);
        assert_eq!(level.player().map(|p| p.pos), Some(Vec2::new(1.0, 7.5)));

        let level = config.level(1, Some(1)).unwrap();
        assert_eq!(level.remaining(ActorKind::Fireball), 1);
        assert_eq!(level.remaining(ActorKind::Coin), 1);

        let level = config.level(2, Some(1)).unwrap();
        assert_eq!(level.remaining(ActorKind::Fireball), 3);
        assert!(level.player().is_some());
    }

    #[test]
    fn test_missing_level() {
        let config = GameConfig::default();
        let err = config.level(3, None).unwrap_err();
        assert!(matches!(err, ConfigError::NoSuchLevel { index: 3, count: 3 }));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "legend": {
                "@": "player",
                "o": "coin",
                ">": { "fireball": { "velocity": [1.0, 0.0] } }
            },
            "levels": [["x@o>", "xxxx"]]
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.finish_delay, FINISH_DELAY);
        assert_eq!(
            config.legend.get(&'>'),
            Some(&Glyph::Fireball { velocity: Vec2::new(1.0, 0.0) })
        );

        let level = config.level(0, Some(9)).unwrap();
        assert_eq!(level.actors().len(), 3);
        assert_eq!(level.actors()[2].vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_json_round_trip_keeps_legend() {
        let config = GameConfig::default();
        let json = config.to_json().unwrap();
        let restored = GameConfig::from_json(&json).unwrap();
        assert_eq!(restored.legend, config.legend);
        assert_eq!(restored.levels, config.levels);
    }

    #[test]
    fn test_invalid_json() {
        let err = GameConfig::from_json("{ \"levels\": 5 }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_finish_delay_applies_to_levels() {
        let config = GameConfig {
            finish_delay: 0.25,
            ..GameConfig::default()
        };
        let level = config.level(0, Some(0)).unwrap();
        assert_eq!(level.finish_delay(), 0.25);
    }
}
