//! Game tunables.

use std::time::Duration;

use anyhow::{anyhow, Context};

use crate::entities::ENEMY_HP;
use crate::error::{GameError, Result};

/// Widest supported play row; terminal columns are `u16`.
pub const MAX_CANVAS_WIDTH: usize = u16::MAX as usize;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Cells in the play row.
    pub canvas_width: usize,
    /// Registry slots.
    pub capacity: usize,
    /// Objects spawned before the first tick.
    pub initial_objects: usize,
    /// Fire targets are rolled in `[0, target_range)`.
    pub target_range: u32,
    /// Frames a player blinks after firing.
    pub blink_frames: u32,
    pub enemy_hp: i32,
    /// Pause between ticks.
    pub frame_interval: Duration,
    /// Let the bullet allocator take over slots of destroyed enemies.
    pub reclaim_dead_enemies: bool,
    /// Fixed RNG seed; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            canvas_width: 80,
            capacity: 50,
            initial_objects: 5,
            target_range: 75,
            blink_frames: 30,
            enemy_hp: ENEMY_HP,
            frame_interval: Duration::from_millis(100),
            reclaim_dead_enemies: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reject values that would leave the dice nothing to roll or push
    /// positions past `i32`.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 {
            return Err(GameError::InvalidConfig {
                field: "canvas_width",
                reason: "must be at least 1",
            });
        }
        if self.canvas_width > MAX_CANVAS_WIDTH {
            return Err(GameError::InvalidConfig {
                field: "canvas_width",
                reason: "must fit in a terminal row (65535)",
            });
        }
        if self.target_range == 0 {
            return Err(GameError::InvalidConfig {
                field: "target_range",
                reason: "must be at least 1",
            });
        }
        if i32::try_from(self.target_range).is_err() {
            return Err(GameError::InvalidConfig {
                field: "target_range",
                reason: "must fit in i32",
            });
        }
        Ok(())
    }

    /// Defaults overridden by `--seed <u64>`, `--width <cells>` and
    /// `--faithful-leak`.  The first item is expected to be the program name.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = GameConfig::default();
        let mut args = args.into_iter().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                    config.seed = Some(
                        value
                            .parse()
                            .with_context(|| format!("invalid seed '{}'", value))?,
                    );
                }
                "--width" => {
                    let value = args.next().ok_or_else(|| anyhow!("--width needs a value"))?;
                    config.canvas_width = value
                        .parse()
                        .with_context(|| format!("invalid width '{}'", value))?;
                }
                "--faithful-leak" => config.reclaim_dead_enemies = false,
                other => return Err(anyhow!("unknown argument '{}'", other)),
            }
        }

        config.validate()?;
        Ok(config)
    }
}
