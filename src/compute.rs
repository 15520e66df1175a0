//! The simulation: spawning, fire handling and the per-tick loop.
//!
//! `Game` owns the canvas, the registry and the dice.  `tick` performs one
//! frame of work without touching the terminal; `run` wires a `Game` to a
//! keyboard, a clock and an output stream and loops until the player quits.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::canvas::Canvas;
use crate::config::GameConfig;
use crate::dice::Dice;
use crate::entities::{BlinkablePlayer, Bullet, Direction, Enemy, ENEMY_SHAPE, PLAYER_SHAPE};
use crate::error::{GameError, Result};
use crate::input::{poll_command, Command, Keyboard};
use crate::registry::{Registry, SlotId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Quit was requested; the current tick still completes.
    Terminating,
}

// ── Clock ─────────────────────────────────────────────────────────────────────

pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock pacing.
#[derive(Debug, Default)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

// ── Game ──────────────────────────────────────────────────────────────────────

/// Where the next bullet goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BulletSlot {
    /// Put a fresh bullet here, dropping anything the slot held.
    Fresh(SlotId),
    /// Refire the spent bullet already living here.
    Reuse(SlotId),
}

pub struct Game<D> {
    config: GameConfig,
    canvas: Canvas,
    registry: Registry,
    dice: D,
    state: LoopState,
    frame: u64,
}

impl<D: Dice> Game<D> {
    /// An empty game: blank canvas, no objects.  Fails when `config` does
    /// not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig, dice: D) -> Result<Self> {
        config.validate()?;
        Ok(Game {
            canvas: Canvas::new(config.canvas_width),
            registry: Registry::new(config.capacity),
            dice,
            state: LoopState::Running,
            frame: 0,
            config,
        })
    }

    /// A game with its opening objects already spawned.
    pub fn with_initial_objects(config: GameConfig, dice: D) -> Result<Self> {
        let mut game = Game::new(config, dice)?;
        game.spawn_initial()?;
        Ok(game)
    }

    /// Fill the first slots with a random mix of blinkable players and
    /// enemies at random positions.
    pub fn spawn_initial(&mut self) -> Result<()> {
        let width = u32::try_from(self.config.canvas_width).map_err(|_| {
            GameError::InvalidConfig {
                field: "canvas_width",
                reason: "must fit in u32",
            }
        })?;
        for _ in 0..self.config.initial_objects {
            let id = if self.dice.roll(2) == 0 {
                let pos = self.position_below(width);
                self.registry
                    .insert(BlinkablePlayer::new(PLAYER_SHAPE, pos, true)?)?
            } else {
                let pos = self.position_below(width);
                self.registry
                    .insert(Enemy::with_hp(ENEMY_SHAPE, pos, true, self.config.enemy_hp)?)?
            };
            if let Some(entity) = self.registry.get(id) {
                debug!(slot = id.0, stamp = %entity.stamp(), "spawned");
            }
        }
        info!(objects = self.registry.len(), "game ready");
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Ticks completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Fire => {
                self.fire();
            }
            Command::Quit => {
                info!(frame = self.frame, "quit requested");
                self.state = LoopState::Terminating;
            }
        }
    }

    /// Fire from the visible player nearest a random target and start it
    /// blinking.  Returns the bullet's slot, or `None` when there is no
    /// player to shoot from or nowhere to put the bullet.
    pub fn fire(&mut self) -> Option<SlotId> {
        let target = self.position_below(self.config.target_range);
        let player_id = self.registry.nearest_visible_player(target)?;
        let source = self.registry.get(player_id)?.body().clone();
        debug!(target, player = source.position(), "fire");

        let Some(slot) = self.bullet_slot() else {
            warn!(capacity = self.registry.capacity(), "no slot free for a bullet");
            return None;
        };
        let direction = Direction::from_roll(self.dice.roll(2));

        let id = match slot {
            BulletSlot::Fresh(id) => {
                let mut bullet = Bullet::default();
                bullet.fire(Some(&source), direction);
                if let Some(previous) = self.registry.replace(id, bullet) {
                    debug!(slot = id.0, reclaimed = %previous.kind(), "slot reclaimed");
                }
                id
            }
            BulletSlot::Reuse(id) => {
                let bullet = self.registry.get_mut(id)?.as_bullet_mut()?;
                bullet.fire(Some(&source), direction);
                id
            }
        };

        if let Some(player) = self.registry.get_mut(player_id) {
            player.blink(self.config.blink_frames);
        }
        Some(id)
    }

    /// Roll a position in `[0, bound)`.  Validated configs keep `bound`
    /// within `i32`; anything larger clamps.
    fn position_below(&mut self, bound: u32) -> i32 {
        i32::try_from(self.dice.roll(bound)).unwrap_or(i32::MAX)
    }

    /// Empty slots first, then spent bullets, then (when enabled) the slots
    /// of destroyed enemies.
    fn bullet_slot(&self) -> Option<BulletSlot> {
        if let Some(id) = self.registry.first_free() {
            return Some(BulletSlot::Fresh(id));
        }
        if let Some(id) = self
            .registry
            .find(|e| e.is_bullet() && !e.is_visible())
        {
            return Some(BulletSlot::Reuse(id));
        }
        if self.config.reclaim_dead_enemies {
            return self
                .registry
                .find(|e| e.as_enemy().map_or(false, Enemy::is_dead))
                .map(BulletSlot::Fresh);
        }
        None
    }

    /// One frame: clear, apply input, update everything, draw everything.
    /// Rendering and pacing are left to the caller.
    pub fn tick(&mut self, command: Option<Command>) {
        self.canvas.clear();
        if let Some(command) = command {
            self.handle_command(command);
        }
        self.registry.update_all(&mut self.dice);
        self.registry.draw_all(&mut self.canvas);
        self.frame += 1;
    }

    /// Release every object.  Returns how many were dropped.
    pub fn shutdown(&mut self) -> usize {
        let released = self.registry.release_all();
        info!(released, frames = self.frame, "game over");
        released
    }
}

// ── Loop ──────────────────────────────────────────────────────────────────────

/// Drive `game` until quit: poll, tick, render, sleep.  The tick that sees
/// the quit key is still rendered and paced before the objects are released.
pub fn run<D, K, C, W>(
    game: &mut Game<D>,
    keyboard: &mut K,
    clock: &mut C,
    out: &mut W,
) -> anyhow::Result<()>
where
    D: Dice,
    K: Keyboard + ?Sized,
    C: Clock + ?Sized,
    W: Write + ?Sized,
{
    let interval = game.config().frame_interval;

    while game.state() == LoopState::Running {
        let command = poll_command(keyboard).context("reading keyboard")?;
        game.tick(command);
        game.canvas().render(out).context("rendering frame")?;
        clock.sleep(interval);
    }

    game.shutdown();
    Ok(())
}
