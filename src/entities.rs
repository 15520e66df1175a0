//! Game objects.
//!
//! Every object shares a `GameObject` body (shape, position, visibility).
//! The set of kinds is closed, so `Entity` is an enum and capability checks
//! are plain matches.

use std::fmt;

use tracing::trace;

use crate::canvas::Canvas;
use crate::dice::Dice;
use crate::error::{GameError, Result};

pub const PLAYER_SHAPE: &str = "P";
pub const ENEMY_SHAPE: &str = "E";
pub const RIGHT_BULLET_SHAPE: &str = ">";
pub const LEFT_BULLET_SHAPE: &str = "<";

/// Hit points a freshly spawned enemy starts with.
pub const ENEMY_HP: i32 = 1;

// ── Shared body ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GameObject {
    shape: String,
    pos: i32,
    visible: bool,
}

impl GameObject {
    pub fn new(shape: &str, pos: i32, visible: bool) -> Result<Self> {
        if shape.is_empty() {
            return Err(GameError::EmptyShape);
        }
        Ok(GameObject {
            shape: shape.to_string(),
            pos,
            visible,
        })
    }

    pub fn position(&self) -> i32 {
        self.pos
    }

    pub fn set_position(&mut self, pos: i32) {
        self.pos = pos;
    }

    pub fn shape(&self) -> &str {
        &self.shape
    }

    pub fn set_shape(&mut self, shape: &str) -> Result<()> {
        if shape.is_empty() {
            return Err(GameError::EmptyShape);
        }
        self.shape.clear();
        self.shape.push_str(shape);
        Ok(())
    }

    /// Width in canvas cells.
    pub fn shape_len(&self) -> i32 {
        self.shape.chars().count() as i32
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Positions saturate at the `i32` bounds; a bullet nobody stops just
    /// parks there.
    pub fn move_by(&mut self, speed: i32) {
        self.pos = self.pos.saturating_add(speed);
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.draw(&self.shape, self.pos, self.visible);
    }
}

// ── Players ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: GameObject,
}

impl Player {
    pub fn new(shape: &str, pos: i32, visible: bool) -> Result<Self> {
        Ok(Player {
            body: GameObject::new(shape, pos, visible)?,
        })
    }
}

/// A player that flashes for a while after firing.
#[derive(Clone, Debug, PartialEq)]
pub struct BlinkablePlayer {
    pub body: GameObject,
    blink_frames: u32,
}

impl BlinkablePlayer {
    pub fn new(shape: &str, pos: i32, visible: bool) -> Result<Self> {
        Ok(BlinkablePlayer {
            body: GameObject::new(shape, pos, visible)?,
            blink_frames: 0,
        })
    }

    /// Flash over the next `frames` draws.
    pub fn blink(&mut self, frames: u32) {
        self.blink_frames = frames;
    }

    pub fn blink_frames(&self) -> u32 {
        self.blink_frames
    }

    pub fn is_blinking(&self) -> bool {
        self.blink_frames > 0
    }

    /// While blinking, every draw consumes one frame of the countdown and the
    /// frames that start on an odd count are skipped.
    pub fn draw(&mut self, canvas: &mut Canvas) {
        if self.blink_frames > 0 {
            let current = self.blink_frames;
            self.blink_frames -= 1;
            if current % 2 == 1 {
                return;
            }
        }
        self.body.draw(canvas);
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: GameObject,
    hp: i32,
}

impl Enemy {
    pub fn new(shape: &str, pos: i32, visible: bool) -> Result<Self> {
        Self::with_hp(shape, pos, visible, ENEMY_HP)
    }

    pub fn with_hp(shape: &str, pos: i32, visible: bool, hp: i32) -> Result<Self> {
        Ok(Enemy {
            body: GameObject::new(shape, pos, visible)?,
            hp,
        })
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Take one hit.  At zero hit points the enemy disappears for good.
    pub fn on_hit(&mut self) {
        self.hp = (self.hp - 1).max(0);
        if self.hp <= 0 {
            self.body.set_visible(false);
        }
    }

    /// Random walk: 10% right, 10% left, otherwise stay put.
    pub fn update<D: Dice + ?Sized>(&mut self, dice: &mut D) {
        match dice.roll(100) {
            90.. => self.body.move_by(1),
            80..=89 => self.body.move_by(-1),
            _ => {}
        }
    }

    pub fn is_colliding(&self, pos: i32) -> bool {
        let start = self.body.position();
        pos >= start && pos < start.saturating_add(self.body.shape_len())
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
}

impl Direction {
    /// `0` travels right, anything else travels left.
    pub fn from_roll(roll: u32) -> Self {
        if roll == 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    pub fn step(self) -> i32 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub body: GameObject,
    direction: Direction,
}

impl Default for Bullet {
    /// An unfired bullet: hidden, pointing right.
    fn default() -> Self {
        Bullet {
            body: GameObject {
                shape: RIGHT_BULLET_SHAPE.to_string(),
                pos: 0,
                visible: false,
            },
            direction: Direction::Right,
        }
    }
}

impl Bullet {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Launch from beside `source`: in front of it when travelling right,
    /// on top of it when travelling left.  No source, no shot.
    pub fn fire(&mut self, source: Option<&GameObject>, direction: Direction) {
        let Some(source) = source else {
            return;
        };
        let (pos, glyph) = match direction {
            Direction::Right => (
                source.position().saturating_add(source.shape_len()),
                RIGHT_BULLET_SHAPE,
            ),
            Direction::Left => (source.position(), LEFT_BULLET_SHAPE),
        };
        self.body.set_visible(true);
        self.body.set_position(pos);
        self.body.shape.clear();
        self.body.shape.push_str(glyph);
        self.direction = direction;
    }

    pub fn step(&mut self) {
        self.body.move_by(self.direction.step());
    }

    /// Hit the first live enemy under the bullet, or keep flying.  Spent
    /// bullets sit idle until the allocator hands them out again.
    pub fn update(&mut self, others: &mut [Option<Entity>]) {
        if !self.body.is_visible() {
            return;
        }
        let pos = self.body.position();
        let target = others
            .iter_mut()
            .flatten()
            .filter_map(Entity::as_enemy_mut)
            .find(|enemy| enemy.body.is_visible() && enemy.is_colliding(pos));
        match target {
            Some(enemy) => {
                enemy.on_hit();
                self.body.set_visible(false);
            }
            None => self.step(),
        }
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    BlinkablePlayer,
    Enemy,
    Bullet,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Blinking players identify as plain players.
        let label = match self {
            EntityKind::Player | EntityKind::BlinkablePlayer => "Player",
            EntityKind::Enemy => "Enemy",
            EntityKind::Bullet => "Bullet",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Player(Player),
    BlinkablePlayer(BlinkablePlayer),
    Enemy(Enemy),
    Bullet(Bullet),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::BlinkablePlayer(_) => EntityKind::BlinkablePlayer,
            Entity::Enemy(_) => EntityKind::Enemy,
            Entity::Bullet(_) => EntityKind::Bullet,
        }
    }

    pub fn body(&self) -> &GameObject {
        match self {
            Entity::Player(p) => &p.body,
            Entity::BlinkablePlayer(p) => &p.body,
            Entity::Enemy(e) => &e.body,
            Entity::Bullet(b) => &b.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut GameObject {
        match self {
            Entity::Player(p) => &mut p.body,
            Entity::BlinkablePlayer(p) => &mut p.body,
            Entity::Enemy(e) => &mut e.body,
            Entity::Bullet(b) => &mut b.body,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Entity::Player(_) | Entity::BlinkablePlayer(_))
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self, Entity::Enemy(_))
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self, Entity::Bullet(_))
    }

    pub fn is_visible(&self) -> bool {
        self.body().is_visible()
    }

    pub fn as_enemy(&self) -> Option<&Enemy> {
        match self {
            Entity::Enemy(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_enemy_mut(&mut self) -> Option<&mut Enemy> {
        match self {
            Entity::Enemy(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_bullet(&self) -> Option<&Bullet> {
        match self {
            Entity::Bullet(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bullet_mut(&mut self) -> Option<&mut Bullet> {
        match self {
            Entity::Bullet(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_blinkable(&self) -> Option<&BlinkablePlayer> {
        match self {
            Entity::BlinkablePlayer(p) => Some(p),
            _ => None,
        }
    }

    /// Start blinking.  Players that cannot blink ignore this.
    pub fn blink(&mut self, frames: u32) {
        if let Entity::BlinkablePlayer(p) = self {
            p.blink(frames);
        }
    }

    /// Advance one tick.  `others` is the registry with this entity's own
    /// slot vacated.
    pub fn update<D: Dice + ?Sized>(&mut self, others: &mut [Option<Entity>], dice: &mut D) {
        match self {
            Entity::Enemy(e) => e.update(dice),
            Entity::Bullet(b) => b.update(others),
            Entity::Player(_) | Entity::BlinkablePlayer(_) => {}
        }
    }

    pub fn draw(&mut self, canvas: &mut Canvas) {
        match self {
            Entity::BlinkablePlayer(p) => p.draw(canvas),
            other => other.body().draw(canvas),
        }
    }

    /// Debug identity: kind plus address.
    pub fn stamp(&self) -> String {
        let stamp = format!("{} {:p}", self.kind(), self);
        trace!(%stamp, pos = self.body().position(), "entity");
        stamp
    }
}

impl From<Player> for Entity {
    fn from(p: Player) -> Self {
        Entity::Player(p)
    }
}

impl From<BlinkablePlayer> for Entity {
    fn from(p: BlinkablePlayer) -> Self {
        Entity::BlinkablePlayer(p)
    }
}

impl From<Enemy> for Entity {
    fn from(e: Enemy) -> Self {
        Entity::Enemy(e)
    }
}

impl From<Bullet> for Entity {
    fn from(b: Bullet) -> Self {
        Entity::Bullet(b)
    }
}
